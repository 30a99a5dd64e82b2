use std::io::{self, BufRead, Write};

use crate::data::filter::{Threshold, ThresholdError, MAX_THRESHOLD};

/// Line-oriented console over any input/output pair.
///
/// Every prompt returns `Ok(None)` once input is exhausted so the caller can
/// wind down instead of spinning on an empty stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (tests inspect what was written).
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `prompt` without a newline and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is an integer. Range checking is left to the caller.
    pub fn ask_choice(&mut self, max: usize) -> io::Result<Option<i64>> {
        loop {
            let Some(answer) = self.ask("Enter choice: ")? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(_) => {
                    log::debug!("rejected menu input '{answer}'");
                    self.say(&format!(
                        "Invalid input! Please enter a number between 1 and {max}."
                    ))?;
                }
            }
        }
    }

    /// Ask until the answer is a threshold in range.
    pub fn ask_threshold(&mut self) -> io::Result<Option<Threshold>> {
        let prompt = format!("Enter threshold (0 to {MAX_THRESHOLD}): ");
        loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match answer.parse::<Threshold>() {
                Ok(threshold) => return Ok(Some(threshold)),
                Err(ThresholdError::NotANumber(_)) => self.say(&format!(
                    "Invalid input! Please enter a number between 0 and {MAX_THRESHOLD}."
                ))?,
                Err(ThresholdError::OutOfRange(_)) => self.say(&format!(
                    "Invalid threshold! Please enter a value between 0 and {MAX_THRESHOLD}."
                ))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn ask_trims_answer() {
        let mut c = console("  hello \n");
        assert_eq!(c.ask("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.ask("> ").unwrap(), None);
    }

    #[test]
    fn choice_reprompts_on_text() {
        let mut c = console("abc\n\n3\n");
        assert_eq!(c.ask_choice(5).unwrap(), Some(3));
        let out = output(c);
        assert_eq!(
            out.matches("Invalid input! Please enter a number between 1 and 5.").count(),
            2
        );
    }

    #[test]
    fn threshold_reprompts_until_in_range() {
        let mut c = console("x\n400\n-3\n250\n");
        assert_eq!(c.ask_threshold().unwrap().map(Threshold::value), Some(250));
        let out = output(c);
        assert_eq!(out.matches("Invalid input!").count(), 1);
        assert_eq!(out.matches("Invalid threshold!").count(), 2);
        assert_eq!(out.matches("Enter threshold (0 to 300): ").count(), 4);
    }

    #[test]
    fn threshold_gives_up_at_end_of_input() {
        let mut c = console("999\n");
        assert_eq!(c.ask_threshold().unwrap(), None);
    }
}
