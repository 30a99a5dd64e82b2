use clap::Parser;
use std::path::PathBuf;

use super::menu::{MenuLayout, DEFAULT_TOP_N};

#[derive(Debug, Parser)]
#[command(name = "student-marks", version, about = "Browse a student marks file")]
pub struct CliArgs {
    /// Marks file to load. Prompted for interactively when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Menu layout (filter, ranking or full)
    #[arg(short, long, value_enum, default_value_t = MenuLayout::Full)]
    pub menu: MenuLayout,

    /// How many students the top-N views show
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::parse_from(["student-marks"]);
        assert!(args.file.is_none());
        assert_eq!(args.menu, MenuLayout::Full);
        assert_eq!(args.top, 5);
    }

    #[test]
    fn explicit_values() {
        let args =
            CliArgs::parse_from(["student-marks", "-f", "unit.txt", "--menu", "ranking", "--top", "3"]);
        assert_eq!(args.file.as_deref(), Some(std::path::Path::new("unit.txt")));
        assert_eq!(args.menu, MenuLayout::Ranking);
        assert_eq!(args.top, 3);
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(CliArgs::try_parse_from(["student-marks", "--menu", "fancy"]).is_err());
    }
}
