use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::loader::{load_file, LoadError, LoadReport};
use crate::data::order::SortOrder;
use crate::state::AppState;

use super::args::CliArgs;
use super::menu::{Menu, MenuAction};
use super::prompt::Console;

/// Entry point used by `main`: wire stdin/stdout to a session.
pub fn run(args: CliArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut state = AppState::default();
    let menu = Menu::new(args.menu, args.top);

    match &args.file {
        Some(path) => {
            let report = match load_file(path) {
                Ok(report) => report,
                Err(e) => {
                    let e = anyhow::Error::new(e)
                        .context(format!("loading roster from {}", path.display()));
                    log::error!("Failed to load file: {e:#}");
                    return Err(e);
                }
            };
            install(&mut console, &mut state, path, report).context("writing to console")?;
        }
        None => {
            if !prompt_for_file(&mut console, &mut state).context("reading file name")? {
                return Ok(());
            }
        }
    }

    run_menu(&mut console, &mut state, &menu).context("running menu")
}

/// Ask for a file name until one loads. Returns `false` if input ran out first.
pub fn prompt_for_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
) -> io::Result<bool> {
    loop {
        let Some(name) = console.ask("Enter file name: ")? else {
            return Ok(false);
        };
        let path = Path::new(&name);
        match load_file(path) {
            Ok(report) => {
                install(console, state, path, report)?;
                return Ok(true);
            }
            Err(e) => {
                let message = match e {
                    LoadError::Open { .. } => {
                        "File does not exist or cannot be opened. Please try again."
                    }
                    LoadError::Read { .. } => "File could not be read. Please try again.",
                };
                log::warn!("{:#}", anyhow::Error::new(e));
                console.say(message)?;
            }
        }
    }
}

/// Report skipped lines, then hand the roster to the session state.
fn install<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
    path: &Path,
    report: LoadReport,
) -> io::Result<()> {
    for skipped in &report.skipped {
        console.say(&skipped.to_string())?;
    }
    state.set_report(path, report);
    Ok(())
}

/// Show the menu and dispatch choices until Exit or end of input.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &mut AppState,
    menu: &Menu,
) -> io::Result<()> {
    loop {
        console.say(&menu.render())?;
        let Some(choice) = console.ask_choice(menu.len())? else {
            return Ok(());
        };

        let Some(action) = menu.action(choice) else {
            console.say("Invalid option.")?;
            continue;
        };

        match action {
            MenuAction::DisplayAll => console.say(&state.display_all())?,
            MenuAction::FilterBelowThreshold => {
                let Some(threshold) = console.ask_threshold()? else {
                    return Ok(());
                };
                console.say(&state.filter_report(threshold))?;
            }
            MenuAction::SortAscending => console.say(state.sort(SortOrder::Ascending))?,
            MenuAction::SortDescending => console.say(state.sort(SortOrder::Descending))?,
            MenuAction::TopHighest => {
                console.say(&state.top_report(SortOrder::Descending, menu.top_n))?
            }
            MenuAction::TopLowest => {
                console.say(&state.top_report(SortOrder::Ascending, menu.top_n))?
            }
            MenuAction::Exit => {
                console.say("Exiting program...")?;
                return Ok(());
            }
        }
    }
}
