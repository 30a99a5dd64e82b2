//! Console front end.
//!
//! `args` parses the command line, `menu` defines the numbered layouts,
//! `prompt` wraps line-based input with re-prompting, and `runner` drives a
//! session: load a file, then loop over menu choices until Exit.
pub mod args;
pub mod menu;
pub mod prompt;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
