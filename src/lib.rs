//! Load a unit's student marks from a text file, total them, and browse the
//! roster from a console menu.
//!
//! ```text
//! marks file → data::loader → Roster → state::AppState ← cli (menu loop)
//! ```
//!
//! 1. [`data`] — record type, file loader, threshold filter and ordering.
//! 2. [`state`] — the session's single roster and the text of each report.
//! 3. [`cli`] — argument parsing, prompts and the interactive loop.

pub mod cli;
pub mod data;
pub mod state;
