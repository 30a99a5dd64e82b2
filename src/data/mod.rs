//! Data layer: core types, loading, filtering and ordering.
//!
//! Architecture:
//! ```text
//!   marks file (.txt)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse lines → Roster + skipped lines
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Roster   │  unit name, Vec<StudentRecord>
//!   └──────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐   ┌──────────┐
//!   │  filter   │   │  order    │  threshold selection / sort by total
//!   └──────────┘   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod order;
