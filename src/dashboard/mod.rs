//! Dashboard core
//!
//! Reduces raw run listings into per-workflow summaries and packs the
//! resulting cards into rows that fit the terminal.

pub mod billing;
pub mod collect;
pub mod elapsed;
pub mod health;
pub mod layout;
pub mod run;
pub mod workflow;

pub use collect::{collect_all, collect_repository, discover_repositories, Selection};
pub use health::HealthSymbol;
pub use layout::{cards_per_row, layout_rows, truncate_name};
pub use run::{filter_recent, Conclusion, Run, RunStatus};
pub use workflow::{total_billable_ms, Repository, Workflow};
