//! TUI Link-up (workspace facade crate).
//!
//! This package keeps a single `tui_linkup::{core,records,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_linkup_core as core;
pub use tui_linkup_records as records;
pub use tui_linkup_types as types;
