//! CLI command handlers, one per file.

mod checksum;
mod list;
mod run;

pub use checksum::run_checksum;
pub use list::run_list;
pub use run::run_mirror;
