pub mod api;
pub mod archive;
pub mod cli;
pub mod error;
pub mod types;

pub use api::ArchiveIndexer;
pub use cli::report::TextReport;
pub use error::{ArchiveError, Result};
pub use types::*;
