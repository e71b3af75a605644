pub mod error;
pub mod merge;
pub mod output;
pub(crate) mod parser;
pub mod reader;
pub mod record;
pub mod report;
pub mod sniff;
pub mod types;

pub use error::{GenopsError, Result};
pub use record::{PositionRecord, RecordList};
pub use sniff::SnifferRegistry;
