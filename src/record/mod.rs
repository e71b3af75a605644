mod list;
mod position;

pub use list::RecordList;
pub use position::PositionRecord;
