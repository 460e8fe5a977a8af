pub mod record;
pub mod stack;

pub use record::HistoryRecord;
pub use stack::HistoryManager;
