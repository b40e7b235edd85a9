pub mod record;
pub mod sector;

pub use record::MemoryRecord;
pub use sector::{cap_unique, MemorySector};
