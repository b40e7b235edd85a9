pub mod taxonomy;

pub use taxonomy::QueryType;
