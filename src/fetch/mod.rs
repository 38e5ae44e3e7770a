pub mod aggregator;
pub mod postgres;
pub mod store;

pub use aggregator::{assemble_document, section_counts};
pub use postgres::PgStore;
pub use store::WeddingStore;
