pub mod api;
pub mod core;
pub mod fetch;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use crate::core::{AppConfig, ExportError, ExportFormat, ExportResult, PageSetup};
pub use crate::fetch::{assemble_document, section_counts, PgStore, WeddingStore};
pub use crate::model::{Branding, SectionCounts, SectionId, WeddingDocument};
pub use crate::render::{DocxRenderer, PdfRenderer};
