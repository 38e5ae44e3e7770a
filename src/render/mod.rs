pub mod docx;
pub mod filter;
pub mod ir;
pub mod pdf;
pub mod sections;

pub use docx::DocxRenderer;
pub use filter::has_content;
pub use ir::{Block, Column, SectionIr, TableBlock};
pub use pdf::PdfRenderer;
pub use sections::{compose, compose_selected};
