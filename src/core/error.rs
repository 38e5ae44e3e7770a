use thiserror::Error;
use uuid::Uuid;

use crate::model::SectionId;

/// Failure taxonomy for a single export or preview request.
///
/// Aggregation is all-or-nothing: a failed section query fails the whole
/// request and names the section it came from. The only locally recovered
/// failure is a logo image that does not decode, which is logged and
/// skipped by the renderers instead of surfacing here.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("wedding {0} not found")]
    NotFound(Uuid),

    #[error("failed to load {section} data: {source}")]
    FetchFailed {
        section: SectionId,
        #[source]
        source: sqlx::Error,
    },

    #[error("unknown section: {0}")]
    InvalidSection(String),

    #[error("document rendering failed: {0}")]
    Render(String),
}

impl ExportError {
    pub fn fetch(section: SectionId, source: sqlx::Error) -> Self {
        ExportError::FetchFailed { section, source }
    }

    pub fn render(message: impl Into<String>) -> Self {
        ExportError::Render(message.into())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
