use actix_web::{web, HttpResponse};
use base64::Engine;
use serde::Deserialize;
use uuid::Uuid;

use crate::core::ExportFormat;
use crate::fetch::{assemble_document, section_counts, PgStore};
use crate::model::{Branding, RgbColor, SectionId};
use crate::render::{DocxRenderer, PdfRenderer};

use super::error::{ApiError, ApiResult};
use super::state::ApiState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Section wire names in the order they should render. Omitted means
    /// every section; an unknown name is a 400.
    pub sections: Option<Vec<String>>,
    pub branding: Option<BrandingRequest>,
}

#[derive(Debug, Deserialize)]
pub struct BrandingRequest {
    pub primary_color: Option<String>,
    /// Base64-encoded logo image bytes.
    pub logo: Option<String>,
}

/// Generate the export document and return the binary artifact directly.
pub async fn export_document(
    path: web::Path<Uuid>,
    body: web::Json<ExportRequest>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let wedding_id = path.into_inner();
    let request = body.into_inner();

    let sections = parse_sections(request.sections.as_deref())?;
    let branding = parse_branding(request.branding)?;

    let start = std::time::Instant::now();
    let store = PgStore::new(state.db.clone());
    let document = assemble_document(&store, wedding_id, &sections).await?;

    let bytes = match request.format {
        ExportFormat::Pdf => PdfRenderer::new().render(&document, &branding, &sections),
        ExportFormat::Docx => DocxRenderer::new().render(&document, &branding, &sections),
    }
    .map_err(|e| {
        tracing::error!(%wedding_id, format = %request.format, error = %e, "render failed");
        ApiError::from(e)
    })?;

    tracing::info!(
        %wedding_id,
        format = %request.format,
        sections = sections.len(),
        bytes = bytes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "export complete"
    );

    let filename = format!("wedding-plan.{}", request.format.extension());
    Ok(HttpResponse::Ok()
        .content_type(request.format.content_type())
        .append_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(bytes))
}

/// Per-section row counts so the UI can preview export size before
/// committing to a full fetch.
pub async fn preview_counts(
    path: web::Path<Uuid>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let wedding_id = path.into_inner();
    let store = PgStore::new(state.db.clone());

    let counts = section_counts(&store, wedding_id).await?;
    Ok(HttpResponse::Ok().json(counts))
}

fn parse_sections(names: Option<&[String]>) -> ApiResult<Vec<SectionId>> {
    let Some(names) = names else {
        return Ok(SectionId::ALL.to_vec());
    };

    let mut sections = Vec::with_capacity(names.len());
    for name in names {
        let section: SectionId = name
            .parse()
            .map_err(|e: crate::core::ExportError| ApiError::bad_request(e.to_string()))?;
        // First occurrence wins; a section fetches and renders once.
        if !sections.contains(&section) {
            sections.push(section);
        }
    }
    Ok(sections)
}

fn parse_branding(request: Option<BrandingRequest>) -> ApiResult<Branding> {
    let Some(request) = request else {
        return Ok(Branding::default());
    };

    let primary_color = match request.primary_color.as_deref() {
        Some(hex) => RgbColor::parse(hex)
            .ok_or_else(|| ApiError::bad_request(format!("invalid primary color: {}", hex)))?,
        None => RgbColor::DEFAULT_PRIMARY,
    };

    let logo = match request.logo.as_deref() {
        Some(encoded) => Some(
            base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .map_err(|e| ApiError::bad_request(format!("invalid logo encoding: {}", e)))?,
        ),
        None => None,
    };

    Ok(Branding { primary_color, logo })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_sections_default_to_all_in_canonical_order() {
        let sections = parse_sections(None).unwrap();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }

    #[test]
    fn sections_keep_caller_order_and_drop_duplicates() {
        let names = vec![
            "budget_summary".to_string(),
            "guest_list".to_string(),
            "budget_summary".to_string(),
        ];
        let sections = parse_sections(Some(names.as_slice())).unwrap();
        assert_eq!(
            sections,
            vec![SectionId::BudgetSummary, SectionId::GuestList]
        );
    }

    #[test]
    fn unknown_section_is_a_bad_request() {
        let names = vec!["cake_tasting".to_string()];
        assert!(parse_sections(Some(names.as_slice())).is_err());
    }

    #[test]
    fn branding_rejects_malformed_color() {
        let req = BrandingRequest {
            primary_color: Some("#zzz".to_string()),
            logo: None,
        };
        assert!(parse_branding(Some(req)).is_err());
    }
}
