pub mod canvas;

use chrono::Utc;
use printpdf::image_crate::load_from_memory;
use printpdf::{Image, ImageTransform, Mm};

use crate::core::{ExportResult, PageSetup};
use crate::model::{Branding, SectionId, WeddingDocument};
use crate::render::ir::Block;
use crate::render::sections::{compose_selected, util};

use canvas::{PdfCanvas, BODY_SIZE};

/// Orchestrator for the paginated target: walks the selected sections in
/// order, threading the vertical cursor through the canvas, and serializes
/// the accumulated drawing state to PDF bytes.
pub struct PdfRenderer {
    setup: PageSetup,
}

impl PdfRenderer {
    pub fn new() -> Self {
        PdfRenderer {
            setup: PageSetup::default(),
        }
    }

    pub fn with_setup(setup: PageSetup) -> Self {
        PdfRenderer { setup }
    }

    pub fn render(
        &self,
        doc: &WeddingDocument,
        branding: &Branding,
        sections: &[SectionId],
    ) -> ExportResult<Vec<u8>> {
        let title = format!("Wedding Plan - {}", doc.couple());
        let mut canvas = PdfCanvas::new(&title, self.setup.clone())?;

        self.draw_header(&mut canvas, doc, branding);

        for ir in compose_selected(doc, sections) {
            canvas.ensure_section_start();
            canvas.spacer(4.0);
            canvas.set_color(branding.primary_color);
            canvas.line(&ir.title, 13.0, true);
            canvas.reset_color();
            canvas.spacer(1.5);

            for block in &ir.blocks {
                match block {
                    Block::Subheading(text) => {
                        canvas.spacer(2.0);
                        canvas.line(text, 10.5, true);
                    }
                    Block::Paragraph(text) => canvas.wrapped(text, BODY_SIZE),
                    Block::KeyValues(pairs) => canvas.key_values(pairs),
                    Block::Table(table) => canvas.table(table, branding.primary_color),
                }
            }
            canvas.spacer(3.0);
        }

        let footer = format!(
            "{} - generated {}",
            doc.couple(),
            Utc::now().format("%d %b %Y %H:%M UTC")
        );
        canvas.stamp_footers(&footer);
        canvas.finish()
    }

    /// Title block: document title, couple, date and venue, styled with
    /// the branding color, plus the optional logo. A logo that fails to
    /// decode is logged and skipped; the export itself never fails on it.
    fn draw_header(&self, canvas: &mut PdfCanvas, doc: &WeddingDocument, branding: &Branding) {
        if let Some(bytes) = branding.logo.as_deref() {
            match load_from_memory(bytes) {
                Ok(decoded) => {
                    let logo = Image::from_dynamic_image(&decoded);
                    let y = canvas.setup().height - canvas.setup().margin_top - 14.0;
                    logo.add_to_layer(
                        canvas.layer(),
                        ImageTransform {
                            translate_x: Some(Mm(canvas.setup().width
                                - canvas.setup().margin_right
                                - 24.0)),
                            translate_y: Some(Mm(y)),
                            dpi: Some(300.0),
                            ..ImageTransform::default()
                        },
                    );
                }
                Err(err) => {
                    tracing::warn!(error = %err, "logo failed to decode; exporting without it");
                }
            }
        }

        canvas.set_color(branding.primary_color);
        canvas.line("Wedding Plan", 19.0, true);
        canvas.reset_color();
        canvas.spacer(1.0);
        canvas.line(&doc.couple(), 13.0, false);
        canvas.line(
            &format!(
                "{} - {}",
                util::date(doc.overview.wedding_date),
                doc.overview.venue
            ),
            BODY_SIZE,
            false,
        );
        canvas.line(
            &format!("Generated {}", Utc::now().format("%d %b %Y %H:%M UTC")),
            8.0,
            false,
        );
        canvas.spacer(5.0);
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}
