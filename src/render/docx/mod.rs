use std::io::Cursor;

use chrono::Utc;
use docx_rs::{AlignmentType, Docx, Paragraph, Pic, Run, Table, TableCell, TableRow};
use printpdf::image_crate::{load_from_memory, GenericImageView};

use crate::core::{ExportError, ExportResult};
use crate::model::{Branding, RgbColor, SectionId, WeddingDocument};
use crate::render::ir::{Block, TableBlock};
use crate::render::sections::{compose_selected, util};

/// Total table width in twentieths of a point, sized for A4 content.
const GRID_DXA: usize = 9800;

// Run sizes are half-points; these mirror the paginated target's scale.
const TITLE_SIZE: usize = 40;
const HEADING_SIZE: usize = 26;
const SUBHEADING_SIZE: usize = 21;
const BODY_SIZE: usize = 19;
const TABLE_SIZE: usize = 17;

/// Orchestrator for the flowed target: walks the same composed IR the
/// paginated renderer consumes, but emits a linear tree of paragraph and
/// table nodes. Pagination is the format consumer's business; there is no
/// cursor here at all.
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        DocxRenderer
    }

    pub fn render(
        &self,
        doc: &WeddingDocument,
        branding: &Branding,
        sections: &[SectionId],
    ) -> ExportResult<Vec<u8>> {
        let mut builder = self.header_block(Docx::new(), doc, branding);

        for ir in compose_selected(doc, sections) {
            builder = builder.add_paragraph(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text(ir.title.as_str())
                        .size(HEADING_SIZE)
                        .bold()
                        .color(branding.primary_color.as_hex()),
                ),
            );

            for block in &ir.blocks {
                builder = match block {
                    Block::Subheading(text) => builder.add_paragraph(
                        Paragraph::new()
                            .add_run(Run::new().add_text(text.as_str()).size(SUBHEADING_SIZE).bold()),
                    ),
                    Block::Paragraph(text) => builder.add_paragraph(
                        Paragraph::new().add_run(Run::new().add_text(text.as_str()).size(BODY_SIZE)),
                    ),
                    Block::KeyValues(pairs) => {
                        let mut b = builder;
                        for (label, value) in pairs {
                            b = b.add_paragraph(
                                Paragraph::new()
                                    .add_run(
                                        Run::new()
                                            .add_text(format!("{}:  ", label))
                                            .size(BODY_SIZE)
                                            .bold(),
                                    )
                                    .add_run(Run::new().add_text(value.as_str()).size(BODY_SIZE)),
                            );
                        }
                        b
                    }
                    Block::Table(table) => builder
                        .add_table(build_table(table, branding.primary_color))
                        .add_paragraph(Paragraph::new()),
                };
            }
        }

        let mut out = Cursor::new(Vec::new());
        builder
            .build()
            .pack(&mut out)
            .map_err(|e| ExportError::render(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Same header content as the paginated target: title, couple, date
    /// and venue, generation timestamp, optional logo. The logo is only
    /// embedded when it decodes; a bad image is logged and skipped.
    fn header_block(&self, mut builder: Docx, doc: &WeddingDocument, branding: &Branding) -> Docx {
        if let Some(bytes) = branding.logo.as_deref() {
            match load_from_memory(bytes) {
                Ok(decoded) => {
                    let (w, h) = scaled_emu(decoded.width(), decoded.height());
                    builder = builder.add_paragraph(
                        Paragraph::new()
                            .align(AlignmentType::Center)
                            .add_run(Run::new().add_image(Pic::new(bytes).size(w, h))),
                    );
                }
                Err(err) => {
                    tracing::warn!(error = %err, "logo failed to decode; exporting without it");
                }
            }
        }

        builder
            .add_paragraph(
                Paragraph::new().align(AlignmentType::Center).add_run(
                    Run::new()
                        .add_text("Wedding Plan")
                        .size(TITLE_SIZE)
                        .bold()
                        .color(branding.primary_color.as_hex()),
                ),
            )
            .add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Center)
                    .add_run(Run::new().add_text(doc.couple()).size(HEADING_SIZE)),
            )
            .add_paragraph(
                Paragraph::new().align(AlignmentType::Center).add_run(
                    Run::new()
                        .add_text(format!(
                            "{} - {}",
                            util::date(doc.overview.wedding_date),
                            doc.overview.venue
                        ))
                        .size(BODY_SIZE),
                ),
            )
            .add_paragraph(
                Paragraph::new().align(AlignmentType::Center).add_run(
                    Run::new()
                        .add_text(format!(
                            "Generated {}",
                            Utc::now().format("%d %b %Y %H:%M UTC")
                        ))
                        .size(16),
                ),
            )
            .add_paragraph(Paragraph::new())
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_table(table: &TableBlock, header_color: RgbColor) -> Table {
    let weight_sum = table.weight_sum().max(f32::EPSILON);
    let grid: Vec<usize> = table
        .columns
        .iter()
        .map(|c| ((c.weight / weight_sum) * GRID_DXA as f32) as usize)
        .collect();

    let header = TableRow::new(
        table
            .columns
            .iter()
            .map(|column| {
                TableCell::new().add_paragraph(
                    Paragraph::new().add_run(
                        Run::new()
                            .add_text(column.label.as_str())
                            .size(TABLE_SIZE)
                            .bold()
                            .color(header_color.as_hex()),
                    ),
                )
            })
            .collect(),
    );

    let mut rows = vec![header];
    for row in &table.rows {
        rows.push(TableRow::new(
            row.iter()
                .map(|cell| {
                    TableCell::new().add_paragraph(
                        Paragraph::new()
                            .add_run(Run::new().add_text(cell.as_str()).size(TABLE_SIZE)),
                    )
                })
                .collect(),
        ));
    }

    Table::new(rows).set_grid(grid)
}

/// Logo display size in EMU, scaled to a 9mm-tall header mark.
fn scaled_emu(width_px: u32, height_px: u32) -> (u32, u32) {
    const TARGET_HEIGHT_EMU: u32 = 324_000; // 9mm
    if height_px == 0 {
        return (TARGET_HEIGHT_EMU, TARGET_HEIGHT_EMU);
    }
    let width = (TARGET_HEIGHT_EMU as u64 * width_px as u64 / height_px as u64) as u32;
    (width, TARGET_HEIGHT_EMU)
}
