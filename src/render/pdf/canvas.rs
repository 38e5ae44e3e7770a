use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Rgb,
};

use crate::core::{ExportError, ExportResult, PageSetup};
use crate::model::RgbColor;
use crate::render::ir::TableBlock;

/// Approximate average glyph width for Helvetica, as a fraction of the
/// font size. Used for cell truncation and right-alignment estimates;
/// fixed-width layout tolerates the error.
const AVG_GLYPH_EM: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

/// Vertical band at the page bottom kept clear for the running footer.
const FOOTER_RESERVE: f32 = 10.0;

pub const BODY_SIZE: f32 = 9.5;
pub const TABLE_SIZE: f32 = 8.5;
const ROW_HEIGHT: f32 = 5.2;

/// Owns the drawing-command document and the single vertical cursor.
///
/// The cursor is millimeters from the bottom edge and always points at the
/// next free baseline; every drawing method advances it, and page breaks
/// happen here and nowhere else. Nothing outside this struct ever holds or
/// copies the cursor, so no position state is shared across sections.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    current: usize,
    cursor: f32,
    setup: PageSetup,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfCanvas {
    pub fn new(title: &str, setup: PageSetup) -> ExportResult<Self> {
        let (doc, page, layer) =
            printpdf::PdfDocument::new(title, Mm(setup.width), Mm(setup.height), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::render(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::render(e.to_string()))?;

        let cursor = setup.height - setup.margin_top;
        Ok(PdfCanvas {
            doc,
            pages: vec![(page, layer)],
            current: 0,
            cursor,
            setup,
            regular,
            bold,
        })
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub(crate) fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.current];
        self.doc.get_page(page).get_layer(layer)
    }

    fn new_page(&mut self) {
        let (page, layer) =
            self.doc
                .add_page(Mm(self.setup.width), Mm(self.setup.height), "content");
        self.pages.push((page, layer));
        self.current = self.pages.len() - 1;
        self.cursor = self.setup.height - self.setup.margin_top;
    }

    /// Breaks the page when fewer than `needed` millimeters remain above
    /// the footer band. Returns true when a break happened, so table
    /// drawing can repeat its header row.
    pub fn ensure_space(&mut self, needed: f32) -> bool {
        if self.cursor - needed < self.setup.margin_bottom + FOOTER_RESERVE {
            self.new_page();
            return true;
        }
        false
    }

    /// The near-bottom threshold check applied before each section, so a
    /// heading is never stranded at the foot of a page.
    pub fn ensure_section_start(&mut self) {
        self.ensure_space(self.setup.break_threshold);
    }

    pub fn spacer(&mut self, height: f32) {
        if !self.ensure_space(height) {
            self.cursor -= height;
        }
    }

    pub fn set_color(&mut self, color: RgbColor) {
        let (r, g, b) = color.as_fractions();
        self.layer().set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
    }

    pub fn reset_color(&mut self) {
        self.layer().set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    fn font(&self, bold: bool) -> &IndirectFontRef {
        if bold { &self.bold } else { &self.regular }
    }

    /// One line of text at the left margin; advances the cursor.
    pub fn line(&mut self, text: &str, size_pt: f32, bold: bool) {
        let line_height = size_pt * PT_TO_MM * 1.45;
        self.ensure_space(line_height);
        self.cursor -= line_height;
        self.layer().use_text(
            text,
            size_pt,
            Mm(self.setup.margin_left),
            Mm(self.cursor),
            self.font(bold),
        );
    }

    /// Body text wrapped to the content width; advances the cursor.
    pub fn wrapped(&mut self, text: &str, size_pt: f32) {
        let budget = char_budget(self.setup.content_width(), size_pt);
        for line in wrap_words(text, budget) {
            self.line(&line, size_pt, false);
        }
    }

    /// Text at an absolute x offset from the left margin without moving
    /// the cursor; table cells use this after the row height is reserved.
    fn cell_text(&mut self, text: &str, x_offset: f32, size_pt: f32, bold: bool) {
        self.layer().use_text(
            text,
            size_pt,
            Mm(self.setup.margin_left + x_offset),
            Mm(self.cursor),
            self.font(bold),
        );
    }

    /// Label/value pairs with an emphasized label column.
    pub fn key_values(&mut self, pairs: &[(String, String)]) {
        let label_col = 42.0;
        for (label, value) in pairs {
            let line_height = BODY_SIZE * PT_TO_MM * 1.5;
            self.ensure_space(line_height);
            self.cursor -= line_height;
            self.cell_text(label, 0.0, BODY_SIZE, true);
            let budget = char_budget(self.setup.content_width() - label_col, BODY_SIZE);
            self.cell_text(&truncate(value, budget), label_col, BODY_SIZE, false);
        }
    }

    /// Fixed-width auto-flowing table: paginates internally, repeats the
    /// header row after each internal break, and leaves the cursor below
    /// the last drawn row.
    pub fn table(&mut self, table: &TableBlock, header_color: RgbColor) {
        let offsets = column_offsets(table, self.setup.content_width());

        self.ensure_space(ROW_HEIGHT * 2.0);
        self.draw_header_row(table, &offsets, header_color);

        for row in &table.rows {
            if self.ensure_space(ROW_HEIGHT) {
                self.draw_header_row(table, &offsets, header_color);
            }
            self.cursor -= ROW_HEIGHT;
            for (cell, (x, width)) in row.iter().zip(&offsets) {
                let budget = char_budget(*width, TABLE_SIZE);
                self.cell_text(&truncate(cell, budget), *x, TABLE_SIZE, false);
            }
        }
        self.spacer(2.0);
    }

    fn draw_header_row(
        &mut self,
        table: &TableBlock,
        offsets: &[(f32, f32)],
        header_color: RgbColor,
    ) {
        self.cursor -= ROW_HEIGHT;
        self.set_color(header_color);
        for (column, (x, width)) in table.columns.iter().zip(offsets) {
            let budget = char_budget(*width, TABLE_SIZE);
            self.cell_text(&truncate(&column.label, budget), *x, TABLE_SIZE, true);
        }
        self.reset_color();
    }

    /// Second pass over every produced page: the running footer plus
    /// "Page N of M", which is only knowable after all sections rendered.
    pub fn stamp_footers(&mut self, footer_left: &str) {
        let total = self.pages.len();
        let y = Mm(self.setup.margin_bottom - 6.0);
        for (number, (page, layer)) in self.pages.iter().enumerate() {
            let layer = self.doc.get_page(*page).get_layer(*layer);
            layer.set_fill_color(Color::Rgb(Rgb::new(0.45, 0.45, 0.45, None)));
            layer.use_text(footer_left, 7.5, Mm(self.setup.margin_left), y, &self.regular);

            let marker = format!("Page {} of {}", number + 1, total);
            let marker_width = marker.len() as f32 * 7.5 * AVG_GLYPH_EM * PT_TO_MM;
            let x = self.setup.width - self.setup.margin_right - marker_width;
            layer.use_text(&marker, 7.5, Mm(x), y, &self.regular);
        }
    }

    pub fn finish(self) -> ExportResult<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ExportError::render(e.to_string()))
    }
}

fn char_budget(width_mm: f32, size_pt: f32) -> usize {
    let glyph_mm = size_pt * AVG_GLYPH_EM * PT_TO_MM;
    ((width_mm / glyph_mm).floor() as usize).max(4)
}

fn column_offsets(table: &TableBlock, content_width: f32) -> Vec<(f32, f32)> {
    let weight_sum = table.weight_sum().max(f32::EPSILON);
    let gap = 2.0;
    let mut offsets = Vec::with_capacity(table.columns.len());
    let mut x = 0.0;
    for column in &table.columns {
        let width = content_width * column.weight / weight_sum;
        offsets.push((x, (width - gap).max(4.0)));
        x += width;
    }
    offsets
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + word.chars().count() + 1 > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
