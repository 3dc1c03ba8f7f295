//! PDF document renderer.
//!
//! Lays out a [`GeneratedDocument`](crate::document::GeneratedDocument) as a
//! fixed-format printable page: centered title, date stamp, a decorative
//! filled panel, the labeled body text, and (for graded tasks) the memo
//! block. Long text wraps to the page width and flows onto additional pages
//! when it overflows.
//!
//! Output is available both ways call sites need it: as an in-memory byte
//! buffer (for download responses / base64 embedding) and as a named file.

use crate::config::RenderConfig;
use crate::document::GeneratedDocument;
use crate::error::{Result, TaskdocError};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Points per millimetre, for font-size to length conversions.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Average glyph advance for builtin Helvetica, as a fraction of the font
/// size. Good enough for centering and wrap-width estimates; the layout is
/// structural, not pixel-exact.
const AVG_GLYPH_EM: f32 = 0.5;

/// Renders composed documents to PDF.
pub struct DocumentRenderer {
    config: RenderConfig,
}

impl DocumentRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Create a renderer with default A4 configuration.
    pub fn with_defaults() -> Self {
        Self::new(RenderConfig::default())
    }

    /// Render the document and return the PDF as a byte buffer.
    pub fn render(&self, document: &GeneratedDocument) -> Result<Vec<u8>> {
        let pdf = self.layout(document)?;
        pdf.save_to_bytes()
            .map_err(|e| TaskdocError::RenderFailure(e.to_string()))
    }

    /// Render the document and write it to `dir` under the document's own
    /// file name. Returns the full artifact path.
    pub fn render_to_file(&self, document: &GeneratedDocument, dir: &Path) -> Result<PathBuf> {
        let bytes = self.render(document)?;
        let path = dir.join(&document.file_name);
        fs::write(&path, bytes).map_err(|e| {
            TaskdocError::Io(format!("failed to write '{}': {}", path.display(), e))
        })?;
        Ok(path)
    }

    /// Number of pages the document will occupy under the current config.
    ///
    /// Shares the wrap and cursor arithmetic with [`render`](Self::render).
    pub fn page_count(&self, document: &GeneratedDocument) -> usize {
        let header_lines = 4; // title, gap, date, gap
        let body_lines = self.wrapped_lines(document).len() + header_lines;
        let per_page = (self.usable_height_mm() / self.config.line_height_mm).floor() as usize;
        body_lines.div_ceil(per_page.max(1))
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn layout(&self, document: &GeneratedDocument) -> Result<PdfDocumentReference> {
        let config = &self.config;
        let (pdf, page, layer) = PdfDocument::new(
            document.title_line.clone(),
            Mm(config.page_width_mm),
            Mm(config.page_height_mm),
            "content",
        );
        let font = pdf
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| TaskdocError::RenderFailure(e.to_string()))?;

        let mut cursor = Cursor {
            pdf: &pdf,
            layer: pdf.get_page(page).get_layer(layer),
            y_mm: config.page_height_mm - config.margin_mm,
            config,
        };

        // Title and date, centered above the panel.
        cursor.centered_line(&document.title_line, &font, config.title_font_size);
        cursor.blank_line();
        let date_line = document.date_stamp.format("%Y-%m-%d").to_string();
        cursor.centered_line(&date_line, &font, config.body_font_size);
        cursor.blank_line();

        // Cursor position captured before the body is laid out; the panel
        // height derives from it (see draw_panel).
        let panel_top = cursor.y_mm;
        self.draw_panel(&mut cursor, panel_top);

        for line in self.wrapped_lines(document) {
            match line {
                Some(text) => cursor.line(&text, &font, config.body_font_size),
                None => cursor.blank_line(),
            }
        }

        Ok(pdf)
    }

    /// Draw the decorative filled rectangle behind the body block.
    ///
    /// The height is measured against a cursor position captured before any
    /// body text has been laid out, so the computed extent comes out at or
    /// below zero and the configured floor height applies (known cosmetic
    /// edge case, preserved from the source layout order).
    fn draw_panel(&self, cursor: &mut Cursor<'_>, panel_top: f32) {
        let config = &self.config;
        let top = panel_top;
        let mut height = panel_top - cursor.y_mm;
        if height <= 0.0 {
            height = config.panel_min_height_mm;
        }

        let left = config.margin_mm;
        let right = config.page_width_mm - config.margin_mm;
        let bottom = top - height;
        let ring = vec![
            (Point::new(Mm(left), Mm(top)), false),
            (Point::new(Mm(right), Mm(top)), false),
            (Point::new(Mm(right), Mm(bottom)), false),
            (Point::new(Mm(left), Mm(bottom)), false),
        ];
        let [r, g, b] = config.panel_color;
        cursor.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        cursor.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        // Fill color also drives text rendering; reset before any text.
        cursor
            .layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    /// Body (and memo) text, word-wrapped to the usable page width.
    ///
    /// `None` entries are blank separator lines.
    fn wrapped_lines(&self, document: &GeneratedDocument) -> Vec<Option<String>> {
        fn push_block(lines: &mut Vec<Option<String>>, columns: usize, text: &str) {
            for raw in text.split('\n') {
                if raw.is_empty() {
                    lines.push(None);
                } else {
                    for wrapped in textwrap::wrap(raw, columns) {
                        lines.push(Some(wrapped.into_owned()));
                    }
                }
            }
        }

        let columns = self.wrap_columns();
        let mut lines = Vec::new();
        push_block(&mut lines, columns, &document.body_text);
        if let Some(memo) = &document.memo_text {
            lines.push(None);
            push_block(&mut lines, columns, memo);
        }
        lines
    }

    /// Wrap width in characters, from the usable width and the average
    /// Helvetica glyph advance at the body font size.
    fn wrap_columns(&self) -> usize {
        let glyph_mm = self.config.body_font_size * AVG_GLYPH_EM / PT_PER_MM;
        ((self.config.usable_width_mm() / glyph_mm).floor() as usize).max(1)
    }

    fn usable_height_mm(&self) -> f32 {
        self.config.page_height_mm - 2.0 * self.config.margin_mm
    }
}

/// Write cursor over the current page, breaking to a fresh page when the
/// bottom margin is reached.
struct Cursor<'a> {
    pdf: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
    config: &'a RenderConfig,
}

impl Cursor<'_> {
    fn line(&mut self, text: &str, font: &IndirectFontRef, font_size: f32) {
        self.layer
            .use_text(text, font_size, Mm(self.config.margin_mm), Mm(self.y_mm), font);
        self.advance();
    }

    fn centered_line(&mut self, text: &str, font: &IndirectFontRef, font_size: f32) {
        let text_width_mm = text.chars().count() as f32 * font_size * AVG_GLYPH_EM / PT_PER_MM;
        let x = ((self.config.page_width_mm - text_width_mm) / 2.0).max(self.config.margin_mm);
        self.layer
            .use_text(text, font_size, Mm(x), Mm(self.y_mm), font);
        self.advance();
    }

    fn blank_line(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.y_mm -= self.config.line_height_mm;
        if self.y_mm < self.config.margin_mm {
            let (page, layer) = self.pdf.add_page(
                Mm(self.config.page_width_mm),
                Mm(self.config.page_height_mm),
                "content",
            );
            self.layer = self.pdf.get_page(page).get_layer(layer);
            self.y_mm = self.config.page_height_mm - self.config.margin_mm;
        }
    }
}
