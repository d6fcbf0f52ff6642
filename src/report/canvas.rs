//! Document canvas over printpdf
//!
//! Couples the [`LayoutCursor`] to a printpdf document. Section renderers work
//! in millimeters from the top of the page; the canvas converts to PDF
//! coordinates (origin bottom-left) and opens a new printpdf page whenever the
//! cursor reports a page break.

use std::io::BufWriter;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::report::layout::{LayoutCursor, Placement};
use crate::report::style::rgb_to_printpdf;
use crate::report::text::{fit_to_width, sanitize, text_width_mm, wrap_text, FontStyle, MM_PER_PT};

// ============================================================================
// Drawing Helpers
// ============================================================================

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: Mm,
    y: Mm,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb_to_printpdf(color));
    layer.use_text(text, size, x, y, font);
}

fn add_line(
    layer: &PdfLayerReference,
    x1: Mm,
    y1: Mm,
    x2: Mm,
    y2: Mm,
    color: (u8, u8, u8),
    width: f32,
) {
    layer.set_outline_color(rgb_to_printpdf(color));
    layer.set_outline_thickness(width);

    let line = Line {
        points: vec![(Point::new(x1, y1), false), (Point::new(x2, y2), false)],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Filled rectangle; `y` is the bottom edge in PDF coordinates
fn add_rect(layer: &PdfLayerReference, x: Mm, y: Mm, width: Mm, height: Mm, color: (u8, u8, u8)) {
    layer.set_fill_color(rgb_to_printpdf(color));

    let polygon = Polygon {
        rings: vec![vec![
            (Point::new(x, y), false),
            (Point::new(x + width, y), false),
            (Point::new(x + width, y + height), false),
            (Point::new(x, y + height), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };
    layer.add_polygon(polygon);
}

/// Baseline offset that vertically centers a single line of text in a band
pub fn centered_baseline(top: f32, height: f32, size_pt: f32) -> f32 {
    // Helvetica cap height is roughly 0.72 em
    top + height / 2.0 + size_pt * MM_PER_PT * 0.36
}

// ============================================================================
// Table Columns
// ============================================================================

/// Horizontal alignment inside a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Fixed-width table column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f32,
    pub width: f32,
    pub align: Align,
}

/// Padding between a cell edge and its text
pub const CELL_PADDING_MM: f32 = 1.5;

// ============================================================================
// Canvas
// ============================================================================

/// Builtin fonts registered on the document
pub struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    pub fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

/// One report being rendered: document, fonts, pages and the layout cursor
pub struct Canvas {
    config: ReportConfig,
    doc: PdfDocumentReference,
    fonts: Fonts,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    layer: PdfLayerReference,
    cursor: LayoutCursor,
}

impl Canvas {
    /// Create the document with its first page
    pub fn new(title: &str, config: &ReportConfig) -> ReportResult<Self> {
        let (doc, page1, layer1) = PdfDocument::new(
            title,
            Mm(config.page_width_mm),
            Mm(config.page_height_mm),
            "Layer 1",
        );

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ReportError::Pdf(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ReportError::Pdf(e.to_string()))?,
            italic: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(|e| ReportError::Pdf(e.to_string()))?,
        };

        let layer = doc.get_page(page1).get_layer(layer1);

        Ok(Self {
            config: config.clone(),
            doc,
            fonts,
            pages: vec![(page1, layer1)],
            layer,
            cursor: LayoutCursor::from_config(config),
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    /// Left edge of the content area
    pub fn left(&self) -> f32 {
        self.config.margin_mm
    }

    /// Right edge of the content area
    pub fn right(&self) -> f32 {
        self.config.page_width_mm - self.config.margin_mm
    }

    pub fn content_width(&self) -> f32 {
        self.config.content_width_mm()
    }

    /// Number of pages opened so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Open printpdf pages until they match the cursor
    fn sync_pages(&mut self) {
        while self.pages.len() < self.cursor.page_count() {
            let number = self.pages.len() + 1;
            let (page, layer) = self.doc.add_page(
                Mm(self.config.page_width_mm),
                Mm(self.config.page_height_mm),
                format!("Page {}", number),
            );
            self.pages.push((page, layer));
            self.layer = self.doc.get_page(page).get_layer(layer);
            tracing::debug!("Page break: opened page {}", number);
        }
    }

    // ========================================================================
    // Layout
    // ========================================================================

    pub fn fits(&self, height: f32) -> bool {
        self.cursor.fits(height)
    }

    /// Reserve a block, breaking the page first if it does not fit
    pub fn place_block(&mut self, height: f32) -> Placement {
        let placement = self.cursor.place_block(height);
        self.sync_pages();
        placement
    }

    /// Keep-with-next: break now unless `height` still fits on this page
    pub fn ensure_space(&mut self, height: f32) -> bool {
        let broke = self.cursor.ensure_space(height);
        self.sync_pages();
        broke
    }

    pub fn advance(&mut self, gap: f32) {
        self.cursor.advance(gap);
    }

    // ========================================================================
    // Drawing (offsets are mm from the page top)
    // ========================================================================

    fn pdf_y(&self, offset: f32) -> Mm {
        Mm(self.config.page_height_mm - offset)
    }

    /// Draw one line of text with its baseline at `baseline`
    pub fn text(&self, x: f32, baseline: f32, text: &str, style: FontStyle, size: f32, color: (u8, u8, u8)) {
        let clean = sanitize(text);
        if clean.is_empty() {
            return;
        }
        add_text(&self.layer, self.fonts.get(style), &clean, Mm(x), self.pdf_y(baseline), size, color);
    }

    /// Draw text ending at `right_x`
    pub fn text_right(
        &self,
        right_x: f32,
        baseline: f32,
        text: &str,
        style: FontStyle,
        size: f32,
        color: (u8, u8, u8),
    ) {
        let clean = sanitize(text);
        let x = right_x - text_width_mm(&clean, style, size);
        self.text(x, baseline, &clean, style, size, color);
    }

    /// Draw text centered on `center_x`
    pub fn text_centered(
        &self,
        center_x: f32,
        baseline: f32,
        text: &str,
        style: FontStyle,
        size: f32,
        color: (u8, u8, u8),
    ) {
        let clean = sanitize(text);
        let x = center_x - text_width_mm(&clean, style, size) / 2.0;
        self.text(x, baseline, &clean, style, size, color);
    }

    pub fn fill_rect(&self, x: f32, top: f32, width: f32, height: f32, color: (u8, u8, u8)) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        add_rect(&self.layer, Mm(x), self.pdf_y(top + height), Mm(width), Mm(height), color);
    }

    pub fn hline(&self, x1: f32, x2: f32, offset: f32, color: (u8, u8, u8), thickness: f32) {
        let y = self.pdf_y(offset);
        add_line(&self.layer, Mm(x1), y, Mm(x2), y, color, thickness);
    }

    // ========================================================================
    // Composite Primitives
    // ========================================================================

    /// Wrap `text` to `max_width` and draw it as one block.
    ///
    /// The whole paragraph is reserved with a single `place_block`, so it
    /// moves to the next page intact when it does not fit. Measurement and
    /// drawing share the same `wrap_text` output. Returns the number of lines.
    pub fn place_wrapped_text(
        &mut self,
        x: f32,
        max_width: f32,
        text: &str,
        style: FontStyle,
        size: f32,
        color: (u8, u8, u8),
    ) -> usize {
        let lines = wrap_text(text, style, size, max_width);
        if lines.is_empty() {
            return 0;
        }
        let line_height = self.config.line_height_mm;
        let placement = self.place_block(lines.len() as f32 * line_height);
        for (i, line) in lines.iter().enumerate() {
            let top = placement.top + i as f32 * line_height;
            let baseline = centered_baseline(top, line_height, size);
            self.text(x, baseline, line, style, size, color);
        }
        lines.len()
    }

    /// Draw a single-line table row into an already placed band
    #[allow(clippy::too_many_arguments)]
    pub fn draw_table_row(
        &self,
        placement: &Placement,
        columns: &[Column],
        cells: &[String],
        style: FontStyle,
        size: f32,
        color: (u8, u8, u8),
        background: Option<(u8, u8, u8)>,
    ) {
        let height = placement.height();
        if let (Some(bg), Some(first), Some(last)) = (background, columns.first(), columns.last()) {
            self.fill_rect(first.x, placement.top, last.x + last.width - first.x, height, bg);
        }

        let baseline = centered_baseline(placement.top, height, size);
        for (column, cell) in columns.iter().zip(cells) {
            let inner = (column.width - 2.0 * CELL_PADDING_MM).max(0.0);
            let fitted = fit_to_width(cell, style, size, inner);
            match column.align {
                Align::Left => {
                    self.text(column.x + CELL_PADDING_MM, baseline, &fitted, style, size, color)
                }
                Align::Center => self.text_centered(
                    column.x + column.width / 2.0,
                    baseline,
                    &fitted,
                    style,
                    size,
                    color,
                ),
            }
        }
    }

    /// Place a fixed-height table row and draw it
    #[allow(clippy::too_many_arguments)]
    pub fn place_table_row(
        &mut self,
        columns: &[Column],
        cells: &[String],
        height: f32,
        style: FontStyle,
        size: f32,
        color: (u8, u8, u8),
        background: Option<(u8, u8, u8)>,
    ) -> Placement {
        let placement = self.place_block(height);
        self.draw_table_row(&placement, columns, cells, style, size, color, background);
        placement
    }

    // ========================================================================
    // Second Pass and Output
    // ========================================================================

    /// Layer handles of every page, in page order
    pub fn page_layers(&self) -> Vec<PdfLayerReference> {
        self.pages
            .iter()
            .map(|(page, layer)| self.doc.get_page(*page).get_layer(*layer))
            .collect()
    }

    /// Draw text on an arbitrary page at a page-top offset
    #[allow(clippy::too_many_arguments)]
    pub fn text_on(
        &self,
        layer: &PdfLayerReference,
        x: f32,
        baseline: f32,
        text: &str,
        style: FontStyle,
        size: f32,
        color: (u8, u8, u8),
    ) {
        let clean = sanitize(text);
        add_text(layer, self.fonts.get(style), &clean, Mm(x), self.pdf_y(baseline), size, color);
    }

    /// Draw a rule on an arbitrary page at a page-top offset
    pub fn hline_on(&self, layer: &PdfLayerReference, x1: f32, x2: f32, offset: f32, color: (u8, u8, u8)) {
        let y = self.pdf_y(offset);
        add_line(layer, Mm(x1), y, Mm(x2), y, color, 0.5);
    }

    /// Serialize the finished document
    pub fn finish(self) -> ReportResult<Vec<u8>> {
        let mut writer = BufWriter::new(Vec::new());
        self.doc
            .save(&mut writer)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}
