//! Minimal paged-table PDF writer for the payroll report.
//!
//! Only the two standard Helvetica faces are used, so no font file is
//! embedded and text widths are estimated.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.55;
const CELL_PADDING: f32 = 4.0;

/// A4 landscape: seven columns need the width.
const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 40.0;
const ROW_H: f32 = 20.0;

const BODY_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;

#[derive(Clone, Copy)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> Name<'static> {
        match self {
            Font::Regular => Name(b"F1"),
            Font::Bold => Name(b"F2"),
        }
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH
}

/// Column geometry shared by every page of one table.
struct Columns {
    widths: Vec<f32>,
    right_aligned: Vec<bool>,
}

impl Columns {
    /// Widest cell per column plus padding, scaled down to the printable
    /// width when the table would not fit.
    fn fit(headers: &[&str], rows: &[Vec<String>], right_aligned: &[bool]) -> Self {
        let cell = |s: &str| text_width(s, BODY_SIZE) + 2.0 * CELL_PADDING + 2.0;

        let mut widths: Vec<f32> = headers.iter().map(|h| cell(*h)).collect();
        for row in rows {
            for (w, s) in widths.iter_mut().zip(row) {
                *w = w.max(cell(s.as_str()));
            }
        }

        let total: f32 = widths.iter().sum();
        let printable = PAGE_W - 2.0 * MARGIN;
        if total > printable {
            let scale = printable / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        let right_aligned = (0..widths.len())
            .map(|i| right_aligned.get(i).copied().unwrap_or(false))
            .collect();

        Self {
            widths,
            right_aligned,
        }
    }

    /// Rows that fit below the header row of a page.
    fn rows_per_page() -> usize {
        let top = PAGE_H - MARGIN - 50.0 - ROW_H;
        ((top - MARGIN) / ROW_H).floor().max(1.0) as usize + 1
    }
}

/// Builds the document page by page; object ids are handed out in order.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    regular_id: Ref,
    bold_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);
        pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id: Ref::new(1),
            pages_id: Ref::new(2),
            regular_id,
            bold_id,
            page_refs: Vec::new(),
            next_id: 5,
        }
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Paged table under a centered title and subtitle. The header row is
    /// repeated on every page; an empty table still gets one page.
    pub fn write_report(
        &mut self,
        title: &str,
        subtitle: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        right_aligned: &[bool],
    ) {
        let columns = Columns::fit(headers, rows, right_aligned);
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let per_page = Columns::rows_per_page();

        let mut chunks: Vec<&[Vec<String>]> = rows.chunks(per_page).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        for (n, chunk) in chunks.into_iter().enumerate() {
            let mut content = Content::new();

            centered(&mut content, Font::Bold, PAGE_H - MARGIN, TITLE_SIZE, title);
            centered(&mut content, Font::Regular, PAGE_H - MARGIN - 18.0, BODY_SIZE, subtitle);
            text(
                &mut content,
                Font::Regular,
                PAGE_W - MARGIN - 50.0,
                MARGIN - 25.0,
                BODY_SIZE,
                &format!("Page {}", n + 1),
            );

            let mut y = PAGE_H - MARGIN - 50.0;
            table_row(&mut content, &columns, y, &header_row, Font::Bold, false);

            for row in chunk {
                y -= ROW_H;
                table_row(&mut content, &columns, y, row, Font::Regular, true);
            }

            self.add_page(content);
        }
    }

    fn add_page(&mut self, content: Content) {
        let page_id = self.alloc();
        let content_id = self.alloc();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Font::Regular.resource(), self.regular_id);
            fonts.pair(Font::Bold.resource(), self.bold_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        fs::write(path, self.pdf.finish())
    }
}

fn text(content: &mut Content, font: Font, x: f32, y: f32, size: f32, s: &str) {
    content.begin_text();
    content.set_font(font.resource(), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(s.as_bytes()));
    content.end_text();
}

fn centered(content: &mut Content, font: Font, y: f32, size: f32, s: &str) {
    let x = ((PAGE_W - text_width(s, size)) / 2.0).max(MARGIN);
    text(content, font, x, y, size, s);
}

/// One bordered row. `aligned` applies the per-column alignment; headers
/// are always left-aligned.
fn table_row(
    content: &mut Content,
    columns: &Columns,
    y: f32,
    cells: &[String],
    font: Font,
    aligned: bool,
) {
    let mut x = MARGIN;

    for ((w, right), cell) in columns
        .widths
        .iter()
        .zip(&columns.right_aligned)
        .zip(cells)
    {
        let tx = if aligned && *right {
            x + w - CELL_PADDING - text_width(cell, BODY_SIZE)
        } else {
            x + CELL_PADDING
        };
        text(content, font, tx, y + 6.0, BODY_SIZE, cell);

        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.rect(x, y, *w, ROW_H);
        content.stroke();
        content.restore_state();

        x += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_tables_are_scaled_to_the_page() {
        let rows = vec![vec!["x".repeat(200), "1".to_string()]];
        let cols = Columns::fit(&["Name", "Days"], &rows, &[false, true]);

        let total: f32 = cols.widths.iter().sum();
        assert!(total <= PAGE_W - 2.0 * MARGIN + 0.01);
        assert_eq!(cols.right_aligned, vec![false, true]);
    }

    #[test]
    fn page_holds_at_least_one_row() {
        assert!(Columns::rows_per_page() >= 1);
    }
}
