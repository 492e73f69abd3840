//! PDF serialization of laid-out text pages
//!
//! Object numbering, the cross-reference table and the trailer are handled
//! by `pdf-writer`; this module only places lines. Text uses the standard
//! Helvetica faces in WinAnsi encoding. Characters outside Latin-1 are
//! written as `?`.

use std::io::{self, Write};

use chrono::{DateTime, Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use super::paginate::{Align, FontFace, Page, PageSetup};

const AVG_CHAR_EM: f32 = 0.5;
const PAGE_NUMBER_SCALE: f32 = 0.8;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Encode text as WinAnsi bytes
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|ch| match ch as u32 {
            0x09 => Some(b' '),
            c if c < 0x20 => None,
            c if c <= 0x7E || (0xA0..=0xFF).contains(&c) => Some(c as u8),
            _ => Some(b'?'),
        })
        .collect()
}

fn font_resource(face: FontFace) -> Name<'static> {
    match face {
        FontFace::Regular => FONT_REGULAR,
        FontFace::Bold => FONT_BOLD,
    }
}

fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_CHAR_EM
}

fn show_text(content: &mut Content, font: Name, size: f32, x: f32, y: f32, text: &str) {
    let bytes = win_ansi(text);
    content
        .begin_text()
        .set_font(font, size)
        .next_line(x, y)
        .show(Str(&bytes))
        .end_text();
}

fn page_content(page: &Page, number: usize, total: usize, setup: &PageSetup) -> Vec<u8> {
    let mut content = Content::new();
    let top = setup.height() - setup.margin;

    for line in page.lines.iter().filter(|l| !l.text.is_empty()) {
        let x = match line.align {
            Align::Left => setup.margin,
            Align::Center => {
                let width = estimate_width(&line.text, line.size);
                (setup.margin + (setup.text_width() - width) / 2.0).max(setup.margin)
            }
        };
        show_text(
            &mut content,
            font_resource(line.face),
            line.size,
            x,
            top - line.baseline,
            &line.text,
        );
    }

    let label = format!("Page {} of {}", number, total);
    let size = setup.font_size * PAGE_NUMBER_SCALE;
    let x = setup.width() - setup.margin - estimate_width(&label, size);
    show_text(&mut content, FONT_REGULAR, size, x, setup.margin / 2.0, &label);

    content.finish()
}

fn creation_date(created: DateTime<Utc>) -> Date {
    Date::new(created.year().clamp(0, 9999) as u16)
        .month(created.month() as u8)
        .day(created.day() as u8)
        .hour(created.hour() as u8)
        .minute(created.minute() as u8)
        .second(created.second() as u8)
        .utc_offset_hour(0)
}

/// Serialize pages into a complete PDF document
pub fn render_pdf(pages: &[Page], setup: &PageSetup, created: DateTime<Utc>) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let pages_id = alloc.bump();
    let regular_id = alloc.bump();
    let bold_id = alloc.bump();
    let info_id = alloc.bump();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().map(|(page, _)| *page))
        .count(page_ids.len() as i32);

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.document_info(info_id)
        .producer(TextStr(concat!("ResumeForge ", env!("CARGO_PKG_VERSION"))))
        .title(TextStr("Resume"))
        .creation_date(creation_date(created));

    let total = pages.len();
    for (i, (page, (page_id, content_id))) in pages.iter().zip(&page_ids).enumerate() {
        let mut writer = pdf.page(*page_id);
        writer
            .parent(pages_id)
            .media_box(Rect::new(0.0, 0.0, setup.width(), setup.height()))
            .contents(*content_id);
        writer
            .resources()
            .fonts()
            .pair(FONT_REGULAR, regular_id)
            .pair(FONT_BOLD, bold_id);
        writer.finish();

        pdf.stream(*content_id, &page_content(page, i + 1, total, setup));
    }

    pdf.finish()
}

/// Serialize pages and write them out
pub fn write_pdf<W: Write>(
    writer: &mut W,
    pages: &[Page],
    setup: &PageSetup,
    created: DateTime<Utc>,
) -> io::Result<()> {
    writer.write_all(&render_pdf(pages, setup, created))?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ResumeDocument;
    use crate::export::paginate::paginate;
    use crate::preview::render_preview;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|w| *w == needle)
            .count()
    }

    #[test]
    fn test_win_ansi_keeps_latin1() {
        assert_eq!(win_ansi("caf\u{e9}"), b"caf\xE9".to_vec());
        assert_eq!(win_ansi("a\tb"), b"a b".to_vec());
        assert_eq!(win_ansi("\u{4e2d}\n"), b"?".to_vec());
    }

    #[test]
    fn test_document_structure() {
        let setup = PageSetup::default();
        let pages = paginate(&render_preview(&ResumeDocument::default()), &setup);
        let bytes = render_pdf(&pages, &setup, fixed_time());

        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"%%EOF"), 1);
        assert_eq!(count(&bytes, b"/Helvetica-Bold"), 1);
        assert_eq!(count(&bytes, b"(Your Name)"), 1);
        assert_eq!(count(&bytes, b"(Page 1 of 1)"), 1);
        assert_eq!(count(&bytes, b"D:20240301123000"), 1);
    }

    #[test]
    fn test_delimiters_in_text_are_escaped() {
        let mut doc = ResumeDocument::default();
        doc.name = "Ada (Countess)".to_string();
        let setup = PageSetup::default();
        let bytes = render_pdf(&paginate(&render_preview(&doc), &setup), &setup, fixed_time());
        assert_eq!(count(&bytes, b"(Ada \\(Countess\\))"), 1);
    }

    #[test]
    fn test_each_page_is_numbered() {
        let setup = PageSetup::default();
        let pages = vec![Page::default(), Page::default(), Page::default()];
        let bytes = render_pdf(&pages, &setup, fixed_time());
        assert_eq!(count(&bytes, b"(Page 1 of 3)"), 1);
        assert_eq!(count(&bytes, b"(Page 3 of 3)"), 1);
        assert_eq!(count(&bytes, b"/Count 3"), 1);
    }
}
