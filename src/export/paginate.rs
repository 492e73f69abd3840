//! Page layout for exported documents
//!
//! Flattened preview lines are word-wrapped to the printable width and split
//! into pages. Widths are estimated from display columns with a fixed average
//! glyph width, which is close enough for Helvetica at body sizes.

use serde::Deserialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::preview::{LineKind, Preview};

/// Average glyph advance as a fraction of the font size
const AVG_CHAR_EM: f32 = 0.5;
/// Baseline-to-baseline distance as a multiple of the font size
const LINE_SPACING: f32 = 1.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    Letter,
    A4,
}

impl Paper {
    /// Width and height in PDF points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            Paper::Letter => (612.0, 792.0),
            Paper::A4 => (595.0, 842.0),
        }
    }
}

/// Paper, base font size and margins for an export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub paper: Paper,
    pub font_size: f32,
    pub margin: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper: Paper::Letter,
            font_size: 11.0,
            margin: 54.0,
        }
    }
}

impl PageSetup {
    pub fn width(&self) -> f32 {
        self.paper.dimensions().0
    }

    pub fn height(&self) -> f32 {
        self.paper.dimensions().1
    }

    pub fn text_width(&self) -> f32 {
        (self.width() - 2.0 * self.margin).max(self.font_size)
    }

    /// Vertical space for body lines; the bottom margin also holds the page number
    pub fn text_height(&self) -> f32 {
        (self.height() - 2.0 * self.margin).max(self.font_size * LINE_SPACING)
    }

    /// Columns that fit on one line at `size`
    pub fn columns_at(&self, size: f32) -> usize {
        ((self.text_width() / (size * AVG_CHAR_EM)).floor() as usize).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One output line positioned on a page
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    pub face: FontFace,
    pub size: f32,
    pub align: Align,
    pub text: String,
    /// Distance from the top of the text area to this line's baseline
    pub baseline: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub lines: Vec<LaidOutLine>,
}

fn style_for(kind: LineKind) -> (FontFace, f32, Align) {
    match kind {
        LineKind::Name => (FontFace::Bold, 2.0, Align::Center),
        LineKind::Contact => (FontFace::Regular, 1.0, Align::Center),
        LineKind::Heading => (FontFace::Bold, 1.4, Align::Left),
        LineKind::EntryTitle => (FontFace::Bold, 1.15, Align::Left),
        LineKind::EntrySubtitle => (FontFace::Regular, 1.05, Align::Left),
        LineKind::Meta => (FontFace::Regular, 0.9, Align::Left),
        LineKind::Body | LineKind::Blank => (FontFace::Regular, 1.0, Align::Left),
    }
}

/// Lay the preview out over as many pages as it needs (at least one)
pub fn paginate(preview: &Preview, setup: &PageSetup) -> Vec<Page> {
    let mut pages = vec![Page::default()];
    let mut cursor = 0.0f32;
    let available = setup.text_height();

    for line in preview.lines() {
        let (face, scale, align) = style_for(line.kind);
        let size = setup.font_size * scale;
        let leading = size * LINE_SPACING;
        let wrapped = if line.kind == LineKind::Blank {
            vec![String::new()]
        } else {
            wrap_text(&line.text, setup.columns_at(size))
        };

        for text in wrapped {
            let page_is_empty = pages.last().map(|p| p.lines.is_empty()).unwrap_or(true);
            if text.is_empty() && page_is_empty {
                // No leading blank lines on a fresh page
                continue;
            }
            if cursor + leading > available && !page_is_empty {
                pages.push(Page::default());
                cursor = 0.0;
                if text.is_empty() {
                    continue;
                }
            }
            cursor += leading;
            if let Some(page) = pages.last_mut() {
                page.lines.push(LaidOutLine {
                    face,
                    size,
                    align,
                    text,
                    baseline: cursor,
                });
            }
        }
    }

    pages
}

/// Greedy word wrap by display width; words wider than a line are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
