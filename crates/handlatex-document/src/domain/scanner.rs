//! Marker scanning.
//!
//! Two constructs are recognized in the document text:
//!
//! - the package declaration `\usepackage[<options>]{hand}`, where
//!   `<options>` contains no `]`;
//! - hand paragraphs `\begin{handpar}<body>\end{handpar}`, where `<body>`
//!   contains no `}`. Nested paragraphs are not supported.
//!
//! This is plain substring scanning, not LaTeX parsing: comments and
//! verbatim regions are not treated specially.

use std::ops::Range;

const DECLARATION_OPEN: &str = "\\usepackage[";
const DECLARATION_CLOSE: &str = "]{hand}";
const PARAGRAPH_OPEN: &str = "\\begin{handpar}";
const PARAGRAPH_CLOSE: &str = "\\end{handpar}";

/// Returns the raw option list of the first hand package declaration.
#[must_use]
pub fn find_declaration(text: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(DECLARATION_OPEN) {
        let start = from + offset + DECLARATION_OPEN.len();
        let end = start + text[start..].find(']')?;
        if text[end..].starts_with(DECLARATION_CLOSE) {
            return Some(&text[start..end]);
        }
        from = start;
    }
    None
}

/// Byte ranges of one hand paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphRegion {
    /// The whole region, markers included.
    pub span: Range<usize>,
    /// The body between the markers.
    pub body: Range<usize>,
}

/// Iterator over hand paragraphs, left to right and non-overlapping.
#[derive(Debug, Clone)]
pub struct ParagraphRegions<'t> {
    text: &'t str,
    cursor: usize,
}

/// Scans `text` for hand paragraphs.
#[must_use]
pub fn paragraph_regions(text: &str) -> ParagraphRegions<'_> {
    ParagraphRegions { text, cursor: 0 }
}

impl Iterator for ParagraphRegions<'_> {
    type Item = ParagraphRegion;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.cursor + self.text[self.cursor..].find(PARAGRAPH_OPEN)?;
            let body_start = start + PARAGRAPH_OPEN.len();

            // The body cannot contain `}`, so the closing marker must end at
            // the first `}` after the opening marker.
            let Some(brace) = self.text[body_start..].find('}') else {
                self.cursor = self.text.len();
                return None;
            };
            let end = body_start + brace + 1;

            if self.text[body_start..end].ends_with(PARAGRAPH_CLOSE) {
                self.cursor = end;
                return Some(ParagraphRegion {
                    span: start..end,
                    body: body_start..end - PARAGRAPH_CLOSE.len(),
                });
            }
            self.cursor = body_start;
        }
    }
}

/// Rebuilds `text` with every hand paragraph replaced by `replace(body)`.
///
/// Text outside paragraphs is copied through unchanged; `replace` is called
/// once per paragraph in document order.
pub fn substitute_paragraphs<F>(text: &str, mut replace: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for region in paragraph_regions(text) {
        out.push_str(&text[copied..region.span.start]);
        out.push_str(&replace(&text[region.body]));
        copied = region.span.end;
    }

    out.push_str(&text[copied..]);
    out
}
