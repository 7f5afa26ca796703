//! LaTeX markup emitted by the randomizer.
//!
//! The `handparfull` environment and `\handword` macro are defined by the
//! hand package; the driver only fills in their parameters.

/// Wraps a paragraph body: `\begin{handparfull}{angle}{scale}` where the
/// scale is printed with two decimals.
#[must_use]
pub fn paragraph(angle: i32, scale: f64, body: &str) -> String {
    format!("\\begin{{handparfull}}{{{angle}}}{{{scale:.2}}}\n{body}\n\\end{{handparfull}}")
}

/// Wraps a single rotated word.
#[must_use]
pub fn rotated_word(angle: i32, word: &str) -> String {
    format!("\\handword{{{angle}}}{{{word}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_markup() {
        assert_eq!(
            paragraph(-1, 1.0, "some text"),
            "\\begin{handparfull}{-1}{1.00}\nsome text\n\\end{handparfull}"
        );
    }

    #[test]
    fn test_scale_is_rounded_to_two_decimals() {
        assert!(paragraph(0, 0.876, "x").starts_with("\\begin{handparfull}{0}{0.88}\n"));
    }

    #[test]
    fn test_rotated_word_markup() {
        assert_eq!(rotated_word(2, "hello"), "\\handword{2}{hello}");
        assert_eq!(rotated_word(-2, "x,"), "\\handword{-2}{x,}");
    }
}
