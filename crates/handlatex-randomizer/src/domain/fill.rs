//! Greedy paragraph fill.

/// Conventional fill width for the generated paragraph bodies.
pub const FILL_WIDTH: usize = 70;

/// Joins `words` with single spaces, breaking lines so that none exceeds
/// `width` characters.
///
/// Words are never split: a word longer than `width` sits alone on its line.
#[must_use]
pub fn fill<S: AsRef<str>>(words: &[S], width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;

    for word in words {
        let word = word.as_ref();
        let word_len = word.chars().count();

        if line_len == 0 {
            if !out.is_empty() {
                out.push('\n');
            }
        } else if line_len + 1 + word_len > width {
            out.push('\n');
            line_len = 0;
        } else {
            out.push(' ');
            line_len += 1;
        }

        out.push_str(word);
        line_len += word_len;
    }

    out
}
