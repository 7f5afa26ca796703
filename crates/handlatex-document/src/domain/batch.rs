//! Batch driver file handed to the typesetter.

use std::path::Path;

/// Renders the batch file that stamps the driver revision and inputs the
/// transformed document.
#[must_use]
pub fn batch_file(revision: &str, document: &Path) -> String {
    format!(
        "\\def\\handLaTeXRevision{{{revision}}}\n\\input {}\n\\endbatchfile\n",
        document.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_file_layout() {
        let content = batch_file("1.0.0", Path::new("letter.htex"));

        assert_eq!(
            content,
            "\\def\\handLaTeXRevision{1.0.0}\n\\input letter.htex\n\\endbatchfile\n"
        );
    }
}
