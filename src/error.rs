use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting or merging PDFs.
#[derive(Debug, Error)]
pub enum Error {
    /// An input path does not exist on disk.
    #[error("input not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// An input file exists but cannot be parsed as a PDF.
    #[error("not a valid PDF: {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// A requested page range falls outside the document.
    #[error("page range {start}-{end} is out of range (document has {total} pages)")]
    Range { start: u32, end: u32, total: u32 },

    /// An output directory or file could not be created.
    #[error("cannot write output {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn output(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Output {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_display() {
        let err = Error::Range {
            start: 3,
            end: 12,
            total: 10,
        };
        assert_eq!(
            err.to_string(),
            "page range 3-12 is out of range (document has 10 pages)"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound {
            path: PathBuf::from("missing.pdf"),
        };
        assert_eq!(err.to_string(), "input not found: missing.pdf");
    }
}
