use crate::error::Error;
use lopdf::Document;
use std::io;
use std::path::Path;

/// A PDF opened for reading. Pages are copied out of it; the source file is
/// never modified.
#[derive(Debug)]
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        // Load first and classify the failure, so a file vanishing between
        // an existence check and the read cannot be misreported.
        let doc = Document::load(path).map_err(|source| match source {
            lopdf::Error::IO(ref err) if err.kind() == io::ErrorKind::NotFound => {
                Error::NotFound {
                    path: path.to_path_buf(),
                }
            }
            source => Error::Format {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy the given 1-indexed pages into a new document, preserving order.
    ///
    /// Callers validate page numbers up front via `PageRange`; anything
    /// outside the document here would produce an empty copy, so the caller
    /// contract matters.
    pub fn extract_pages(&self, pages: &[u32]) -> Document {
        let mut new_doc = self.doc.clone();

        let pages_to_delete: Vec<u32> = self
            .doc
            .get_pages()
            .keys()
            .filter(|num| !pages.contains(num))
            .copied()
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        new_doc
    }

    /// Hand over the underlying lopdf document, e.g. to append it to a writer.
    pub fn into_inner(self) -> Document {
        self.doc
    }
}

/// Write a document to disk, mapping failures to an output error.
pub fn save_document<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    doc.save(path)
        .map_err(|source| Error::output(path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures;

    #[test]
    fn test_open_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfDocument::open(dir.path().join("nope.pdf")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_open_garbage_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        let err = PdfDocument::open(&path).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn test_page_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fixtures::write_sample_pdf(&path, "doc", 10);

        let doc = PdfDocument::open(&path).unwrap();
        assert_eq!(doc.page_count(), 10);
    }

    #[test]
    fn test_extract_pages_keeps_order_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fixtures::write_sample_pdf(&path, "doc", 10);

        let doc = PdfDocument::open(&path).unwrap();
        let extracted = doc.extract_pages(&[3, 4, 5]);
        assert_eq!(extracted.get_pages().len(), 3);
    }

    #[test]
    fn test_extract_single_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fixtures::write_sample_pdf(&path, "doc", 4);

        let doc = PdfDocument::open(&path).unwrap();
        let extracted = doc.extract_pages(&[2]);
        assert_eq!(extracted.get_pages().len(), 1);
    }
}
