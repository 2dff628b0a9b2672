pub mod document;
pub mod writer;

#[cfg(test)]
pub mod fixtures;

pub use document::{save_document, PdfDocument};
pub use writer::PdfWriter;
