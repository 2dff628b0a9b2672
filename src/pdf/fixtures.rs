//! Minimal generated PDFs for tests. Each page carries a text line naming the
//! document and its page number so pages stay distinguishable after copying.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

pub fn sample_document(doc_name: &str, num_pages: u32) -> Document {
    let mut doc = Document::with_version("1.7");

    let pages_root_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let pages_ids: Vec<ObjectId> = (1..=num_pages)
        .map(|page_number| append_page(page_number, num_pages, doc_name, pages_root_id, &mut doc))
        .collect();

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => pages_ids.iter().map(|&page_id| page_id.into()).collect::<Vec<_>>(),
        "Count" => num_pages,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };

    // The root id was reserved with new_object_id, so insert directly.
    doc.objects
        .insert(pages_root_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_root_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

pub fn write_sample_pdf(path: &Path, doc_name: &str, num_pages: u32) {
    let mut doc = sample_document(doc_name, num_pages);
    doc.save(path).unwrap();
}

fn append_page(
    page_number: u32,
    total_pages: u32,
    doc_name: &str,
    pages_root_id: ObjectId,
    doc: &mut Document,
) -> ObjectId {
    let page_title = format!("{doc_name}: page {page_number} of {total_pages}");

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Td", vec![50.into(), 600.into()]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Tj", vec![Object::string_literal(page_title)]),
            Operation::new("ET", vec![]),
        ],
    };

    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_root_id,
        "Contents" => content_id,
    })
}
