use crate::error::Error;
use anyhow::Result;
use lopdf::{dictionary, Document, Object, ObjectId};
use std::path::Path;

/// In-memory accumulator of pages destined for one output document.
///
/// Source documents are appended whole: their objects are renumbered past the
/// writer's current id space and their page tree is grafted under the
/// writer's Pages root. Nothing touches disk until `save`.
pub struct PdfWriter {
    doc: Document,
    pages_root: ObjectId,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.7");

        let pages_root = doc.add_object(dictionary! {
            "Type" => Object::Name(b"Pages".to_vec()),
            "Kids" => Object::Array(vec![]),
            "Count" => Object::Integer(0),
        });

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_root),
        });
        doc.trailer.set("Root", catalog_id);

        PdfWriter { doc, pages_root }
    }

    /// Append every page of `src`, in source order. Returns how many pages
    /// were appended.
    pub fn append(&mut self, mut src: Document) -> Result<u32> {
        src.renumber_objects_with(self.doc.max_id + 1);
        // Renumbering assigns ids across every source object, the skipped
        // catalog included, and the catalog's id is not necessarily the top
        // of that span. max_id must cover the whole span, otherwise the next
        // append would renumber into ids that are already live.
        let renumbered_max_id = src.max_id;

        let appended = src.get_pages().len() as u32;

        for (object_id, mut object) in src.objects {
            match object.type_name().unwrap_or(b"") {
                // The source catalog is replaced by the writer's own.
                b"Catalog" => {}
                b"Pages" => {
                    let pages_dict = object.as_dict_mut()?;

                    if pages_dict.has(b"Parent") {
                        // Interior Pages node; its parent comes along with it.
                        self.doc.objects.insert(object_id, object);
                    } else {
                        // The source's root Pages node becomes a child of
                        // the writer's root.
                        pages_dict.set("Parent", Object::Reference(self.pages_root));
                        let imported_count = pages_dict.get(b"Count")?.as_i64()?;
                        self.doc
                            .objects
                            .insert(object_id, Object::Dictionary(pages_dict.clone()));

                        let root_dict = self
                            .doc
                            .get_object_mut(self.pages_root)?
                            .as_dict_mut()?;
                        let total = root_dict.get(b"Count")?.as_i64()? + imported_count;
                        root_dict.set("Count", Object::Integer(total));
                        root_dict
                            .get_mut(b"Kids")?
                            .as_array_mut()?
                            .push(Object::Reference(object_id));
                    }
                }
                _ => {
                    self.doc.objects.insert(object_id, object);
                }
            }
        }

        self.doc.max_id = renumbered_max_id;

        Ok(appended)
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Compress and write the accumulated document in one shot.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        self.doc.compress();
        self.doc
            .save(path)
            .map_err(|source| Error::output(path, source))?;
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
