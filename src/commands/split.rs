use crate::error::Error;
use crate::output::{resolve_split_output, OutputTarget};
use crate::page_range::PageRange;
use crate::pdf::{save_document, PdfDocument};
use anyhow::Result;
use log::debug;
use std::path::PathBuf;

/// Everything one split run needs, gathered up front by either the direct
/// CLI path or the interactive prompt.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    /// First page of the range, 1-indexed inclusive.
    pub start: u32,
    /// Last page of the range, inclusive; defaults to the document's last page.
    pub end: Option<u32>,
    /// Write the whole range into one file instead of one file per page.
    pub merge: bool,
}

pub fn run(config: &SplitConfig) -> Result<()> {
    let doc = PdfDocument::open(&config.input)?;
    let total_pages = doc.page_count();

    let end = config.end.unwrap_or(total_pages);
    let range = PageRange::new(config.start, end, total_pages)?;

    let target = resolve_split_output(
        &config.input,
        config.output.as_deref(),
        range,
        config.merge,
    );
    debug!("resolved output target: {target:?}");

    match target {
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .map_err(|source| Error::output(parent, source))?;
                }
            }

            let pages: Vec<u32> = range.pages().collect();
            let mut extracted = doc.extract_pages(&pages);
            save_document(&mut extracted, &path)?;

            println!(
                "Wrote pages {}-{} of {} to {}",
                range.start,
                range.end,
                config.input.display(),
                path.display()
            );
        }
        OutputTarget::Directory(dir) => {
            std::fs::create_dir_all(&dir).map_err(|source| Error::output(&dir, source))?;

            for page_num in range.pages() {
                let page_path = dir.join(format!("page_{page_num}.pdf"));
                let mut single = doc.extract_pages(&[page_num]);
                save_document(&mut single, &page_path)?;
                debug!("wrote {}", page_path.display());
            }

            println!("Split {} page(s) into {}", range.len(), dir.display());
        }
    }

    Ok(())
}
