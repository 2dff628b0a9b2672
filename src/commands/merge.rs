use crate::error::Error;
use crate::pdf::{PdfDocument, PdfWriter};
use anyhow::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_OUTPUT: &str = "documents_merged.pdf";

/// Inputs for one merge run, shared by the direct CLI path and the
/// interactive prompt.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Files and/or directories of PDFs, in the order their pages should
    /// appear in the output.
    pub inputs: Vec<PathBuf>,
    /// Defaults to `documents_merged.pdf`.
    pub output: Option<PathBuf>,
}

pub fn run(config: &MergeConfig) -> Result<()> {
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let files = collect_pdf_files(&config.inputs)?;
    if files.is_empty() {
        anyhow::bail!("no PDF files to merge");
    }

    // The writer saves once at the end, so a bad input aborts the whole
    // merge without leaving a partial output file behind.
    let mut writer = PdfWriter::new();
    for file in &files {
        let doc = PdfDocument::open(file)?;
        let appended = writer.append(doc.into_inner())?;
        debug!("appended {appended} page(s) from {}", file.display());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::output(parent, source))?;
        }
    }

    let total_pages = writer.page_count();
    writer.save(&output)?;

    println!(
        "Merged {} file(s) ({} pages) into {}",
        files.len(),
        total_pages,
        output.display()
    );

    Ok(())
}

/// Expand the argument list into concrete PDF files. A directory contributes
/// the `.pdf` files it directly contains, in filesystem listing order (not
/// guaranteed stable across platforms). Non-PDF files are skipped; a missing
/// path aborts the whole merge.
fn collect_pdf_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(Error::NotFound {
                path: input.clone(),
            }
            .into());
        }
        if input.is_dir() {
            for entry in WalkDir::new(input).min_depth(1).max_depth(1) {
                let entry = entry?;
                if entry.file_type().is_file() && is_pdf(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if is_pdf(input) {
            files.push(input.clone());
        } else {
            warn!("skipping non-PDF input: {}", input.display());
        }
    }

    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
