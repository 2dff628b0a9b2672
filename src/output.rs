use crate::page_range::PageRange;
use std::path::{Path, PathBuf};

/// Where split output goes: one file holding the whole range, or a directory
/// receiving one file per page. Resolved once, before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Directory(PathBuf),
}

/// Derive the output target for a split.
///
/// With no explicit output the name is synthesized from the input stem and
/// the range, next to the input file. An explicit path that is an existing
/// directory (when merging) gets the derived filename appended. A single-page
/// range resolves to a file rather than a directory.
pub fn resolve_split_output(
    input: &Path,
    explicit_output: Option<&Path>,
    range: PageRange,
    merge: bool,
) -> OutputTarget {
    let derived = derived_name(input, range);

    if merge {
        let path = match explicit_output {
            None => input.with_file_name(format!("{derived}_merged.pdf")),
            Some(path) if path.is_dir() => path.join(format!("{derived}_merged.pdf")),
            Some(path) => path.to_path_buf(),
        };
        return OutputTarget::File(ensure_pdf_extension(path));
    }

    match explicit_output {
        Some(path) if range.is_single_page() && has_pdf_extension(path) => {
            OutputTarget::File(path.to_path_buf())
        }
        Some(path) => OutputTarget::Directory(path.to_path_buf()),
        None if range.is_single_page() => {
            OutputTarget::File(input.with_file_name(format!("{derived}.pdf")))
        }
        None => OutputTarget::Directory(input.with_file_name(derived)),
    }
}

fn derived_name(input: &Path, range: PageRange) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    format!("{stem}-pages_{}_to_{}", range.start, range.end)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn ensure_pdf_extension(path: PathBuf) -> PathBuf {
    if has_pdf_extension(&path) {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".pdf");
        PathBuf::from(name)
    }
}
