use crate::commands::merge::{self, MergeConfig};
use crate::commands::split::{self, SplitConfig};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Interactive equivalent of the `split` and `merge` subcommands. Gathers
/// answers line by line, builds the same config structs the direct CLI path
/// uses, and dispatches to the same entry points.
pub fn run() -> Result<()> {
    let choice = prompt("Do you want to split or merge? ")?;

    match choice.as_str() {
        "split" => {
            let input = PathBuf::from(prompt("Enter the input file name/path: ")?);
            let total_pages = PdfDocument::open(&input)?.page_count();

            let output = prompt("Enter the output file name/path: ")?;
            let start = prompt(&format!(
                "Enter the starting page to split from (1-{total_pages}): "
            ))?;
            let end = prompt(&format!(
                "Enter the end page you want to split to (1-{total_pages}): "
            ))?;
            let merge = prompt(
                "Do you want to merge the extracted pages into a single PDF? (yes/no): ",
            )?;

            let config = SplitConfig {
                input,
                output: parse_optional_path(&output),
                start: parse_page_number(&start)?.unwrap_or(1),
                end: parse_page_number(&end)?,
                merge: parse_yes_no(&merge),
            };
            split::run(&config)
        }
        "merge" => {
            let inputs = prompt("Enter the input file paths, separated by a single space: ")?;
            let output = prompt("Enter the output file path: ")?;

            let config = MergeConfig {
                inputs: inputs.split_whitespace().map(PathBuf::from).collect(),
                output: parse_optional_path(&output),
            };
            merge::run(&config)
        }
        _ => {
            println!("Invalid choice. Please choose either 'split' or 'merge'.");
            Ok(())
        }
    }
}

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("failed to read from stdin")?;
    Ok(answer.trim().to_string())
}

/// An empty answer means "use the default".
fn parse_optional_path(answer: &str) -> Option<PathBuf> {
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}

fn parse_page_number(answer: &str) -> Result<Option<u32>> {
    if answer.is_empty() {
        return Ok(None);
    }
    let page = answer
        .parse()
        .with_context(|| format!("invalid page number: {answer}"))?;
    Ok(Some(page))
}

fn parse_yes_no(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}
