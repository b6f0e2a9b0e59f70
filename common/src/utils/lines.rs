//! Lazy line sources for list files.
//!
//! List files can be large; their lines are pulled on demand instead of
//! buffered wholesale. Opening happens eagerly so a missing file fails the
//! run before any packet goes out.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

/// Chains literal command-line values with the lines of an optional list
/// file into one lazy stream.
///
/// Blank and whitespace-only entries are skipped. A read error mid-file is
/// yielded once, then the file's stream ends.
pub fn values_then_file(
    values: Vec<String>,
    path: Option<&Path>,
) -> anyhow::Result<impl Iterator<Item = io::Result<String>>> {
    let file_lines = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening list file {}", path.display()))?;
            Some(FileLines {
                lines: BufReader::new(file).lines(),
                failed: false,
            })
        }
        None => None,
    };

    let stream = values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| Ok(value))
        .chain(file_lines.into_iter().flatten());

    Ok(stream)
}

/// Non-blank lines of one file, read on demand.
struct FileLines {
    lines: io::Lines<BufReader<File>>,
    failed: bool,
}

impl Iterator for FileLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        return Some(Ok(line));
                    }
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
