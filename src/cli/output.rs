//! Output formatting utilities for CLI operations.
//!
//! The views render HTML fragments into in-memory regions; this module
//! assembles those regions into a minimal standalone document and writes it
//! to standard output or to a file.

use std::fs;
use std::io::{self, Write};

use camino::Utf8Path;
use reviewlens::FetchError;

/// One region of a rendered page, identified for styling and scripting.
pub struct PageSection<'a> {
    /// Element identifier the region is wrapped in.
    pub id: &'a str,
    /// Rendered HTML fragment, already escaped.
    pub body: &'a str,
}

/// Writes a complete HTML document to standard output or, when a path is
/// given, to that file.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when writing fails.
pub fn emit(out: Option<&str>, title: &str, sections: &[PageSection<'_>]) -> Result<(), FetchError> {
    match out {
        Some(path) => write_page_file(Utf8Path::new(path), title, sections),
        None => {
            let mut stdout = io::stdout().lock();
            write_page_to(&mut stdout, title, sections)
        }
    }
}

/// Writes a complete HTML document to the given file path.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when the file cannot be written.
pub fn write_page_file(
    path: &Utf8Path,
    title: &str,
    sections: &[PageSection<'_>],
) -> Result<(), FetchError> {
    let mut buffer = Vec::new();
    write_page_to(&mut buffer, title, sections)?;
    fs::write(path.as_std_path(), buffer).map_err(|e| io_error(&e))
}

/// Writes a complete HTML document to the given writer.
///
/// # Errors
///
/// Returns [`FetchError::Io`] when writing fails.
pub fn write_page_to<W: Write>(
    writer: &mut W,
    title: &str,
    sections: &[PageSection<'_>],
) -> Result<(), FetchError> {
    writeln!(writer, "<!DOCTYPE html>").map_err(|e| io_error(&e))?;
    writeln!(writer, "<html lang=\"en\">").map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "<head><meta charset=\"utf-8\"><title>{title}</title></head>"
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "<body>").map_err(|e| io_error(&e))?;
    for section in sections {
        writeln!(writer, "<div id=\"{}\">{}</div>", section.id, section.body)
            .map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "</body>").map_err(|e| io_error(&e))?;
    writeln!(writer, "</html>").map_err(|e| io_error(&e))?;
    Ok(())
}

/// Converts an I/O error to a [`FetchError::Io`].
pub(crate) fn io_error(error: &io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}
