//! PBM (portable bitmap) support
//!
//! Reads and writes the plain-text P1 variant, which keeps sample bitmaps
//! readable in a diff. A `1` is a set cell.

use crate::{IoError, IoResult};
use scrawl_encode::Bitmap;
use std::io::{BufRead, Write};

/// Write a bitmap as plain PBM (P1)
pub fn write_pbm<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    writeln!(writer, "P1")?;
    writeln!(writer, "{} {}", bitmap.columns(), bitmap.rows())?;
    for row in bitmap.cells().chunks(bitmap.columns() as usize) {
        let line: Vec<&str> = row.iter().map(|&c| if c == 1 { "1" } else { "0" }).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a plain PBM (P1) bitmap
///
/// `#` comments are skipped. Cells may be separated by whitespace or
/// packed together.
pub fn read_pbm<R: BufRead>(reader: R) -> IoResult<Bitmap> {
    let mut text = String::new();
    for line in reader.lines() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("");
        text.push_str(content);
        text.push('\n');
    }

    let mut tokens = text.split_whitespace();
    match tokens.next() {
        Some("P1") => {}
        Some(magic) => {
            return Err(IoError::UnsupportedFormat(format!(
                "expected plain PBM magic P1, got {}",
                magic
            )));
        }
        None => return Err(IoError::DecodeError("empty PBM".to_string())),
    }

    let mut header = |what: &str| -> IoResult<u32> {
        tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| IoError::DecodeError(format!("missing or invalid PBM {}", what)))
    };
    let width = header("width")?;
    let height = header("height")?;

    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::DecodeError(format!("PBM size overflow: {}x{}", width, height)))?;
    // sized from the data present, not the header
    let mut cells = Vec::with_capacity(expected.min(text.len()));
    for ch in tokens.flat_map(str::chars) {
        match ch {
            '0' => cells.push(0),
            '1' => cells.push(1),
            other => {
                return Err(IoError::DecodeError(format!(
                    "invalid PBM cell character {:?}",
                    other
                )));
            }
        }
    }
    if cells.len() < expected {
        return Err(IoError::DecodeError(format!(
            "PBM truncated: expected {} cells, got {}",
            expected,
            cells.len()
        )));
    }
    cells.truncate(expected);

    Ok(Bitmap::from_cells(height, width, cells)?)
}
