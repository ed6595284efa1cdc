// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Offset/hex/ASCII dump of encoded bytes.

use std::io::{self, Write};

/// Prints raw encoded bytes; knows nothing of the field structure.
///
/// ```text
/// 00000000  00 00 00 00 00 00 00 6c 28 0e 04 6e 61 6d 65 0d  |.......l(..name.|
/// 00000010  52 61 6e 64 6f 6d 20 50 65 72 73 6f 6e           |Random Person|
/// 0000001d
/// ```
pub struct HexPrinter<W> {
    writer: W,
    width: usize,
}

impl<W: Write> HexPrinter<W> {
    pub const DEFAULT_WIDTH: usize = 16;

    pub fn new(writer: W) -> Self {
        Self::with_width(writer, Self::DEFAULT_WIDTH)
    }

    /// `width` is the number of bytes shown per line.
    pub fn with_width(writer: W, width: usize) -> Self {
        HexPrinter { writer, width }
    }

    /// Write the dump, one `width`-byte row per line, ending with the total
    /// length on its own line.
    pub fn format(&mut self, encoded: &[u8]) -> io::Result<()> {
        // one extra column for the mid-row gap
        let hex_columns = 3 * self.width + 1;
        for (row, chunk) in encoded.chunks(self.width).enumerate() {
            let mut hex_line = String::new();
            let mut ascii_line = String::new();
            for (column, byte) in chunk.iter().enumerate() {
                if column == self.width / 2 {
                    hex_line.push(' ');
                }
                hex_line.push_str(&format!("{byte:02x} "));
                ascii_line.push(render_ascii(*byte));
            }
            writeln!(
                self.writer,
                "{:08x}  {hex_line:<hex_columns$} |{ascii_line}|",
                row * self.width
            )?;
        }
        writeln!(self.writer, "{:08x}", encoded.len())
    }
}

fn render_ascii(byte: u8) -> char {
    if (32..=126).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}
