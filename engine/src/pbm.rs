//! Decoding of PBM (portable bitmap) images into bitmap masks.
//!
//! Both the plain `P1` and the raw `P4` variants are understood:
//! http://netpbm.sourceforge.net/doc/pbm.html
//!
//! The raster must hold at least `width * height` pixels, anything after it
//! is ignored.

use std::{error::Error, fmt};

use crate::mask::{BitmapMask, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `P1`, pixels written as `0` and `1` characters
    Ascii,
    /// `P4`, pixels packed eight to a byte, most significant bit first
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    InvalidFormat(String),
    UnknownSignature([u8; 2]),
}

impl Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidFormat(reason) => write!(f, "invalid PBM image: {}", reason),
            DecodeError::UnknownSignature(magic) => write!(
                f,
                "unknown PBM signature {:?}",
                String::from_utf8_lossy(magic)
            ),
        }
    }
}

fn invalid(reason: impl Into<String>) -> DecodeError {
    DecodeError::InvalidFormat(reason.into())
}

/// Checks the length and the magic number of a PBM image.
pub fn detect_format(bytes: &[u8]) -> Result<Format, DecodeError> {
    if bytes.len() <= 2 {
        return Err(invalid(format!("{} bytes is too short", bytes.len())));
    }
    match [bytes[0], bytes[1]] {
        [b'P', b'1'] => Ok(Format::Ascii),
        [b'P', b'4'] => Ok(Format::Binary),
        magic => Err(DecodeError::UnknownSignature(magic)),
    }
}

/// Decodes a complete PBM image into a mask at the origin.
pub fn decode(bytes: &[u8]) -> Result<BitmapMask, DecodeError> {
    let format = detect_format(bytes)?;
    let mut reader = Reader::new(&bytes[2..]);
    let (width, height) = read_header(&mut reader)?;
    log::debug!("decoding {:?} PBM of {}x{} pixels", format, width, height);

    let pixels = match format {
        Format::Ascii => decode_ascii(reader.remaining(), width, height)?,
        Format::Binary => decode_binary(reader.remaining(), width, height)?,
    };

    Ok(BitmapMask::new(Grid::from_pixels(width, height, pixels)))
}

struct Reader<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, index: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.index += 1;
        }
        byte
    }

    fn skip_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.peek().map_or(false, &predicate) {
            self.index += 1;
        }
    }

    /// Skips whitespace and any number of `#` comments running to end of line.
    fn skip_filler(&mut self) {
        self.skip_while(is_whitespace);
        while self.peek() == Some(b'#') {
            self.skip_while(|byte| byte != b'\n');
            self.skip_while(is_whitespace);
        }
    }

    fn read_number(&mut self, name: &str) -> Result<u32, DecodeError> {
        let start = self.index;
        let mut value: u32 = 0;
        while let Some(digit) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|value| value.checked_add((digit - b'0') as u32))
                .ok_or_else(|| invalid(format!("{} is too large", name)))?;
            self.index += 1;
        }
        if self.index == start {
            return Err(invalid(format!("missing {}", name)));
        }
        Ok(value)
    }

    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.index..]
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn read_header(reader: &mut Reader) -> Result<(u32, u32), DecodeError> {
    reader.skip_filler();
    let width = reader.read_number("width")?;
    reader.skip_filler();
    let height = reader.read_number("height")?;

    // exactly one separator, raw pixel data may start with a whitespace byte
    match reader.next() {
        None => Ok((width, height)),
        Some(byte) if is_whitespace(byte) => Ok((width, height)),
        Some(byte) => Err(invalid(format!(
            "unexpected byte {:#04x} after height",
            byte
        ))),
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, DecodeError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| invalid(format!("{}x{} is too large", width, height)))
}

fn decode_ascii(bytes: &[u8], width: u32, height: u32) -> Result<Vec<bool>, DecodeError> {
    let expected = pixel_count(width, height)?;
    // every pixel takes at least one byte
    if bytes.len() < expected {
        return Err(invalid(format!(
            "expected {} pixels, only {} bytes remain",
            expected,
            bytes.len()
        )));
    }

    let pixels: Vec<bool> = bytes
        .iter()
        .filter_map(|byte| match byte {
            b'0' => Some(false),
            b'1' => Some(true),
            _ => None,
        })
        .take(expected)
        .collect();

    if pixels.len() < expected {
        return Err(invalid(format!(
            "expected {} pixels, found {}",
            expected,
            pixels.len()
        )));
    }
    Ok(pixels)
}

fn decode_binary(bytes: &[u8], width: u32, height: u32) -> Result<Vec<bool>, DecodeError> {
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    // rows are padded to whole bytes
    let row_bytes = (width as usize + 7) / 8;
    let expected = row_bytes
        .checked_mul(height as usize)
        .ok_or_else(|| invalid(format!("{}x{} is too large", width, height)))?;
    if bytes.len() < expected {
        return Err(invalid(format!(
            "expected {} bytes of pixel data, found {}",
            expected,
            bytes.len()
        )));
    }

    let pixels = bytes[..expected]
        .chunks_exact(row_bytes)
        .flat_map(|row| {
            (0..width as usize).map(move |col| row[col / 8] >> (7 - col % 8) & 1 == 1)
        })
        .collect();
    Ok(pixels)
}
