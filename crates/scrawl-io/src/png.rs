//! PNG format support
//!
//! Surfaces are written as 8-bit RGBA. Bitmaps are written as 1-bit
//! grayscale with set cells black and clear cells white.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use scrawl_core::color::{self, compose_rgba};
use scrawl_core::{Surface, SurfaceMut};
use scrawl_encode::Bitmap;
use std::io::{BufRead, Seek, Write};

/// Decoded 8-bit image with its row layout
struct Decoded {
    width: u32,
    height: u32,
    color_type: ColorType,
    line_size: usize,
    data: Vec<u8>,
}

fn decode<R: BufRead + Seek>(reader: R) -> IoResult<Decoded> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            output_info.bit_depth
        )));
    }
    buf.truncate(output_info.buffer_size());

    Ok(Decoded {
        width: output_info.width,
        height: output_info.height,
        color_type: output_info.color_type,
        line_size: output_info.line_size,
        data: buf,
    })
}

/// Read a PNG image into a surface
///
/// Images without an alpha channel are read as fully opaque.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Surface> {
    let img = decode(reader)?;
    let samples = match img.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let mut surface = SurfaceMut::new(img.width, img.height)?;
    for y in 0..img.height {
        let src = &img.data[y as usize * img.line_size..];
        let dst = surface.row_data_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let s = &src[x * samples..x * samples + samples];
            *px = match samples {
                1 => compose_rgba(s[0], s[0], s[0], 255),
                2 => compose_rgba(s[0], s[0], s[0], s[1]),
                3 => compose_rgba(s[0], s[1], s[2], 255),
                _ => compose_rgba(s[0], s[1], s[2], s[3]),
            };
        }
    }

    Ok(surface.into())
}

/// Write a surface as an 8-bit RGBA PNG
pub fn write_png<W: Write>(surface: &Surface, writer: W) -> IoResult<()> {
    let (width, height) = (surface.width(), surface.height());
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for &pixel in surface.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }
    encode(writer, width, height, ColorType::Rgba, BitDepth::Eight, &data)
}

/// Read a grayscale PNG as a bitmap; pixels darker than mid-gray are set
pub fn read_bitmap_png<R: BufRead + Seek>(reader: R) -> IoResult<Bitmap> {
    let img = decode(reader)?;
    if img.color_type != ColorType::Grayscale {
        return Err(IoError::UnsupportedFormat(format!(
            "bitmap PNG must be grayscale, got {:?}",
            img.color_type
        )));
    }
    let mut cells = Vec::with_capacity(img.width as usize * img.height as usize);
    for y in 0..img.height as usize {
        let row = &img.data[y * img.line_size..y * img.line_size + img.width as usize];
        cells.extend(row.iter().map(|&g| (g < 128) as u8));
    }
    Ok(Bitmap::from_cells(img.height, img.width, cells)?)
}

/// Write a bitmap as a 1-bit grayscale PNG
pub fn write_bitmap_png<W: Write>(bitmap: &Bitmap, writer: W) -> IoResult<()> {
    let (width, height) = (bitmap.columns(), bitmap.rows());
    let bytes_per_row = width.div_ceil(8) as usize;
    // 1 is white in grayscale PNG
    let mut data = vec![0xFFu8; bytes_per_row * height as usize];

    for (i, row) in bitmap.cells().chunks(width as usize).enumerate() {
        let row_start = i * bytes_per_row;
        for (x, &cell) in row.iter().enumerate() {
            if cell == 1 {
                data[row_start + x / 8] &= !(1 << (7 - (x % 8)));
            }
        }
    }

    encode(writer, width, height, ColorType::Grayscale, BitDepth::One, &data)
}

fn encode<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    color_type: ColorType,
    bit_depth: BitDepth,
    data: &[u8],
) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
