//! PNG encoding for RGB canvases with embedded text metadata.
//!
//! Writes truecolour PNGs (color type 2) and places any `tEXt` chunks
//! between IHDR and IDAT. A small reader is included so written files can
//! be inspected without a full decoder.

use std::io::Write;

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum tEXt keyword length in bytes
const MAX_KEYWORD_LEN: usize = 79;

/// A `tEXt` key/value pair. Both parts must be Latin-1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub keyword: String,
    pub text: String,
}

impl TextChunk {
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
        }
    }

    /// Serialize as `keyword\0text`.
    fn to_bytes(&self) -> Result<Vec<u8>, String> {
        let keyword = latin1_bytes(&self.keyword)
            .ok_or_else(|| format!("keyword '{}' is not Latin-1", self.keyword))?;
        if keyword.is_empty() || keyword.len() > MAX_KEYWORD_LEN {
            return Err(format!(
                "keyword '{}' must be 1-{} bytes",
                self.keyword, MAX_KEYWORD_LEN
            ));
        }
        if keyword.contains(&0) || self.keyword.trim() != self.keyword {
            return Err(format!("keyword '{}' has invalid characters", self.keyword));
        }

        let text = latin1_bytes(&self.text)
            .ok_or_else(|| format!("text for '{}' is not Latin-1", self.keyword))?;

        let mut data = Vec::with_capacity(keyword.len() + 1 + text.len());
        data.extend_from_slice(&keyword);
        data.push(0);
        data.extend_from_slice(&text);
        Ok(data)
    }
}

fn latin1_bytes(s: &str) -> Option<Vec<u8>> {
    s.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}

/// Create a PNG image from RGB pixel data (color type 2).
///
/// # Arguments
/// - `pixels`: RGB pixel data (3 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
/// - `text`: `tEXt` chunks to embed, in order
pub fn create_png_rgb(
    pixels: &[u8],
    width: usize,
    height: usize,
    text: &[TextChunk],
) -> Result<Vec<u8>, String> {
    if width == 0 || height == 0 {
        return Err(format!("cannot encode empty {}x{} image", width, height));
    }
    if pixels.len() != width * height * 3 {
        return Err(format!(
            "expected {} bytes for {}x{} RGB, got {}",
            width * height * 3,
            width,
            height,
            pixels.len()
        ));
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(2); // color type (RGB)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // tEXt chunks (metadata)
    for chunk in text {
        write_chunk(&mut png, b"tEXt", &chunk.to_bytes()?);
    }

    // IDAT chunk (image data)
    let idat_data = deflate_idat(pixels, width * 3, height)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let crc_data = [chunk_type.as_slice(), data].concat();
    png.extend_from_slice(&crc32fast::hash(&crc_data).to_be_bytes());
}

/// Deflate scanlines for the IDAT chunk.
fn deflate_idat(
    pixels: &[u8],
    row_bytes: usize,
    height: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    // Add filter byte (0 = no filter) to each scanline
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in pixels.chunks_exact(row_bytes).take(height) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    let compressed = encoder.finish()?;

    Ok(compressed)
}

/// A raw chunk borrowed from an encoded PNG.
#[derive(Debug)]
struct RawChunk<'a> {
    chunk_type: [u8; 4],
    data: &'a [u8],
}

/// Split an encoded PNG into chunks, verifying signature and CRCs.
fn parse_chunks(png: &[u8]) -> Result<Vec<RawChunk<'_>>, String> {
    if png.len() < PNG_SIGNATURE.len() || png[..8] != PNG_SIGNATURE {
        return Err("missing PNG signature".to_string());
    }

    let mut chunks = Vec::new();
    let mut offset = PNG_SIGNATURE.len();
    while offset < png.len() {
        if offset + 12 > png.len() {
            return Err(format!("truncated chunk header at byte {}", offset));
        }
        let len = u32::from_be_bytes([
            png[offset],
            png[offset + 1],
            png[offset + 2],
            png[offset + 3],
        ]) as usize;
        let type_start = offset + 4;
        let data_start = type_start + 4;
        let data_end = data_start + len;
        if data_end + 4 > png.len() {
            return Err(format!("truncated chunk at byte {}", offset));
        }

        let expected = u32::from_be_bytes([
            png[data_end],
            png[data_end + 1],
            png[data_end + 2],
            png[data_end + 3],
        ]);
        if crc32fast::hash(&png[type_start..data_end]) != expected {
            return Err(format!("CRC mismatch in chunk at byte {}", offset));
        }

        let mut chunk_type = [0u8; 4];
        chunk_type.copy_from_slice(&png[type_start..data_start]);
        chunks.push(RawChunk {
            chunk_type,
            data: &png[data_start..data_end],
        });

        offset = data_end + 4;
        if &chunk_type == b"IEND" {
            break;
        }
    }

    Ok(chunks)
}

/// Read width and height from the IHDR chunk.
pub fn read_dimensions(png: &[u8]) -> Result<(u32, u32), String> {
    let chunks = parse_chunks(png)?;
    let ihdr = chunks
        .first()
        .filter(|c| &c.chunk_type == b"IHDR" && c.data.len() == 13)
        .ok_or_else(|| "first chunk is not a valid IHDR".to_string())?;

    let width = u32::from_be_bytes([ihdr.data[0], ihdr.data[1], ihdr.data[2], ihdr.data[3]]);
    let height = u32::from_be_bytes([ihdr.data[4], ihdr.data[5], ihdr.data[6], ihdr.data[7]]);
    Ok((width, height))
}

/// Read all `tEXt` chunks in file order.
pub fn read_text_chunks(png: &[u8]) -> Result<Vec<TextChunk>, String> {
    parse_chunks(png)?
        .into_iter()
        .filter(|c| &c.chunk_type == b"tEXt")
        .map(|c| -> Result<TextChunk, String> {
            let sep = c
                .data
                .iter()
                .position(|&b| b == 0)
                .ok_or_else(|| "tEXt chunk without keyword separator".to_string())?;
            Ok(TextChunk {
                keyword: c.data[..sep].iter().map(|&b| b as char).collect(),
                text: c.data[sep + 1..].iter().map(|&b| b as char).collect(),
            })
        })
        .collect()
}
