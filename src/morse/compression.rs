//! Whole-buffer zlib compression for export payloads.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::trace;

use super::error::{MorseVaultError, Result};

/// Compress a byte buffer with zlib at the default level.
///
/// The empty buffer compresses to a valid (header-only) zlib stream.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    trace!("Compressing {} bytes with zlib", payload.len());

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload)?;
    Ok(encoder.finish()?)
}

/// Decompress a zlib byte buffer.
///
/// # Errors
/// Returns `CorruptData` if the input is not a complete, well-formed zlib
/// stream (truncated or malformed bytes).
pub fn decompress(payload: &[u8]) -> Result<Vec<u8>> {
    trace!("Decompressing {} bytes with zlib", payload.len());

    let mut output = Vec::new();
    let mut decoder = ZlibDecoder::new(payload);
    decoder
        .read_to_end(&mut output)
        .map_err(|e| MorseVaultError::CorruptData(format!("zlib decompression failed: {}", e)))?;
    Ok(output)
}
