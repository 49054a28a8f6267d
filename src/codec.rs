//! Gzip codec for stored credential blobs
//!
//! Credentials are always stored in gzip-compressed form so they fit under
//! OS size limits (Windows Credential Manager caps items at 2500 bytes).

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

/// Compress raw credential bytes with gzip framing
pub fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Decompress a gzip-framed blob, reading to end of stream
///
/// Fails on malformed framing or a truncated stream.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw)?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress_roundtrip() {
        let raw = b"{\"access_token\":\"abc123\",\"refresh_token\":\"xyz789\"}";

        let compressed = compress(raw).unwrap();
        let decompressed = decompress(&compressed).unwrap();

        assert_eq!(decompressed, raw);
    }

    #[test]
    fn test_empty_input_roundtrip() {
        let compressed = compress(b"").unwrap();
        // Even an empty payload carries the gzip header and trailer
        assert!(!compressed.is_empty());

        let decompressed = decompress(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_repetitive_input_shrinks() {
        let raw = vec![b'a'; 10_000];
        let compressed = compress(&raw).unwrap();

        assert!(compressed.len() < raw.len());
        assert_eq!(decompress(&compressed).unwrap(), raw);
    }

    #[test]
    fn test_decompress_rejects_non_gzip_data() {
        assert!(decompress(b"definitely not a gzip stream").is_err());
    }

    #[test]
    fn test_decompress_rejects_truncated_stream() {
        let compressed = compress(b"some credentials worth keeping intact").unwrap();
        let truncated = &compressed[..compressed.len() / 2];

        assert!(decompress(truncated).is_err());
    }
}
