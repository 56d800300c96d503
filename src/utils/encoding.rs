//! Text decoding for loaded files.
//!
//! Files are treated as UTF-8. A leading BOM is dropped and invalid byte
//! sequences are replaced rather than failing the whole load.

use encoding_rs::UTF_8;

/// Decode file bytes into a `String`.
pub fn decode_utf8(data: &[u8]) -> String {
    let (decoded, _, had_errors) = UTF_8.decode(data);
    if had_errors {
        log::warn!("Replaced invalid UTF-8 sequences while decoding {} bytes", data.len());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let data = "Hello, 世界\r\nline two".as_bytes();
        assert_eq!(decode_utf8(data), "Hello, 世界\r\nline two");
    }

    #[test]
    fn test_bom_is_stripped() {
        let data = b"\xEF\xBB\xBFhello";
        assert_eq!(decode_utf8(data), "hello");
    }

    #[test]
    fn test_invalid_bytes_are_replaced() {
        let data = b"ab\xFFcd";
        assert_eq!(decode_utf8(data), "ab\u{FFFD}cd");
    }
}
