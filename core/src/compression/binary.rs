//! compression/binary.rs
//! Binary text container: one `char` per byte (U+0000..=U+00FF), the way
//! scripting hosts carry raw bytes inside strings.

use crate::types::{DecodeStage, GzipError};

pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn text_to_bytes(text: &str) -> Result<Vec<u8>, GzipError> {
    text.chars()
        .enumerate()
        .map(|(idx, c)| {
            u8::try_from(c).map_err(|_| {
                GzipError::decoding(
                    DecodeStage::TextContainer,
                    format!("character U+{:04X} at index {} is not a byte", c as u32, idx),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_value_survives() {
        let all: Vec<u8> = (0..=255u8).collect();
        let text = bytes_to_text(&all);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(text_to_bytes(&text).unwrap(), all);
    }

    #[test]
    fn ascii_maps_to_itself() {
        assert_eq!(bytes_to_text(b"Hello"), "Hello");
        assert_eq!(text_to_bytes("Hello").unwrap(), b"Hello".to_vec());
    }

    #[test]
    fn wide_characters_are_rejected() {
        let err = text_to_bytes("ab\u{20ac}").unwrap_err();
        assert!(err.is_decoding());
        assert!(err.to_string().contains("U+20AC at index 2"));
    }
}
