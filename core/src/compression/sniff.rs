//! compression/sniff.rs
//! Magic-number check. Looks at the first two bytes only: no method byte,
//! header flags or trailer validation, so arbitrary data that happens to
//! start with `1f 8b` reports true.

use crate::compression::constants::GZIP_MAGIC;

#[inline]
pub fn has_gzip_magic(data: &[u8]) -> bool {
    data.len() >= GZIP_MAGIC.len() && data[..GZIP_MAGIC.len()] == GZIP_MAGIC
}

/// Text form of [`has_gzip_magic`] over a binary text container.
/// Characters above U+00FF cannot be container bytes and stop the scan.
pub fn has_gzip_magic_text(data: &str) -> bool {
    let head: Vec<u8> = data
        .chars()
        .take(GZIP_MAGIC.len())
        .map_while(|c| u8::try_from(c).ok())
        .collect();
    has_gzip_magic(&head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_are_never_gzip() {
        assert!(!has_gzip_magic(&[]));
        assert!(!has_gzip_magic(&[0x1f]));
        assert!(!has_gzip_magic_text(""));
        assert!(!has_gzip_magic_text("\u{1f}"));
    }

    #[test]
    fn magic_prefix_alone_is_enough() {
        assert!(has_gzip_magic(&[0x1f, 0x8b]));
        assert!(has_gzip_magic(&[0x1f, 0x8b, b'n', b'o', b'p', b'e']));
        assert!(has_gzip_magic_text("\u{1f}\u{8b}garbage"));
    }

    #[test]
    fn wrong_or_swapped_bytes_are_rejected() {
        assert!(!has_gzip_magic(&[0x8b, 0x1f]));
        assert!(!has_gzip_magic(b"not gzipped data"));
        assert!(!has_gzip_magic_text("not gzipped data"));
        // U+8B1F would be bytes e8 ac 9f in UTF-8; not a container byte.
        assert!(!has_gzip_magic_text("\u{1f}\u{8b1f}"));
    }
}
