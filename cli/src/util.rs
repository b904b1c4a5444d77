// SPDX-FileCopyrightText: 2026 Maria Eduarda
//
// SPDX-License-Identifier: Apache-2.0

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Display width of the first `first_n` grapheme clusters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n: usize) -> usize {
    s[..byte_offset_of_grapheme(s, first_n)].width()
}

/// Byte offset where grapheme `g_idx` starts, or `s.len()` past the end.
pub fn byte_offset_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_width_ascii_only() {
        let s = "hello world";
        assert_eq!(unicode_width_of_slice(s, 100), 11);
        assert_eq!(unicode_width_of_slice(s, 5), 5);
        assert_eq!(unicode_width_of_slice(s, 0), 0);
    }

    #[test]
    fn test_unicode_width_mixed_latin_cjk() {
        let s = "abc中文def";
        assert_eq!(unicode_width_of_slice(s, 4), "abc中".width());
        assert_eq!(unicode_width_of_slice(s, 8), s.width());
        assert_eq!(unicode_width_of_slice(s, 9), s.width());
    }

    #[test]
    fn test_unicode_width_emoji() {
        let s = "a😀b";
        assert_eq!(unicode_width_of_slice(s, 2), "a😀".width());
    }

    #[test]
    fn test_unicode_width_empty_string() {
        assert_eq!(unicode_width_of_slice("", 0), 0);
        assert_eq!(unicode_width_of_slice("", 3), 0);
    }

    #[test]
    fn test_grapheme_count_accented() {
        // "e" followed by a combining acute accent is a single grapheme
        assert_eq!(grapheme_count("Jose\u{301}"), 4);
        assert_eq!(grapheme_count("João"), 4);
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn test_byte_offset_of_grapheme() {
        let s = "aé中b";
        assert_eq!(byte_offset_of_grapheme(s, 0), 0);
        assert_eq!(byte_offset_of_grapheme(s, 1), 1);
        assert_eq!(byte_offset_of_grapheme(s, 2), 3);
        assert_eq!(byte_offset_of_grapheme(s, 3), 6);
        assert_eq!(byte_offset_of_grapheme(s, 4), s.len());
        assert_eq!(byte_offset_of_grapheme(s, 10), s.len());
    }

    #[test]
    fn test_byte_range_of_grapheme_at() {
        let s = "a中b";
        assert_eq!(byte_range_of_grapheme_at(s, 0), Some(0..1));
        assert_eq!(byte_range_of_grapheme_at(s, 1), Some(1..4));
        assert_eq!(byte_range_of_grapheme_at(s, 2), Some(4..5));
        assert_eq!(byte_range_of_grapheme_at(s, 3), None);
    }
}
