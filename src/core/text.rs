//! Codepoint and display-width helpers.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Number of Unicode scalar values in `text`.
///
/// Cursor and viewport positions are codepoint indices, never byte offsets;
/// multi-byte scalars count as one.
pub fn codepoint_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the codepoint at `index`; `text.len()` when `index` is at
/// or past the end.
pub fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

/// Display width of a single grapheme cluster.
///
/// RGI emoji render double-width in practice even when their scalars claim
/// width 1, so emoji presentation is forced to 2.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }

    if emoji_get(grapheme).is_some() {
        return 2;
    }

    let mut width = 0;
    for ch in grapheme.chars() {
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

/// Summed grapheme width of a string.
pub fn visible_width(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut width = 0;
    for grapheme in grapheme_segments(text) {
        width += grapheme_width(grapheme);
    }
    width
}
