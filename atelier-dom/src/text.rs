use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Widest line of a possibly multi-line string.
pub fn max_line_width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}

pub fn line_count(s: &str) -> usize {
    s.lines().count().max(1)
}

/// Cut `s` to `max_width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Horizontal offset of a line of `line_width` inside `available` columns.
pub fn align_offset(line_width: usize, available: usize, align: TextAlign) -> usize {
    let slack = available.saturating_sub(line_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
