//! Width-aware text helpers for terminal tables (Hangul and other wide
//! characters take two columns)

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad or truncate `s` to exactly `width` terminal columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let visual_width = s.width();
    if visual_width <= width {
        return format!("{}{}", s, " ".repeat(width - visual_width));
    }

    let ellipsis_width = UnicodeWidthChar::width('…').unwrap_or(1);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width + ellipsis_width > width {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }
    truncated.push('…');
    current_width += ellipsis_width;

    format!("{}{}", truncated, " ".repeat(width.saturating_sub(current_width)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_ascii() {
        assert_eq!(fit_to_width("IU", 5), "IU   ");
    }

    #[test]
    fn test_pads_wide_characters_by_columns() {
        let fitted = fit_to_width("아이유", 8);
        assert_eq!(fitted, "아이유  ");
        assert_eq!(fitted.width(), 8);
    }

    #[test]
    fn test_truncates_wide_characters_without_overflow() {
        let fitted = fit_to_width("좋은날좋은날", 7);
        assert_eq!(fitted.width(), 7);
        assert!(fitted.starts_with("좋은날"));
        assert!(fitted.contains('…'));
    }
}
