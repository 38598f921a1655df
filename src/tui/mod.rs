pub mod confirm_overlay;
pub mod detail_overlay;
pub mod footer;
pub mod header;
pub mod layout;
pub mod menu_popup;
pub mod notices;
pub mod recommendations;
pub mod render;
pub mod table;

use unicode_width::UnicodeWidthStr;

/// Cuts `s` to `max_width` display columns, ending in `…` when shortened.
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        s.to_string()
    } else {
        let mut result = String::new();
        let mut width = 0;
        for c in s.chars() {
            let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if width + cw + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            width += cw;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_unchanged() {
        assert_eq!(truncate("Cloud", 10), "Cloud");
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        assert_eq!(truncate("Cloud", 5), "Cloud");
    }

    #[test]
    fn truncate_long_adds_ellipsis() {
        assert_eq!(truncate("Data Science Basics", 8), "Data Sc…");
    }

    #[test]
    fn truncate_umlauts_are_single_width() {
        assert_eq!(truncate("Einführung", 10), "Einführung");
        assert_eq!(truncate("Einführung", 6), "Einfü…");
    }

    #[test]
    fn truncate_wide_characters() {
        let result = truncate("你好世界test", 6);
        assert!(result.ends_with('…'));
        assert!(UnicodeWidthStr::width(result.as_str()) <= 6);
    }

    #[test]
    fn truncate_zero_width() {
        assert_eq!(truncate("hello", 0), "…");
    }

    #[test]
    fn truncate_empty_string() {
        assert_eq!(truncate("", 10), "");
    }
}
