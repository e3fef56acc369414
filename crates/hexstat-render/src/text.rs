//! Label text sizing.

use unicode_width::UnicodeWidthStr;

/// Labels wider than this many columns drop to the smaller font.
const WIDE_LABEL_COLUMNS: usize = 12;

/// Font size hint for a perimeter label.
///
/// Measured in display columns rather than bytes so accented and fullwidth
/// names shrink when they actually take up room, not when their encoding
/// does.
pub fn font_size_hint(text: &str) -> f64 {
    if text.width() > WIDE_LABEL_COLUMNS {
        14.0
    } else {
        16.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_keep_the_large_font() {
        assert_eq!(font_size_hint("SPEED"), 16.0);
        assert_eq!(font_size_hint("REACTIVITY"), 16.0);
    }

    #[test]
    fn wide_labels_shrink() {
        assert_eq!(font_size_hint("RESOURCEFULNESS"), 14.0);
        // 7 fullwidth CJK chars occupy 14 columns.
        assert_eq!(font_size_hint("反応速度反応速度"), 14.0);
    }

    #[test]
    fn accented_names_measure_by_columns_not_bytes() {
        // 12 chars, 14 bytes in UTF-8; stays at the large font.
        assert_eq!(font_size_hint("RÉACTIVITÉSS"), 16.0);
    }
}
