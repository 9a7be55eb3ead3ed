//! Text measurement capability required by layout
//!
//! The drawing backend knows its fonts, so it supplies widths. Wrapping has a
//! greedy default built on top of `measure_width`.

use super::types::FontStyle;

pub trait TextMeasure {
    /// Rendered width of `text` in millimetres
    fn measure_width(&self, text: &str, font: FontStyle, size: f64) -> f64;

    /// Split `text` into physical lines no wider than `max_width`
    fn wrap_text(&self, text: &str, max_width: f64, font: FontStyle, size: f64) -> Vec<String> {
        wrap_greedy(self, text, max_width, font, size)
    }
}

/// Word-by-word greedy wrapping; words wider than the column are split by character
pub fn wrap_greedy<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    max_width: f64,
    font: FontStyle,
    size: f64,
) -> Vec<String> {
    let fits = |s: &str| measure.measure_width(s, font, size) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for (i, word) in text.split(' ').enumerate() {
        let candidate = if i == 0 {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if fits(word) {
            current = word.to_string();
            continue;
        }
        for ch in word.chars() {
            current.push(ch);
            if current.chars().count() > 1 && !fits(&current) {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Every character has the same width regardless of font or size
    pub(crate) struct FixedWidth(pub f64);

    impl TextMeasure for FixedWidth {
        fn measure_width(&self, text: &str, _font: FontStyle, _size: f64) -> f64 {
            text.chars().count() as f64 * self.0
        }
    }

    fn wrap(text: &str, max_chars: f64) -> Vec<String> {
        FixedWidth(1.0).wrap_text(text, max_chars, FontStyle::Normal, 10.0)
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 20.0), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10.0),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap("abcdefghij xy", 4.0), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_empty_text_gives_one_empty_line() {
        assert_eq!(wrap("", 10.0), vec![""]);
    }
}
