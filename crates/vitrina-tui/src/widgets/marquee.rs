//! Scrolling ticker text for the TV footer.
//!
//! The original showcase animates a marquee strip right-to-left; here
//! the tick loop advances an offset and we cut a cyclic window out of
//! the joined message text each frame.

/// Join ticker segments with a separator into one cyclic strip.
pub fn strip(segments: &[String]) -> String {
    let mut s = segments.join("  •  ");
    if !s.is_empty() {
        s.push_str("  •  ");
    }
    s
}

/// Cut a `width`-character window out of the cyclic strip, starting at
/// `offset` characters (wraps around).
pub fn window(text: &str, width: usize, offset: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || width == 0 {
        return String::new();
    }
    let len = chars.len();
    (0..width).map(|i| chars[(offset + i) % len]).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strip_joins_with_separator() {
        let s = strip(&["a".into(), "b".into()]);
        assert_eq!(s, "a  •  b  •  ");
    }

    #[test]
    fn window_wraps_around() {
        assert_eq!(window("abcdef", 4, 0), "abcd");
        assert_eq!(window("abcdef", 4, 4), "efab");
        assert_eq!(window("abcdef", 8, 5), "fabcdefa");
    }

    #[test]
    fn window_handles_degenerate_inputs() {
        assert_eq!(window("", 10, 3), "");
        assert_eq!(window("abc", 0, 1), "");
    }

    #[test]
    fn offset_is_modular() {
        assert_eq!(window("abc", 3, 0), window("abc", 3, 3));
    }
}
