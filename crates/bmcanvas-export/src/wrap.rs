//! Word wrapping for section bodies

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Embedded newlines start a new line, runs of whitespace collapse to one
/// space, and a word longer than a line is split across lines.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            if current_len > 0 && current_len + 1 + chars.len() <= max_chars {
                current.push(' ');
                current.extend(chars.iter());
                current_len += 1 + chars.len();
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            while chars.len() > max_chars {
                let rest = chars.split_off(max_chars);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            current_len = chars.len();
            current.extend(chars);
        }

        lines.push(current);
    }

    // trailing blank lines carry nothing to draw
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_greedy() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_honours_newlines() {
        let lines = wrap_text("one\n\ntwo three", 20);
        assert_eq!(lines, vec!["one", "", "two three"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   \n  ", 10).is_empty());
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let lines = wrap_text("éééé éééé", 4);
        assert_eq!(lines, vec!["éééé", "éééé"]);
    }
}
