//! Marker-driven text scanner used by the block splitter and field extractor.
//!
//! The splitter is purely textual: it looks for marker substrings and never
//! attempts balanced-brace parsing. The scanner makes the one deliberate
//! leniency explicit: a missing closing marker consumes the remainder of the
//! input instead of failing.

pub(crate) struct Scanner<'a> {
    input: &'a str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Byte offset of the next occurrence of `marker` at or after `from`.
    pub(crate) fn find_from(&self, marker: &str, from: usize) -> Option<usize> {
        self.input.get(from..)?.find(marker).map(|i| from + i)
    }

    /// Capture the text between the first occurrence of `open` and the next
    /// occurrence of `close`, trimmed of surrounding whitespace.
    ///
    /// Returns `None` when `open` never occurs. When `close` never occurs
    /// after `open`, the capture runs to end-of-input.
    pub(crate) fn capture_between(&self, open: &str, close: &str) -> Option<&'a str> {
        let start = self.find_from(open, 0)? + open.len();
        let end = self.find_from(close, start).unwrap_or(self.input.len());
        Some(self.input[start..end].trim())
    }

    pub(crate) fn len(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_from_advances_past_earlier_matches() {
        let scanner = Scanner::new(":79:a:79:b");
        assert_eq!(scanner.find_from(":79:", 0), Some(0));
        assert_eq!(scanner.find_from(":79:", 1), Some(5));
        assert_eq!(scanner.find_from(":79:", 6), None);
    }

    #[test]
    fn test_capture_between_trims_content() {
        let scanner = Scanner::new("{1: F01BANK \n}{2:x}");
        assert_eq!(scanner.capture_between("{1:", "}"), Some("F01BANK"));
    }

    #[test]
    fn test_capture_between_missing_open_marker() {
        let scanner = Scanner::new("{2:content}");
        assert_eq!(scanner.capture_between("{1:", "}"), None);
    }

    #[test]
    fn test_capture_between_missing_close_runs_to_end() {
        // The leniency branch: no closing marker means the rest of the
        // input is the capture.
        let scanner = Scanner::new("{4:\r\n:20:REF");
        assert_eq!(scanner.capture_between("{4:", "}"), Some(":20:REF"));
    }

    #[test]
    fn test_capture_between_first_occurrence_wins() {
        let scanner = Scanner::new("{4:first}{4:second}");
        assert_eq!(scanner.capture_between("{4:", "}"), Some("first"));
    }

    #[test]
    fn test_capture_between_empty_block() {
        let scanner = Scanner::new("{1:}");
        assert_eq!(scanner.capture_between("{1:", "}"), Some(""));
    }
}
