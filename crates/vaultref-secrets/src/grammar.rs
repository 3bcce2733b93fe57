//! `%name%` parameter-reference grammar
//!
//! Text decomposes into literal spans and reference spans:
//! - `%key%` is a reference when `key` is non-empty and holds no `%` and no
//!   whitespace
//! - `%%` is an escaped percent and stays literal, both bytes kept
//! - a `%` that cannot open a reference is literal
//!
//! Decomposition is total. Concatenating the raw text of every span gives
//! back the input byte for byte.

const DELIMITER: u8 = b'%';

/// One piece of decomposed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Text outside any reference
    Literal(&'a str),
    /// A complete `%key%` reference
    Reference {
        /// The text between the delimiters
        key: &'a str,
        /// The full span including delimiters
        raw: &'a str,
    },
}

impl<'a> Span<'a> {
    /// Original bytes of this span
    pub fn raw(&self) -> &'a str {
        match self {
            Span::Literal(text) => text,
            Span::Reference { raw, .. } => raw,
        }
    }
}

/// Conservative pre-check: a reference needs two delimiters.
///
/// Never returns false for text that holds a reference.
pub fn may_contain_reference(text: &str) -> bool {
    text.bytes().filter(|&b| b == DELIMITER).nth(1).is_some()
}

/// Iterate over the spans of `text` in order
pub fn spans(text: &str) -> Spans<'_> {
    Spans {
        text,
        pos: 0,
        pending: None,
    }
}

/// Iterator returned by [`spans`]
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    text: &'a str,
    pos: usize,
    pending: Option<Span<'a>>,
}

impl<'a> Spans<'a> {
    /// Find the next reference at or after `from`, as (start, end) byte offsets
    fn next_reference(&self, from: usize) -> Option<(usize, usize)> {
        let bytes = self.text.as_bytes();
        let mut cursor = from;

        while let Some(open) = find_delimiter(bytes, cursor) {
            let close = find_delimiter(bytes, open + 1)?;
            let key = &self.text[open + 1..close];

            if key.is_empty() {
                // `%%` escape
                cursor = close + 1;
            } else if key.chars().any(char::is_whitespace) {
                // the closing `%` may still open a reference
                cursor = close;
            } else {
                return Some((open, close + 1));
            }
        }

        None
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        match self.next_reference(start) {
            Some((open, end)) => {
                let reference = Span::Reference {
                    key: &self.text[open + 1..end - 1],
                    raw: &self.text[open..end],
                };
                self.pos = end;
                if open > start {
                    self.pending = Some(reference);
                    Some(Span::Literal(&self.text[start..open]))
                } else {
                    Some(reference)
                }
            }
            None => {
                self.pos = self.text.len();
                Some(Span::Literal(&self.text[start..]))
            }
        }
    }
}

fn find_delimiter(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == DELIMITER)
        .map(|offset| from + offset)
}

/// Rebuild `text`, asking `accept` about every reference key.
///
/// `Some(replacement)` substitutes the replacement verbatim; `None` keeps
/// the original `%key%` bytes.
pub fn decompose<F, R>(text: &str, mut accept: F) -> String
where
    F: FnMut(&str) -> Option<R>,
    R: AsRef<str>,
{
    let mut output = String::with_capacity(text.len());

    for span in spans(text) {
        match span {
            Span::Literal(literal) => output.push_str(literal),
            Span::Reference { key, raw } => match accept(key) {
                Some(replacement) => output.push_str(replacement.as_ref()),
                None => output.push_str(raw),
            },
        }
    }

    output
}

/// Reference keys of `text` in order, duplicates kept
pub fn reference_keys(text: &str) -> impl Iterator<Item = &str> + '_ {
    spans(text).filter_map(|span| match span {
        Span::Reference { key, .. } => Some(key),
        Span::Literal(_) => None,
    })
}
