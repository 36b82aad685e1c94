use std::io::{self, BufRead};
use std::vec;

/// Characters that terminate a token. Everything between two delimiters (or
/// between a delimiter and a line boundary) is a token.
pub const DELIMITERS: [char; 5] = [',', ' ', '.', '\t', '\n'];

/// Lazy iterator over the word tokens of a line-oriented text source.
///
/// Created by [`tokenize`]. Lines are read one at a time from the underlying
/// reader and split independently; the source is never rewound.
pub struct Tokens<R> {
    lines: io::Lines<R>,
    pending: vec::IntoIter<String>,
}

/// Splits a text source into word tokens, where a token is a maximal run of
/// characters not in [`DELIMITERS`]. Empty tokens are never emitted, and token
/// order follows order of appearance across lines.
///
/// Read failures from the underlying source surface as `Err` items; running
/// out of input simply ends the sequence.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use lazyseq::tokenize::tokenize;
/// let words: Vec<String> = tokenize(Cursor::new("a, b.c\nd"))
///     .collect::<std::io::Result<Vec<_>>>()
///     .unwrap();
/// assert_eq!(words, ["a", "b", "c", "d"]);
/// ```
pub fn tokenize<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        lines: reader.lines(),
        pending: Vec::new().into_iter(),
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.split(|c| DELIMITERS.contains(&c))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            match self.lines.next()? {
                Ok(line) => self.pending = split_line(&line).into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
