//! Brace- and command-aware scanning of BibTeX field text.
//!
//! Every splitting decision in this crate (between names, between words,
//! at commas) only acts on characters that sit outside braces and outside
//! a TeX escape command. This module is the single place that tracks both.

use std::str::CharIndices;

/// How a character relates to TeX escape commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Plain,
    /// The backslash that opens a command.
    CommandStart,
    /// A letter of a control word, or the single symbol of a control symbol.
    CommandName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    pub offset: usize,
    pub ch: char,
    /// Number of brace groups enclosing the character. Braces report the
    /// depth outside the group they open or close, so the outer braces of
    /// `{IEEE}` are at depth 0 and the letters at depth 1.
    pub depth: u16,
    pub mark: Mark,
}

impl Scanned {
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.depth == 0 && self.mark == Mark::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Outside,
    AfterBackslash,
    InWord,
}

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: CharIndices<'a>,
    depth: u16,
    command: Command,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            chars: text.char_indices(),
            depth: 0,
            command: Command::Outside,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Scanned> {
        let (offset, ch) = self.chars.next()?;

        let in_command = match self.command {
            Command::AfterBackslash => {
                // A control word continues over letters; anything else is a
                // one-character control symbol like `\'` or `\{`
                self.command = if ch.is_ascii_alphabetic() {
                    Command::InWord
                } else {
                    Command::Outside
                };
                true
            }
            Command::InWord if ch.is_ascii_alphabetic() => true,
            _ => {
                self.command = Command::Outside;
                false
            }
        };

        if in_command {
            return Some(Scanned {
                offset,
                ch,
                depth: self.depth,
                mark: Mark::CommandName,
            });
        }

        let (depth, mark) = match ch {
            '\\' => {
                self.command = Command::AfterBackslash;
                (self.depth, Mark::CommandStart)
            }
            '{' => {
                let outside = self.depth;
                self.depth = self.depth.saturating_add(1);
                (outside, Mark::Plain)
            }
            '}' => {
                // Unmatched closing braces clamp at the top level
                self.depth = self.depth.saturating_sub(1);
                (self.depth, Mark::Plain)
            }
            _ => (self.depth, Mark::Plain),
        };

        Some(Scanned {
            offset,
            ch,
            depth,
            mark,
        })
    }
}

/// Is the whole of `text` one brace group, opened by its first character and
/// closed by its last?
///
/// This is how institutional names like `{IEEE Computer Society}` are told
/// apart from `{Vall{\'e}e} {Poussin}`, whose first group closes early.
pub fn is_single_group(text: &str) -> bool {
    if !text.starts_with('{') || !text.ends_with('}') {
        return false;
    }

    Scanner::new(text)
        .skip(1)
        .find(|s| s.ch == '}' && s.is_top_level())
        .map_or(false, |s| s.offset + 1 == text.len())
}
