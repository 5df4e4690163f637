use super::features::starts_capitalized_word;
use super::scan::{Mark, Scanned, Scanner};
use compact_str::CompactString;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

static LETTER_COMMANDS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/letter_commands.rs"));

/// The character that ended a word in the source text, used again when the
/// words of a part are joined back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Space,
    Hyphen,
}

impl Terminator {
    fn as_char(self) -> char {
        match self {
            Terminator::Space => ' ',
            Terminator::Hyphen => '-',
        }
    }
}

/// One word of a single name.
#[derive(Debug, Clone)]
pub struct NamePart<'a> {
    pub word: &'a str,
    /// The leading slice used as this word's initial, e.g. `J` for `John` or
    /// `{\relax Ch}` for `{\relax Ch}ristoph`.
    pub initial: &'a str,
    pub terminator: Terminator,
    pub capitalized: bool,
    /// Number of top-level commas preceding the word.
    pub segment: usize,
}

pub type NameParts<'a> = SmallVec<[NamePart<'a>; 8]>;

impl<'a> NamePart<'a> {
    /// Split one name into words at top-level whitespace, `~`, `-` and `,`.
    /// Also returns the number of top-level commas seen.
    pub fn all_from_text(text: &'a str) -> (NameParts<'a>, usize) {
        let mut parts = NameParts::new();
        let mut commas = 0;
        let mut current: Option<WordScan> = None;
        let mut last_start = 0;

        for s in Scanner::new(text) {
            if s.is_top_level() && is_word_break(s.ch) {
                if let Some(scan) = current.take() {
                    let terminator = if s.ch == '-' {
                        Terminator::Hyphen
                    } else {
                        Terminator::Space
                    };
                    last_start = scan.start;
                    parts.push(scan.finish(text, s.offset, terminator, commas));
                } else if s.ch != '-' {
                    keep_dangling_hyphen(&mut parts, text, last_start);
                }
                if s.ch == ',' {
                    commas += 1;
                }
                continue;
            }

            current
                .get_or_insert_with(|| WordScan::new(s.offset))
                .feed(text, &s);
        }

        match current {
            Some(scan) => parts.push(scan.finish(text, text.len(), Terminator::Space, commas)),
            None => keep_dangling_hyphen(&mut parts, text, last_start),
        }

        (parts, commas)
    }

    /// Is this word a lower-case particle like `von`, `de` or `van`?
    /// Words inside a hyphenated compound (`al-Khwārizmī`) never are.
    pub fn is_particle(parts: &[NamePart], i: usize) -> bool {
        let part = &parts[i];
        !part.capitalized
            && part.terminator != Terminator::Hyphen
            && (i == 0 || parts[i - 1].terminator != Terminator::Hyphen)
    }
}

// A hyphen with no word after it stays part of the word before it, as in
// `A-` or `A- B`.
fn keep_dangling_hyphen<'a>(parts: &mut NameParts<'a>, text: &'a str, start: usize) {
    if let Some(last) = parts.last_mut() {
        if last.terminator == Terminator::Hyphen {
            let end = start + last.word.len() + '-'.len_utf8();
            last.word = &text[start..end];
            last.terminator = Terminator::Space;
        }
    }
}

#[inline]
fn is_word_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '~' | '-')
}

/// Join words back together the way they were separated in the source;
/// words from different comma-separated segments are joined with `, `.
pub fn join(parts: &[NamePart]) -> Option<CompactString> {
    join_with(parts, |p| p.word, "")
}

/// Join the initials of words, each followed by a period.
pub fn join_initials(parts: &[NamePart]) -> Option<CompactString> {
    join_with(parts, |p| p.initial, ".")
}

fn join_with<'a, F>(parts: &[NamePart<'a>], piece: F, after_piece: &str) -> Option<CompactString>
where
    F: Fn(&NamePart<'a>) -> &'a str,
{
    let (first, rest) = parts.split_first()?;

    let mut result = CompactString::new(piece(first));
    result.push_str(after_piece);

    let mut previous = first;
    for part in rest {
        if part.segment != previous.segment {
            result.push_str(", ");
        } else {
            result.push(previous.terminator.as_char());
        }
        result.push_str(piece(part));
        result.push_str(after_piece);
        previous = part;
    }

    Some(result)
}

/// Per-word state while scanning for the first letter and the end of the
/// initial.
struct WordScan {
    start: usize,
    // Earliest offset the initial may end at: past the whole grapheme
    // cluster of the first letter
    initial_min_end: Option<usize>,
    initial_end: Option<usize>,
    capitalized: bool,
    command_start: Option<usize>,
}

impl WordScan {
    fn new(start: usize) -> WordScan {
        WordScan {
            start,
            initial_min_end: None,
            initial_end: None,
            capitalized: true,
            command_start: None,
        }
    }

    fn feed(&mut self, text: &str, s: &Scanned) {
        // A closing brace still belongs to the initial, as in `{\relax Ch}`
        if self.initial_end.is_none() && s.depth == 0 && s.ch != '}' {
            if let Some(min_end) = self.initial_min_end {
                if s.offset >= min_end {
                    self.initial_end = Some(s.offset);
                }
            }
        }

        if s.mark != Mark::CommandName {
            if let Some(start) = self.command_start.take() {
                self.end_command(text, start, s.offset);
            }
        }

        match s.mark {
            Mark::CommandStart => self.command_start = Some(s.offset),
            Mark::CommandName => {}
            Mark::Plain => {
                if self.initial_min_end.is_none() && s.ch.is_alphabetic() {
                    self.capitalized = s.depth > 0 || starts_capitalized_word(s.ch);
                    let cluster = text[s.offset..]
                        .graphemes(true)
                        .next()
                        .map_or(s.ch.len_utf8(), str::len);
                    self.initial_min_end = Some(s.offset + cluster);
                }
            }
        }
    }

    fn end_command(&mut self, text: &str, start: usize, end: usize) {
        let name = &text[start + 1..end];
        if self.initial_min_end.is_none() && LETTER_COMMANDS.contains(name) {
            self.capitalized = name.starts_with(|c: char| c.is_uppercase());
            self.initial_min_end = Some(end);
        }
    }

    fn finish<'a>(
        mut self,
        text: &'a str,
        end: usize,
        terminator: Terminator,
        segment: usize,
    ) -> NamePart<'a> {
        if let Some(start) = self.command_start.take() {
            self.end_command(text, start, end);
        }

        let initial_end = self.initial_end.unwrap_or(end).min(end);
        NamePart {
            word: &text[self.start..end],
            initial: &text[self.start..initial_end],
            terminator,
            capitalized: self.capitalized,
            segment,
        }
    }
}
