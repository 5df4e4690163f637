use super::namepart::{join, join_initials, NamePart, NameParts};
use super::scan::is_single_group;
use super::surname::{self, Boundaries};
use super::utils::strip_protective_braces;
use super::Name;
use compact_str::CompactString;
use std::borrow::Cow;
use std::ops::Range;
use tracing::trace;

/// How a name is written, decided by its number of top-level commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// `First von Last`
    FirstVonLast,
    /// `von Last, First`
    VonLastFirst,
    /// `von Last, Jr, First`
    VonLastJrFirst,
}

impl Form {
    fn from_commas(commas: usize) -> Form {
        match commas {
            0 => Form::FirstVonLast,
            1 => Form::VonLastFirst,
            _ => Form::VonLastJrFirst,
        }
    }
}

#[derive(Debug)]
struct ParseOp<'a> {
    words: NameParts<'a>,
    form: Form,
    given: Option<Range<usize>>,
    prefix: Option<Range<usize>>,
    family: Option<Range<usize>>,
    suffix: Option<Range<usize>>,
}

/// Parse one name (no `and` separators). Never fails; text that fits no
/// rule ends up in the family name.
pub fn parse_name(text: &str) -> Name {
    let text = text.trim();
    if text.is_empty() {
        return Name::default();
    }

    if is_single_group(text) {
        trace!(name = text, "parsed institution");
        return Name::institution(text);
    }

    let (words, commas) = NamePart::all_from_text(text);
    if words.is_empty() {
        // Nothing but separators
        return Name::from_compact(None, None, None, Some(CompactString::new(text)), None);
    }

    let mut op = ParseOp {
        words,
        form: Form::from_commas(commas),
        given: None,
        prefix: None,
        family: None,
        suffix: None,
    };
    op.run();

    trace!(name = text, form = ?op.form, "parsed name");
    op.into_name()
}

impl<'a> ParseOp<'a> {
    fn run(&mut self) {
        match self.form {
            Form::FirstVonLast => self.handle_no_comma(),
            Form::VonLastFirst => {
                self.handle_before_comma(self.segment(0));
                self.given = non_empty(self.segments_from(1));
            }
            Form::VonLastJrFirst => {
                self.handle_before_comma(self.segment(0));
                self.suffix = non_empty(self.segment(1));
                self.given = non_empty(self.segments_from(2));
            }
        }
    }

    fn handle_no_comma(&mut self) {
        let Boundaries {
            given,
            prefix,
            family,
        } = surname::first_von_last(&self.words);

        self.given = given;
        self.prefix = prefix;
        self.family = family;
    }

    fn handle_before_comma(&mut self, segment: Range<usize>) {
        let offset = segment.start;
        let Boundaries { prefix, family, .. } = surname::von_last(&self.words[segment]);
        let shift = |r: Range<usize>| r.start + offset..r.end + offset;

        self.prefix = prefix.map(shift);
        self.family = family.map(shift);
    }

    fn segment(&self, segment: usize) -> Range<usize> {
        let start = self.words.partition_point(|w| w.segment < segment);
        let end = self.words.partition_point(|w| w.segment <= segment);
        start..end
    }

    fn segments_from(&self, segment: usize) -> Range<usize> {
        self.words.partition_point(|w| w.segment < segment)..self.words.len()
    }

    fn into_name(self) -> Name {
        let text_of = |range: &Option<Range<usize>>| {
            range.clone().and_then(|r| join(&self.words[r]))
        };

        let given = text_of(&self.given);
        let abbreviated = self.given.clone().and_then(|r| join_initials(&self.words[r]));
        let prefix = text_of(&self.prefix);
        let family = text_of(&self.family);
        let suffix = text_of(&self.suffix);

        // A family name standing alone keeps its braces
        let family_alone = given.is_none() && prefix.is_none() && suffix.is_none();
        let family = if family_alone {
            family
        } else {
            family.map(strip_braces)
        };

        Name::from_compact(
            given.map(strip_braces),
            abbreviated.map(strip_braces),
            prefix.map(strip_braces),
            family,
            suffix.map(strip_braces),
        )
    }
}

fn strip_braces(part: CompactString) -> CompactString {
    if let Cow::Owned(stripped) = strip_protective_braces(&part) {
        return CompactString::from(stripped);
    }
    part
}

fn non_empty(range: Range<usize>) -> Option<Range<usize>> {
    if range.is_empty() {
        None
    } else {
        Some(range)
    }
}
