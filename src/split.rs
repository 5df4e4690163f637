use super::scan::Scanner;
use smallvec::SmallVec;

/// Split a BibTeX name list into its individual names.
///
/// Names are separated by the word `and` (in any case) standing alone at the
/// top level, i.e. outside braces and delimited by whitespace or the ends of
/// the text. Segments are trimmed; empty ones are dropped.
pub fn split_names(text: &str) -> SmallVec<[&str; 4]> {
    let mut names = SmallVec::new();
    let mut segment_start = 0;
    let mut word_start = None;

    let mut end_word = |start: usize, end: usize, segment_start: &mut usize| {
        if text[start..end].eq_ignore_ascii_case("and") {
            push_trimmed(&mut names, &text[*segment_start..start]);
            *segment_start = end;
        }
    };

    for s in Scanner::new(text) {
        if s.is_top_level() && s.ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                end_word(start, s.offset, &mut segment_start);
            }
        } else if word_start.is_none() {
            word_start = Some(s.offset);
        }
    }
    if let Some(start) = word_start {
        end_word(start, text.len(), &mut segment_start);
    }

    push_trimmed(&mut names, &text[segment_start..]);
    names
}

fn push_trimmed<'a>(names: &mut SmallVec<[&'a str; 4]>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        names.push(segment);
    }
}
