use super::namepart::{NamePart, Terminator};
use std::ops::Range;

/// Word ranges of the given name, prefix and family name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Boundaries {
    pub given: Option<Range<usize>>,
    pub prefix: Option<Range<usize>>,
    pub family: Option<Range<usize>>,
}

/// Find the parts of a name written without commas, "First von Last".
///
/// The first particle starts the prefix and the first capitalized word after
/// it starts the family name. Without a particle the family name is the last
/// word, together with anything hyphenated to it.
pub fn first_von_last(words: &[NamePart]) -> Boundaries {
    let len = words.len();
    if len == 0 {
        return Boundaries::default();
    }

    let prefix_start = (0..len).find(|&i| NamePart::is_particle(words, i));

    let (prefix, family_start) = match prefix_start {
        None => (None, compound_start(words, len - 1)),
        Some(start) => {
            let family_start = (start + 1..len)
                .find(|&i| words[i].capitalized)
                // The family name always gets at least the last word
                .unwrap_or_else(|| compound_start(words, len - 1).max(start));
            (non_empty(start..family_start), family_start)
        }
    };

    let given_end = prefix_start.unwrap_or(family_start);
    Boundaries {
        given: non_empty(0..given_end),
        prefix,
        family: non_empty(family_start..len),
    }
}

/// Find the prefix and family name in the "von Last" segment of a name
/// written with commas. A prefix only exists when the segment starts with a
/// particle, and ends with the last particle that still leaves a word for
/// the family name.
pub fn von_last(words: &[NamePart]) -> Boundaries {
    let len = words.len();
    if len == 0 {
        return Boundaries::default();
    }

    let prefix_end = if NamePart::is_particle(words, 0) {
        (0..len - 1)
            .rev()
            .find(|&i| NamePart::is_particle(words, i))
            .map_or(0, |i| i + 1)
    } else {
        0
    };

    Boundaries {
        given: None,
        prefix: non_empty(0..prefix_end),
        family: non_empty(prefix_end..len),
    }
}

// Walk back over words joined to `last` by hyphens, as in `Bailey-Jones`.
fn compound_start(words: &[NamePart], last: usize) -> usize {
    let mut start = last;
    while start > 0 && words[start - 1].terminator == Terminator::Hyphen {
        start -= 1;
    }
    start
}

fn non_empty(range: Range<usize>) -> Option<Range<usize>> {
    if range.is_empty() {
        None
    } else {
        Some(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        let (parts, _) = NamePart::all_from_text(text);
        parts.iter().map(|p| p.word.to_string()).collect()
    }

    fn split(text: &str, f: fn(&[NamePart]) -> Boundaries) -> (String, String, String) {
        let (parts, _) = NamePart::all_from_text(text);
        let b = f(&parts);
        let text_of = |r: Option<Range<usize>>| {
            r.map(|r| parts[r].iter().map(|p| p.word).collect::<Vec<_>>().join(" "))
                .unwrap_or_default()
        };
        (text_of(b.given), text_of(b.prefix), text_of(b.family))
    }

    fn s(given: &str, prefix: &str, family: &str) -> (String, String, String) {
        (given.to_string(), prefix.to_string(), family.to_string())
    }

    #[test]
    fn no_particle() {
        assert_eq!(s("John", "", "Smith"), split("John Smith", first_von_last));
        assert_eq!(s("Peter Black", "", "Brown"), split("Peter Black Brown", first_von_last));
        assert_eq!(s("", "", "Smith"), split("Smith", first_von_last));
    }

    #[test]
    fn particle() {
        assert_eq!(s("John", "von", "Neumann"), split("John von Neumann", first_von_last));
        assert_eq!(s("", "von", "Neumann"), split("von Neumann", first_von_last));
        assert_eq!(
            s("Ludwig", "van der", "Rohe"),
            split("Ludwig van der Rohe", first_von_last)
        );
        assert_eq!(
            s("Jean", "de la", "Fontaine du Bois"),
            split("Jean de la Fontaine du Bois", first_von_last)
        );
    }

    #[test]
    fn particles_to_the_end_leave_a_family_name() {
        assert_eq!(s("John", "", "von"), split("John von", first_von_last));
        assert_eq!(s("", "de la", "fontaine"), split("de la fontaine", first_von_last));
    }

    #[test]
    fn hyphenated_family_name() {
        assert_eq!(
            s("Firstname", "", "Bailey Jones"),
            split("Firstname Bailey-Jones", first_von_last)
        );
        assert_eq!(
            s("Mu{\\d{h}}ammad", "", "al Khw{\\={a}}rizm{\\={i}}"),
            split("Mu{\\d{h}}ammad al-Khw{\\={a}}rizm{\\={i}}", first_von_last)
        );
    }

    #[test]
    fn hyphenated_given_name() {
        assert_eq!(s("Tse tung", "", "Mao"), split("Tse-tung Mao", first_von_last));
    }

    #[test]
    fn comma_segment() {
        assert_eq!(s("", "", "Smith"), split("Smith", von_last));
        assert_eq!(s("", "von", "Neumann"), split("von Neumann", von_last));
        assert_eq!(s("", "de", "Black Brown"), split("de Black Brown", von_last));
        assert_eq!(s("", "", "Canon der Barbar"), split("Canon der Barbar", von_last));
        assert_eq!(s("", "van der", "Heide"), split("van der Heide", von_last));
        assert_eq!(s("", "", "von"), split("von", von_last));
        assert_eq!(s("", "", "al Ṣāliḥ"), split("al-Ṣāliḥ", von_last));
    }

    #[test]
    fn words_of_braced_group() {
        assert_eq!(vec!["{van den Bergen}"], words("{van den Bergen}"));
    }
}
