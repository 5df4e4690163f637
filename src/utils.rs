use super::scan::Scanner;
use std::borrow::Cow;

/// Do braces in `s` pair up, never closing a group that was not opened?
/// Escaped braces (`\{`, `\}`) are literal characters and don't count.
pub fn has_balanced_braces(s: &str) -> bool {
    let mut depth: usize = 0;
    let mut escaped = false;

    for c in s.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }

    depth == 0
}

/// Remove braces that only protect a whole word, or the whole part, from
/// BibTeX's case changes: `{van den Bergen}` becomes `van den Bergen` and
/// `{Vall{\'e}e}` becomes `Vall{\'e}e`, while `{A}bbb{c}` is untouched.
pub fn strip_protective_braces(part: &str) -> Cow<'_, str> {
    if !part.contains('{') {
        return Cow::Borrowed(part);
    }

    let words = part.split(' ').map(unwrap_group).collect::<Vec<_>>().join(" ");
    let whole = unwrap_group(&words);
    if whole.len() == words.len() {
        Cow::Owned(words)
    } else {
        Cow::Owned(whole.to_owned())
    }
}

/// Remove the braces of groups that open the text, each together with its
/// matching close: `{IEEE}, J.` becomes `IEEE, J.` and `{A}bbb{c}` becomes
/// `Abbb{c}`. A leading brace that is never closed stays.
pub fn unwrap_leading_groups(text: &str) -> Cow<'_, str> {
    let mut result = Cow::Borrowed(text);
    while result.starts_with('{') {
        let close = Scanner::new(&result)
            .skip(1)
            .find(|s| s.ch == '}' && s.is_top_level())
            .map(|s| s.offset);
        match close {
            Some(close) => {
                let unwrapped = format!("{}{}", &result[1..close], &result[close + 1..]);
                result = Cow::Owned(unwrapped);
            }
            None => break,
        }
    }
    result
}

fn unwrap_group(word: &str) -> &str {
    if word.len() > 2 && word.starts_with('{') && word.ends_with('}') {
        let inner = &word[1..word.len() - 1];
        if has_balanced_braces(inner) {
            return inner;
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced() {
        assert!(has_balanced_braces(""));
        assert!(has_balanced_braces(r"Vall{\'e}e"));
        assert!(has_balanced_braces(r"a\}"));
        assert!(!has_balanced_braces("A}bbb{c"));
        assert!(!has_balanced_braces("{a"));
    }

    #[test]
    fn strips_whole_part() {
        assert_eq!("van den Bergen", strip_protective_braces("{van den Bergen}"));
        assert_eq!("Tse-tung", strip_protective_braces("{Tse-tung}"));
    }

    #[test]
    fn strips_whole_words() {
        assert_eq!(r"Vall{\'e}e", strip_protective_braces(r"{Vall{\'e}e}"));
        assert_eq!("Jean Paul", strip_protective_braces("{Jean} {Paul}"));
    }

    #[test]
    fn keeps_partial_braces() {
        assert_eq!("{A}bbb{c}", strip_protective_braces("{A}bbb{c}"));
        assert_eq!("{Tse-tung}.", strip_protective_braces("{Tse-tung}."));
        assert_eq!("El-{M}allah", strip_protective_braces("El-{M}allah"));
        assert_eq!("{}", strip_protective_braces("{}"));
    }

    #[test]
    fn unwraps_leading_groups_with_their_close() {
        assert_eq!("IEEE, J.", unwrap_leading_groups("{IEEE}, J."));
        assert_eq!("Abbb{c}", unwrap_leading_groups("{A}bbb{c}"));
        assert_eq!("Vall{e}e", unwrap_leading_groups("{{Vall}{e}e}"));
        assert_eq!("{Smith", unwrap_leading_groups("{Smith"));
        assert!(matches!(unwrap_leading_groups("Smith"), Cow::Borrowed("Smith")));
    }

    #[test]
    fn borrows_without_braces() {
        assert!(matches!(strip_protective_braces("John"), Cow::Borrowed("John")));
    }
}
