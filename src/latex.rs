//! Conversion of BibTeX/LaTeX markup in names to plain Unicode.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

static ACCENTS: phf::Map<&'static str, char> =
    include!(concat!(env!("OUT_DIR"), "/accents.rs"));

static SYMBOLS: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/symbols.rs"));

static TRANSPARENT_COMMANDS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/transparent_commands.rs"));

#[inline]
fn already_plain(text: &str) -> bool {
    !text.contains(&['\\', '{', '}'][..]) && is_nfc_quick(text.chars()) == IsNormalized::Yes
}

/// Convert LaTeX markup to Unicode and drop grouping braces.
///
/// Accent commands are composed with their argument (`\"o` and `{\"{o}}`
/// both become `ö`, `\d{h}` becomes `ḥ`), letter commands are replaced
/// (`\L{}` becomes `Ł`), formatting commands like `\textbf` keep only their
/// argument, and unknown commands are kept as written. The result is in
/// Unicode normalization form C.
///
/// ```
/// use bibtex_names::latex_to_unicode;
///
/// assert_eq!("al-Khwārizmī", latex_to_unicode(r"al-Khw{\={a}}rizm{\={i}}"));
/// assert_eq!("Łukasz Michał", latex_to_unicode(r"{{\L{}}ukasz Micha\l{}}"));
/// ```
pub fn latex_to_unicode(text: &str) -> Cow<'_, str> {
    if already_plain(text) {
        return Cow::Borrowed(text);
    }

    let mut converted = String::with_capacity(text.len());
    Converter::new(text).convert_into(&mut converted);
    Cow::Owned(converted.nfc().collect())
}

struct Converter<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Converter<'a> {
    fn new(text: &'a str) -> Converter<'a> {
        Converter {
            chars: text.chars().peekable(),
        }
    }

    fn convert_into(&mut self, out: &mut String) {
        while let Some(c) = self.chars.next() {
            match c {
                '{' | '}' => {}
                '\\' => self.command(out),
                _ => out.push(c),
            }
        }
    }

    fn command(&mut self, out: &mut String) {
        let name = self.command_name();
        if name.is_empty() {
            // A trailing backslash
            return;
        }
        let control_word = name.starts_with(|c: char| c.is_ascii_alphabetic());

        if let Some(&mark) = ACCENTS.get(name.as_str()) {
            let base = self.argument(control_word);
            push_accented(out, &base, mark);
        } else if let Some(symbol) = SYMBOLS.get(name.as_str()) {
            out.push_str(symbol);
            if control_word {
                self.skip_spaces();
            }
        } else if TRANSPARENT_COMMANDS.contains(name.as_str()) {
            if control_word {
                self.skip_spaces();
            }
        } else {
            out.push('\\');
            out.push_str(&name);
        }
    }

    // Either a run of ASCII letters or a single other character
    fn command_name(&mut self) -> String {
        let mut name = String::new();
        match self.chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {
                name.push(c);
                while let Some(&c) = self.chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    name.push(c);
                    self.chars.next();
                }
            }
            Some(c) => name.push(c),
            None => {}
        }
        name
    }

    fn skip_spaces(&mut self) {
        while self.chars.peek().map_or(false, |c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    /// The converted argument of an accent: a brace group, a command, or a
    /// single character.
    fn argument(&mut self, control_word: bool) -> String {
        if control_word {
            self.skip_spaces();
        }

        let mut argument = String::new();
        match self.chars.peek().copied() {
            Some('{') => {
                self.chars.next();
                let group = self.group();
                Converter::new(&group).convert_into(&mut argument);
            }
            Some('\\') => {
                self.chars.next();
                self.command(&mut argument);
            }
            Some(_) => argument.extend(self.chars.next()),
            None => {}
        }
        argument
    }

    // Raw text up to the brace closing the group just opened
    fn group(&mut self) -> String {
        let mut raw = String::new();
        let mut depth = 0usize;
        let mut escaped = false;

        for c in self.chars.by_ref() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '{' {
                depth += 1;
            } else if c == '}' {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            raw.push(c);
        }

        raw
    }
}

fn push_accented(out: &mut String, base: &str, mark: char) {
    let mut chars = base.chars();
    if let Some(first) = chars.next() {
        // Accents go on the dotted letter, so `\'\i` is `í`
        out.push(match first {
            'ı' => 'i',
            'ȷ' => 'j',
            c => c,
        });
        out.push(mark);
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(latex_to_unicode("Böhm"), Cow::Borrowed("Böhm")));
    }

    #[test]
    fn decomposed_text_is_composed() {
        assert_eq!("Böhm", latex_to_unicode("Bo\u{308}hm"));
    }

    #[test]
    fn accents() {
        assert_eq!("Böhm", latex_to_unicode(r#"B{\"o}hm"#));
        assert_eq!("Gödel", latex_to_unicode(r#"G{\"{o}}del"#));
        assert_eq!("Muḥammad", latex_to_unicode(r"Mu{\d{h}}ammad"));
        assert_eq!("Émile", latex_to_unicode(r"\'Emile"));
        assert_eq!("Dvořák", latex_to_unicode(r"Dvo\v{r}\'ak"));
        assert_eq!("Erdős", latex_to_unicode(r"Erd\H{o}s"));
        assert_eq!("François", latex_to_unicode(r"Fran\c cois"));
        assert_eq!("Banū Mūsā", latex_to_unicode(r"Ban\={u} M\={u}s\={a}"));
    }

    #[test]
    fn accent_on_dotless_i() {
        assert_eq!("Martí", latex_to_unicode(r"Mart\'{\i}"));
        assert_eq!("Martí", latex_to_unicode(r"Mart\'\i"));
    }

    #[test]
    fn letters() {
        assert_eq!("Łukasz Michał", latex_to_unicode(r"{{\L{}}ukasz Micha\l{}}"));
        assert_eq!("Ørsted", latex_to_unicode(r"{\O}rsted"));
        assert_eq!("Strauß", latex_to_unicode(r"Strau\ss"));
        assert_eq!("Ångström", latex_to_unicode(r#"\AA{}ngstr\"om"#));
    }

    #[test]
    fn control_words_swallow_following_spaces() {
        assert_eq!("Christoph", latex_to_unicode(r"{\relax Ch}ristoph"));
        assert_eq!("ßx", latex_to_unicode(r"\ss x"));
    }

    #[test]
    fn formatting_commands_keep_their_argument() {
        assert_eq!("IEEE", latex_to_unicode(r"\textbf{IEEE}"));
        assert_eq!("Smith", latex_to_unicode(r"\emph{Smith}"));
    }

    #[test]
    fn escaped_characters() {
        assert_eq!("Barnes & Noble", latex_to_unicode(r"{Barnes \& Noble}"));
        assert_eq!("{a}", latex_to_unicode(r"\{a\}"));
    }

    #[test]
    fn unknown_commands_are_kept() {
        assert_eq!(r"\foo bar", latex_to_unicode(r"\foo bar"));
    }

    #[test]
    fn braces_are_removed() {
        assert_eq!(
            "The Banū Mūsā brothers",
            latex_to_unicode(r"{The Ban\={u} M\={u}s\={a} brothers}")
        );
        assert_eq!("Abbbc", latex_to_unicode("{A}bbb{c}"));
    }

    #[test]
    fn trailing_backslash() {
        assert_eq!("ab", latex_to_unicode("ab\\"));
    }
}
