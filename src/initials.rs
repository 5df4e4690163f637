use super::namepart::{join_initials, NamePart};
use compact_str::CompactString;

/// Abbreviate a given name to its initials, keeping the separators of the
/// source: `John Peter` becomes `J. P.` and `Tse-tung` becomes `T.-t.`.
///
/// The initial of a word keeps any leading brace group or accent command, so
/// `{\relax Ch}ristoph` abbreviates to `{\relax Ch}.`.
pub fn abbreviate(given: &str) -> Option<CompactString> {
    let (parts, _) = NamePart::all_from_text(given);
    join_initials(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbr(given: &str) -> String {
        abbreviate(given).map(|s| s.to_string()).unwrap_or_default()
    }

    #[test]
    fn words() {
        assert_eq!("J.", abbr("John"));
        assert_eq!("J. P.", abbr("John Peter"));
        assert_eq!("J. G.", abbr("Johann Gottfried"));
        assert_eq!("A. d. G.", abbr("Alexander der Große"));
    }

    #[test]
    fn already_abbreviated() {
        assert_eq!("J.", abbr("J."));
        assert_eq!("E. S.", abbr("E. S."));
        assert_eq!("A. H. G.", abbr("Alexander H. G."));
    }

    #[test]
    fn hyphens() {
        assert_eq!("T.-t.", abbr("Tse-tung"));
        assert_eq!("J.-P.", abbr("Jean-Paul"));
    }

    #[test]
    fn markup() {
        assert_eq!("{Tse-tung}.", abbr("{Tse-tung}"));
        assert_eq!(r"{\relax Ch}.", abbr(r"{\relax Ch}ristoph"));
        assert_eq!("H.", abbr("H{e}lene"));
        assert_eq!(r"\'E.", abbr(r"\'Emile"));
    }

    #[test]
    fn unicode() {
        assert_eq!("J. M.", abbr("José María"));
        assert_eq!("ʿ.", abbr("ʿAbdallāh"));
    }

    #[test]
    fn empty() {
        assert_eq!(None, abbreviate(""));
        assert_eq!(None, abbreviate("  "));
    }
}
