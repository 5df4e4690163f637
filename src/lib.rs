//! A library for parsing and formatting the author and editor fields of
//! BibTeX entries.
//!
//! A field like `John von Neumann and Smith, John and {IEEE}` is split into
//! its names, each name is split into given name, prefix ("von" part),
//! family name and suffix ("Jr" part) following BibTeX's rules, and the list
//! can then be rendered in the forms citation styles need.
//!
//! ```
//! use bibtex_names::NameList;
//!
//! let authors = NameList::parse("John von Neumann and Smith, John and Black Brown, Peter");
//! assert_eq!(3, authors.len());
//! assert_eq!("von Neumann et al.", authors.as_natbib());
//! assert_eq!(
//!     "von Neumann, J., Smith, J. and Black Brown, P.",
//!     authors.as_last_first_names(true, false)
//! );
//! ```
//!
//! Parsed lists are shared: parsing the same text again while an earlier
//! result is still alive returns that same list.

mod cache;
mod eq_hash;
mod error;
mod features;
pub mod format;
mod initials;
mod latex;
mod list;
mod namepart;
mod parse;
mod render;
mod scan;
mod split;
mod surname;
mod utils;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

use compact_str::CompactString;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub use cache::ParseCache;
pub use error::{Error, Result};
pub use latex::latex_to_unicode;
pub use list::NameList;
pub use render::{FormatOptions, Style};

/// Parse a BibTeX name list through the process-wide cache.
///
/// Shorthand for [`NameList::parse`].
pub fn parse(text: &str) -> Arc<NameList> {
    NameList::parse(text)
}

/// One person or institution from a BibTeX name list.
///
/// A personal name has up to four parts, any of which may be absent: given
/// name ("First"), prefix ("von"), family name ("Last") and suffix ("Jr").
/// An institution, written as a single brace group like `{IEEE}`, is kept as
/// a family name holding the literal text and renders unchanged.
#[derive(Clone, Debug, Default)]
pub struct Name {
    given_name: Option<CompactString>,
    given_name_abbreviated: Option<CompactString>,
    name_prefix: Option<CompactString>,
    family_name: Option<CompactString>,
    name_suffix: Option<CompactString>,
    institution: bool,
}

impl Name {
    /// Build a name from explicit parts, stored as given. Blank parts are
    /// treated as absent.
    ///
    /// ```
    /// use bibtex_names::Name;
    ///
    /// let name = Name::new(Some("John"), Some("J."), Some("von"), Some("Neumann"), None);
    /// assert_eq!("J. von Neumann", name.given_family(true));
    /// ```
    pub fn new(
        given_name: Option<&str>,
        given_name_abbreviated: Option<&str>,
        name_prefix: Option<&str>,
        family_name: Option<&str>,
        name_suffix: Option<&str>,
    ) -> Name {
        let family_name = present(family_name);
        let institution = present(given_name).is_none()
            && present(given_name_abbreviated).is_none()
            && present(name_prefix).is_none()
            && present(name_suffix).is_none()
            && family_name.as_deref().map_or(false, scan::is_single_group);

        Name {
            given_name: present(given_name),
            given_name_abbreviated: present(given_name_abbreviated),
            name_prefix: present(name_prefix),
            family_name,
            name_suffix: present(name_suffix),
            institution,
        }
    }

    /// Build a name from explicit parts, deriving the abbreviated given name.
    ///
    /// ```
    /// use bibtex_names::Name;
    ///
    /// let name = Name::from_parts(Some("Tse-tung"), None, Some("Mao"), None);
    /// assert_eq!(Some("T.-t."), name.given_name_abbreviated());
    /// ```
    pub fn from_parts(
        given_name: Option<&str>,
        name_prefix: Option<&str>,
        family_name: Option<&str>,
        name_suffix: Option<&str>,
    ) -> Name {
        let abbreviated = given_name.and_then(initials::abbreviate);
        Name::new(
            given_name,
            abbreviated.as_deref(),
            name_prefix,
            family_name,
            name_suffix,
        )
    }

    /// Parse a single name, without looking for `and` separators.
    ///
    /// ```
    /// use bibtex_names::Name;
    ///
    /// let name = Name::parse("von Neumann, Jr, John");
    /// assert_eq!(Some("John"), name.given_name());
    /// assert_eq!(Some("von"), name.name_prefix());
    /// assert_eq!(Some("Neumann"), name.family_name());
    /// assert_eq!(Some("Jr"), name.name_suffix());
    /// ```
    pub fn parse(text: &str) -> Name {
        parse::parse_name(text)
    }

    pub(crate) fn from_compact(
        given_name: Option<CompactString>,
        given_name_abbreviated: Option<CompactString>,
        name_prefix: Option<CompactString>,
        family_name: Option<CompactString>,
        name_suffix: Option<CompactString>,
    ) -> Name {
        Name {
            given_name,
            given_name_abbreviated,
            name_prefix,
            family_name,
            name_suffix,
            institution: false,
        }
    }

    pub(crate) fn institution(literal: &str) -> Name {
        Name {
            family_name: Some(CompactString::new(literal)),
            institution: true,
            ..Name::default()
        }
    }

    #[inline]
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    #[inline]
    pub fn given_name_abbreviated(&self) -> Option<&str> {
        self.given_name_abbreviated.as_deref()
    }

    #[inline]
    pub fn name_prefix(&self) -> Option<&str> {
        self.name_prefix.as_deref()
    }

    #[inline]
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    #[inline]
    pub fn name_suffix(&self) -> Option<&str> {
        self.name_suffix.as_deref()
    }

    /// Was this name written as a single brace group, like `{IEEE}`?
    #[inline]
    pub fn is_institution(&self) -> bool {
        self.institution
    }

    /// True when every part is absent.
    pub fn is_empty(&self) -> bool {
        self.given_name.is_none()
            && self.given_name_abbreviated.is_none()
            && self.name_prefix.is_none()
            && self.family_name.is_none()
            && self.name_suffix.is_none()
    }

    fn given(&self, abbreviate: bool) -> Option<&str> {
        if abbreviate {
            self.given_name_abbreviated()
        } else {
            self.given_name()
        }
    }

    /// The prefix and family name, e.g. `von Neumann`.
    pub fn name_prefix_and_family_name(&self) -> Cow<'_, str> {
        match (self.name_prefix(), self.family_name()) {
            (None, None) => Cow::Borrowed(""),
            (None, Some(family)) => Cow::Borrowed(family),
            (Some(prefix), None) => Cow::Borrowed(prefix),
            (Some(prefix), Some(family)) => Cow::Owned(format!("{} {}", prefix, family)),
        }
    }

    /// "First von Last, Jr", e.g. `John von Neumann, Jr` or, abbreviated,
    /// `J. von Neumann, Jr`.
    pub fn given_family(&self, abbreviate: bool) -> String {
        let rest = self.name_prefix_and_family_name();
        let mut result = String::with_capacity(32);

        if let Some(given) = self.given(abbreviate) {
            result.push_str(given);
            if !rest.is_empty() {
                result.push(' ');
            }
        }
        result.push_str(&rest);
        if let Some(suffix) = self.name_suffix() {
            result.push_str(", ");
            result.push_str(suffix);
        }

        result
    }

    /// "von Last, Jr, First", e.g. `von Neumann, Jr, John` or, abbreviated,
    /// `von Neumann, Jr, J.`.
    pub fn family_given(&self, abbreviate: bool) -> String {
        let mut result = self.name_prefix_and_family_name().into_owned();
        for part in [self.name_suffix(), self.given(abbreviate)].into_iter().flatten() {
            push_comma_separated(&mut result, part);
        }
        result
    }

    /// The sort form "Last, Jr, F.", without the prefix: `Neumann, Jr, J.`
    /// for `John von Neumann, Jr`. Institutions give their literal text.
    pub fn name_for_alphabetization(&self) -> String {
        if self.institution {
            return self.family_name().unwrap_or_default().to_string();
        }

        let mut result = self.family_name().unwrap_or_default().to_string();
        for part in [self.name_suffix(), self.given_name_abbreviated()].into_iter().flatten() {
            push_comma_separated(&mut result, part);
        }

        match utils::unwrap_leading_groups(&result) {
            Cow::Borrowed(_) => result,
            Cow::Owned(unwrapped) => unwrapped,
        }
    }

    /// A copy with LaTeX markup in every part converted to Unicode and braces
    /// removed.
    ///
    /// ```
    /// use bibtex_names::Name;
    ///
    /// let name = Name::parse(r#"Kurt G{\"{o}}del"#).latex_free();
    /// assert_eq!(Some("Gödel"), name.family_name());
    /// ```
    pub fn latex_free(&self) -> Name {
        let convert = |part: &Option<CompactString>| {
            part.as_deref()
                .map(|p| CompactString::from(latex::latex_to_unicode(p)))
        };

        Name {
            given_name: convert(&self.given_name),
            given_name_abbreviated: convert(&self.given_name_abbreviated),
            name_prefix: convert(&self.name_prefix),
            family_name: convert(&self.family_name),
            name_suffix: convert(&self.name_suffix),
            institution: self.institution,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.given_family(false))
    }
}

fn present(part: Option<&str>) -> Option<CompactString> {
    part.filter(|p| !p.trim().is_empty()).map(CompactString::new)
}

fn push_comma_separated(result: &mut String, part: &str) {
    if !result.is_empty() {
        result.push_str(", ");
    }
    result.push_str(part);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn von_neumann_jr() {
        let name = Name::parse("von Neumann, Jr, John");
        assert_eq!(Some("John"), name.given_name());
        assert_eq!(Some("J."), name.given_name_abbreviated());
        assert_eq!("John von Neumann, Jr", name.given_family(false));
        assert_eq!("J. von Neumann, Jr", name.given_family(true));
        assert_eq!("von Neumann, Jr, John", name.family_given(false));
        assert_eq!("von Neumann, Jr, J.", name.family_given(true));
        assert_eq!("von Neumann", name.name_prefix_and_family_name());
        assert_eq!("Neumann, Jr, J.", name.name_for_alphabetization());
    }

    #[test]
    fn given_family_without_given() {
        let name = Name::new(None, None, Some("von"), Some("Neumann"), None);
        assert_eq!("von Neumann", name.given_family(false));
        assert_eq!("von Neumann", name.family_given(true));
    }

    #[test]
    fn given_only() {
        let name = Name::new(Some("John"), Some("J."), None, None, None);
        assert_eq!("John", name.given_family(false));
        assert_eq!("J.", name.family_given(true));
        assert_eq!("", name.name_prefix_and_family_name());
    }

    #[test]
    fn missing_abbreviation_is_omitted() {
        let name = Name::new(Some("John"), None, None, Some("Smith"), None);
        assert_eq!("Smith", name.given_family(true));
        assert_eq!("Smith, John", name.family_given(false));
    }

    #[test]
    fn blank_parts_are_absent() {
        let name = Name::new(Some(" "), Some(""), None, Some("Smith"), None);
        assert_eq!(None, name.given_name());
        assert_eq!(None, name.given_name_abbreviated());
    }

    #[test]
    fn institution_from_parts() {
        let name = Name::new(None, None, None, Some("{JabRef Developers}"), None);
        assert!(name.is_institution());
        assert_eq!("{JabRef Developers}", name.name_for_alphabetization());
        assert_eq!("{JabRef Developers}", name.family_given(true));

        let person = Name::new(Some("Jo"), None, None, Some("{JabRef Developers}"), None);
        assert!(!person.is_institution());
    }

    #[test]
    fn alphabetization_drops_leading_braces() {
        let name = Name::new(None, None, None, Some("{A}bbb{c}"), None);
        assert_eq!("Abbb{c}", name.name_for_alphabetization());
    }

    #[test]
    fn alphabetization_keeps_braces_balanced() {
        let name = Name::parse("{IEEE},");
        assert!(!name.is_institution());
        assert_eq!("IEEE", name.name_for_alphabetization());

        let name = Name::parse("{IEEE}, John");
        assert_eq!("IEEE, J.", name.name_for_alphabetization());
    }

    #[test]
    fn derives_abbreviation() {
        let name = Name::from_parts(Some("John Peter"), None, Some("Smith"), None);
        assert_eq!(Some("J. P."), name.given_name_abbreviated());
        let family_only = Name::from_parts(None, None, Some("Smith"), None);
        assert_eq!(None, family_only.given_name_abbreviated());
    }

    #[test]
    fn empty() {
        assert!(Name::default().is_empty());
        assert_eq!("", Name::default().given_family(true));
        assert!(!Name::parse("Smith").is_empty());
    }

    #[test]
    fn latex_free_keeps_institution() {
        let name = Name::parse(r"{The Ban\={u} M\={u}s\={a} brothers}").latex_free();
        assert!(name.is_institution());
        assert_eq!(Some("The Banū Mūsā brothers"), name.family_name());
    }

    #[test]
    fn display() {
        assert_eq!("John von Neumann", Name::parse("von Neumann, John").to_string());
    }
}
