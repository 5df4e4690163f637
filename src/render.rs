use super::{Name, NameList};

/// The ways a name list can be rendered. See the `NameList::as_*` methods
/// for what each produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `Smith`, `Smith and Jones`, `Smith et al.`
    Natbib,
    /// `von Neumann, Smith and Black Brown`
    LastNames,
    /// `von Neumann, John, Smith, John and Black Brown, Peter`
    LastFirst,
    /// `von Neumann, John and Smith, John and Black Brown, Peter`
    LastFirstWithAnd,
    /// `John von Neumann, John Smith and Peter Black Brown`
    FirstLast,
    /// `John von Neumann and John Smith and Peter Black Brown`
    FirstLastWithAnd,
    /// `Neumann, J. and Smith, J. and Black Brown, P.`
    Alphabetization,
    /// `von Neumann, John and John Smith and Peter Black Brown`
    LastFirstFirstLast,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Natbib,
        Style::LastNames,
        Style::LastFirst,
        Style::LastFirstWithAnd,
        Style::FirstLast,
        Style::FirstLastWithAnd,
        Style::Alphabetization,
        Style::LastFirstFirstLast,
    ];
}

/// Options shared by the styles that support them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Use abbreviated given names (`J. P.` for `John Peter`).
    pub abbreviate: bool,
    /// Put a comma before the final "and" of lists of three or more.
    pub oxford_comma: bool,
}

impl NameList {
    /// Render in one of the supported styles.
    ///
    /// ```
    /// use bibtex_names::{FormatOptions, NameList, Style};
    ///
    /// let authors = NameList::parse("John von Neumann and John Smith and Black Brown, Peter");
    /// let options = FormatOptions { abbreviate: true, oxford_comma: true };
    /// assert_eq!(
    ///     "von Neumann, J., Smith, J., and Black Brown, P.",
    ///     authors.render(Style::LastFirst, options)
    /// );
    /// ```
    pub fn render(&self, style: Style, options: FormatOptions) -> String {
        let FormatOptions {
            abbreviate,
            oxford_comma,
        } = options;

        match style {
            Style::Natbib => self.as_natbib(),
            Style::LastNames => self.as_last_names(oxford_comma),
            Style::LastFirst => self.as_last_first_names(abbreviate, oxford_comma),
            Style::LastFirstWithAnd => self.as_last_first_names_with_and(abbreviate),
            Style::FirstLast => self.as_first_last_names(abbreviate, oxford_comma),
            Style::FirstLastWithAnd => self.as_first_last_names_with_and(),
            Style::Alphabetization => self.for_alphabetization(),
            Style::LastFirstFirstLast => self.as_last_first_first_last_names_with_and(abbreviate),
        }
    }

    /// The in-text citation form used by natbib: one name gives `Smith`,
    /// two give `Smith and Jones`, more give `Smith et al.`. Prefixes are
    /// kept, given names and suffixes are not.
    pub fn as_natbib(&self) -> String {
        match self.names() {
            [] => String::new(),
            [only] => only.name_prefix_and_family_name().into_owned(),
            [first, second] => format!(
                "{} and {}",
                first.name_prefix_and_family_name(),
                second.name_prefix_and_family_name()
            ),
            [first, ..] => format!("{} et al.", first.name_prefix_and_family_name()),
        }
    }

    /// Prefixes and family names only: `von Neumann, Smith and Black Brown`.
    pub fn as_last_names(&self, oxford_comma: bool) -> String {
        join_with_commas(
            self.iter().map(Name::name_prefix_and_family_name),
            self.len(),
            oxford_comma,
        )
    }

    /// "von Last, Jr, First" for every name, joined with commas and a final
    /// "and".
    pub fn as_last_first_names(&self, abbreviate: bool, oxford_comma: bool) -> String {
        join_with_commas(
            self.iter().map(|name| name.family_given(abbreviate)),
            self.len(),
            oxford_comma,
        )
    }

    /// "von Last, Jr, First" for every name, joined with " and " throughout,
    /// as in a BibTeX field.
    pub fn as_last_first_names_with_and(&self, abbreviate: bool) -> String {
        join_with_and(self.iter().map(|name| name.family_given(abbreviate)))
    }

    /// "First von Last, Jr" for every name, joined with commas and a final
    /// "and".
    pub fn as_first_last_names(&self, abbreviate: bool, oxford_comma: bool) -> String {
        join_with_commas(
            self.iter().map(|name| name.given_family(abbreviate)),
            self.len(),
            oxford_comma,
        )
    }

    /// "First von Last, Jr" for every name, unabbreviated, joined with
    /// " and ".
    pub fn as_first_last_names_with_and(&self) -> String {
        join_with_and(self.iter().map(|name| name.given_family(false)))
    }

    /// Sort keys, "Last, Jr, F.", joined with " and ".
    pub fn for_alphabetization(&self) -> String {
        join_with_and(self.iter().map(Name::name_for_alphabetization))
    }

    /// The first name as "von Last, Jr, First" and the rest as
    /// "First von Last, Jr", joined with " and ".
    pub fn as_last_first_first_last_names_with_and(&self, abbreviate: bool) -> String {
        join_with_and(self.iter().enumerate().map(|(i, name)| {
            if i == 0 {
                name.family_given(abbreviate)
            } else {
                name.given_family(abbreviate)
            }
        }))
    }
}

fn join_with_commas<I, S>(items: I, count: usize, oxford_comma: bool) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, item) in items.enumerate() {
        result.push_str(item.as_ref());
        if i + 2 < count {
            result.push_str(", ");
        } else if i + 2 == count {
            if oxford_comma && count > 2 {
                result.push(',');
            }
            result.push_str(" and ");
        }
    }
    result
}

fn join_with_and<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, item) in items.enumerate() {
        if i > 0 {
            result.push_str(" and ");
        }
        result.push_str(item.as_ref());
    }
    result
}
