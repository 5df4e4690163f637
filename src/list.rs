use super::cache;
use super::error::{Error, Result};
use super::parse::parse_name;
use super::split::split_names;
use super::Name;
use once_cell::sync::OnceCell;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::sync::Arc;

/// The ordered names of a BibTeX `author` or `editor` field.
///
/// Lists are immutable once built and are shared behind [`Arc`]s: see
/// [`NameList::parse`].
pub struct NameList {
    names: Vec<Name>,
    latex_free: OnceCell<Arc<NameList>>,
    is_latex_free: bool,
}

impl NameList {
    /// Parse a name list.
    ///
    /// While a list returned from here is alive, parsing the exact same text
    /// again returns that same list rather than a new one.
    ///
    /// ```
    /// use bibtex_names::NameList;
    /// use std::sync::Arc;
    ///
    /// let a = NameList::parse("John Smith and Black Brown, Peter");
    /// let b = NameList::parse("John Smith and Black Brown, Peter");
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert_eq!(2, a.len());
    /// assert_eq!(Some("Peter"), a.author(1).unwrap().given_name());
    /// ```
    pub fn parse(text: &str) -> Arc<NameList> {
        cache::global().parse(text)
    }

    pub(crate) fn parse_uncached(text: &str) -> NameList {
        split_names(text).into_iter().map(parse_name).collect()
    }

    fn from_names(names: Vec<Name>, is_latex_free: bool) -> NameList {
        NameList {
            names,
            latex_free: OnceCell::new(),
            is_latex_free,
        }
    }

    /// Build a list from names constructed directly.
    pub fn of<I>(names: I) -> Arc<NameList>
    where
        I: IntoIterator<Item = Name>,
    {
        Arc::new(names.into_iter().collect())
    }

    pub fn empty() -> Arc<NameList> {
        NameList::of(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn iter(&self) -> slice::Iter<'_, Name> {
        self.names.iter()
    }

    /// The name at `index`, or [`Error::IndexOutOfRange`].
    pub fn author(&self, index: usize) -> Result<&Name> {
        self.names.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.names.len(),
        })
    }

    /// This list with LaTeX markup in every name converted to Unicode.
    ///
    /// Computed once per list; later calls return the same list, and calling
    /// this on the result returns the result itself.
    ///
    /// ```
    /// use bibtex_names::NameList;
    /// use std::sync::Arc;
    ///
    /// let authors = NameList::parse(r#"Corrado B{\"o}hm and Kurt G{\"{o}}del"#);
    /// let plain = authors.latex_free();
    /// assert_eq!("Böhm and Gödel", plain.as_natbib());
    /// assert!(Arc::ptr_eq(&plain, &authors.latex_free()));
    /// assert!(Arc::ptr_eq(&plain, &plain.latex_free()));
    /// ```
    pub fn latex_free(self: &Arc<Self>) -> Arc<NameList> {
        if self.is_latex_free {
            return Arc::clone(self);
        }

        let converted = self.latex_free.get_or_init(|| {
            let names = self.names.iter().map(Name::latex_free).collect();
            Arc::new(NameList::from_names(names, true))
        });
        Arc::clone(converted)
    }
}

impl FromIterator<Name> for NameList {
    fn from_iter<I: IntoIterator<Item = Name>>(names: I) -> NameList {
        NameList::from_names(names.into_iter().collect(), false)
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a Name;
    type IntoIter = slice::Iter<'a, Name>;

    fn into_iter(self) -> slice::Iter<'a, Name> {
        self.names.iter()
    }
}

impl fmt::Debug for NameList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.names).finish()
    }
}
