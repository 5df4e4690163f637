//! One-call conversions from the text of an author or editor field to a
//! rendered string, going through the shared parse cache.
//!
//! ```
//! use bibtex_names::format;
//!
//! assert_eq!("Smith and Jones", format::natbib("John Smith and Jones, Bob", false));
//! assert_eq!("Böhm and Jones", format::natbib(r#"Corrado B{\"o}hm and Jones, Bob"#, true));
//! ```

use super::NameList;
use std::sync::Arc;

fn parsed(text: &str, latex_free: bool) -> Arc<NameList> {
    let list = NameList::parse(text);
    if latex_free {
        list.latex_free()
    } else {
        list
    }
}

pub fn natbib(text: &str, latex_free: bool) -> String {
    parsed(text, latex_free).as_natbib()
}

pub fn last_names(text: &str, latex_free: bool, oxford_comma: bool) -> String {
    parsed(text, latex_free).as_last_names(oxford_comma)
}

pub fn last_first(text: &str, latex_free: bool, abbreviate: bool, oxford_comma: bool) -> String {
    parsed(text, latex_free).as_last_first_names(abbreviate, oxford_comma)
}

/// Normalize a field to "von Last, Jr, First and ..." form.
pub fn last_first_with_and(text: &str, latex_free: bool, abbreviate: bool) -> String {
    parsed(text, latex_free).as_last_first_names_with_and(abbreviate)
}

pub fn first_last(text: &str, latex_free: bool, abbreviate: bool, oxford_comma: bool) -> String {
    parsed(text, latex_free).as_first_last_names(abbreviate, oxford_comma)
}

pub fn first_last_with_and(text: &str, latex_free: bool) -> String {
    parsed(text, latex_free).as_first_last_names_with_and()
}

pub fn for_alphabetization(text: &str, latex_free: bool) -> String {
    parsed(text, latex_free).for_alphabetization()
}
