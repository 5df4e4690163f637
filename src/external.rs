//! A C API for interacting with `NameList` objects.
//!
//! Lists are handed out as owned pointers from `bibtex_names_parse` or
//! `bibtex_names_latex_free` and must be released with
//! `bibtex_names_free_list`. Returned strings must be released with
//! `bibtex_names_free_string`. Functions return null where the Rust API
//! would return `None` or an error.

extern crate libc;

use self::libc::c_char;
use super::{FormatOptions, NameList, Style};
use std::ffi::{CStr, CString};
use std::mem::{self, ManuallyDrop};
use std::ptr;
use std::sync::Arc;

macro_rules! str_to_char_star {
    ($str:expr) => {
        match CString::new($str) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        }
    };
}

macro_rules! option_str_to_char_star {
    ($opt:expr) => {
        match $opt {
            Some(string) => str_to_char_star!(string),
            None => ptr::null_mut(),
        }
    };
}

// Borrow the list behind a pointer from `Arc::into_raw` without taking
// ownership of the caller's reference.
unsafe fn borrow_list(list: *const NameList) -> ManuallyDrop<Arc<NameList>> {
    ManuallyDrop::new(Arc::from_raw(list))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_parse(input: *const c_char) -> *const NameList {
    if input.is_null() {
        return ptr::null();
    }
    let s = CStr::from_ptr(input).to_string_lossy();
    Arc::into_raw(NameList::parse(&s))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_free_list(list: *const NameList) {
    if !list.is_null() {
        mem::drop(Arc::from_raw(list));
    }
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_len(list: &NameList) -> u32 {
    list.len() as u32
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_given_name(list: &NameList, index: u32) -> *mut c_char {
    option_str_to_char_star!(list.author(index as usize).ok().and_then(|n| n.given_name()))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_given_name_abbreviated(
    list: &NameList,
    index: u32,
) -> *mut c_char {
    option_str_to_char_star!(list
        .author(index as usize)
        .ok()
        .and_then(|n| n.given_name_abbreviated()))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_name_prefix(list: &NameList, index: u32) -> *mut c_char {
    option_str_to_char_star!(list.author(index as usize).ok().and_then(|n| n.name_prefix()))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_family_name(list: &NameList, index: u32) -> *mut c_char {
    option_str_to_char_star!(list.author(index as usize).ok().and_then(|n| n.family_name()))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_name_suffix(list: &NameList, index: u32) -> *mut c_char {
    option_str_to_char_star!(list.author(index as usize).ok().and_then(|n| n.name_suffix()))
}

#[no_mangle]
pub unsafe extern "C" fn bibtex_names_is_institution(list: &NameList, index: u32) -> bool {
    list.author(index as usize)
        .map(|n| n.is_institution())
        .unwrap_or(false)
}

/// Render with the style at `style` in declaration order of [`Style`]
/// (0 is natbib). Returns null for an unknown style.
#[no_mangle]
pub unsafe extern "C" fn bibtex_names_render(
    list: &NameList,
    style: u32,
    abbreviate: bool,
    oxford_comma: bool,
) -> *mut c_char {
    let style = match Style::ALL.get(style as usize) {
        Some(&style) => style,
        None => return ptr::null_mut(),
    };
    let options = FormatOptions {
        abbreviate,
        oxford_comma,
    };
    str_to_char_star!(list.render(style, options))
}

/// Returns a new reference, to be freed separately from `list`.
#[no_mangle]
pub unsafe extern "C" fn bibtex_names_latex_free(list: *const NameList) -> *const NameList {
    if list.is_null() {
        return ptr::null();
    }
    let list = borrow_list(list);
    Arc::into_raw(list.latex_free())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        unsafe {
            let input = CString::new(r#"Corrado B{\"o}hm and von Neumann, Jr, John"#).unwrap();
            let list = bibtex_names_parse(input.as_ptr());
            assert_eq!(2, bibtex_names_len(&*list));

            let family = bibtex_names_family_name(&*list, 1);
            assert_eq!("Neumann", CStr::from_ptr(family).to_str().unwrap());
            bibtex_names_free_string(family);

            assert!(bibtex_names_name_suffix(&*list, 0).is_null());
            assert!(bibtex_names_given_name(&*list, 2).is_null());

            let plain = bibtex_names_latex_free(list);
            let natbib = bibtex_names_render(&*plain, 0, false, false);
            assert_eq!("Böhm and von Neumann", CStr::from_ptr(natbib).to_str().unwrap());
            bibtex_names_free_string(natbib);

            assert!(bibtex_names_render(&*plain, 99, false, false).is_null());

            bibtex_names_free_list(plain);
            bibtex_names_free_list(list);
        }
    }

    #[test]
    fn null_input() {
        unsafe {
            assert!(bibtex_names_parse(ptr::null()).is_null());
            assert!(bibtex_names_latex_free(ptr::null()).is_null());
        }
    }
}
