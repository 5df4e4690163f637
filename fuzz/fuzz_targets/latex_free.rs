#![no_main]
use bibtex_names::NameList;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &str| {
    let plain = NameList::parse(data).latex_free();
    assert!(Arc::ptr_eq(&plain, &plain.latex_free()));
    assert_eq!(plain.len(), NameList::parse(data).len());
});
