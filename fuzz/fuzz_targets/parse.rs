#![no_main]
use bibtex_names::{FormatOptions, NameList, Style};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, bool, bool)| {
    let (text, abbreviate, oxford_comma) = data;
    let list = NameList::parse(text);
    let options = FormatOptions {
        abbreviate,
        oxford_comma,
    };
    for style in Style::ALL {
        list.render(style, options);
    }
});
