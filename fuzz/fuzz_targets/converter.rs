#![no_main]
use libfuzzer_sys::fuzz_target;
use xshorthand::{convert_str, AbbreviationTable, Options};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut abbreviations = AbbreviationTable::new();
        abbreviations.insert("a", "Alpha");
        let _ = convert_str(s, &Options::default(), &abbreviations);

        let options = Options::default()
            .with_indent_with_spaces(false)
            .with_one_attribute_per_line(true);
        let _ = convert_str(s, &options, &abbreviations);
    }
});
