//! Fuzz target for color parsing.
//!
//! `Rgba::from_hex` and `str::parse::<Rgba>` must never panic, and every
//! accepted color must print back to a string that parses to the same bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtext::Rgba;

fuzz_target!(|data: &str| {
    let _ = Rgba::from_hex(data);

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    // Substrings on char boundaries only
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }

    if let Ok(color) = data.parse::<Rgba>() {
        let reparsed: Rgba = color
            .to_string()
            .parse()
            .expect("displayed color parses");
        assert_eq!(reparsed.to_rgba_u8(), color.to_rgba_u8());
    }
});
