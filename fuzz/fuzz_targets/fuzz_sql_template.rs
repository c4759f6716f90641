#![no_main]

use fixture_builder::domain::value_objects::SqlTemplate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let (template, table) = input.split_once('\n').unwrap_or((input, "users"));
        if let Ok(template) = SqlTemplate::parse(template) {
            let rendered = template.render(table);
            assert!(rendered.contains(table));
        }
    }
});
