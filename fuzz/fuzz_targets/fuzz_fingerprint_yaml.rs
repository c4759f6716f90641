#![no_main]

use fixture_builder::FingerprintMap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fingerprint state parsing - this should never panic
        if let Ok(map) = serde_yaml_ng::from_str::<FingerprintMap>(content) {
            let _ = map.diff(&FingerprintMap::new());
            let _ = serde_yaml_ng::to_string(&map);
        }
    }
});
