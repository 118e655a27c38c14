#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(schema) = serde_json::from_slice::<serde_json::Value>(data) {
        if schema.is_object() {
            let _ = schemadoc::Document::from_value(schema);
        }
    }
});
