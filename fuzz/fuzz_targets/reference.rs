#![no_main]
use libfuzzer_sys::fuzz_target;
use schemadoc_referencing::Reference;

fuzz_target!(|data: (&str, &str)| {
    let (parent, child) = data;
    if let (Ok(parsed), Ok(child)) = (Reference::parse(parent), Reference::parse(child)) {
        assert_eq!(parsed.to_string(), parent);
        let _ = parsed.inherits(&child);
        let _ = child.canonical().to_string();
    }
});
