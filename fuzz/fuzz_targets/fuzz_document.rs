#![no_main]
use jmendian::document::convert_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok((converted, summary)) = convert_slice(data) else {
        return;
    };

    // Converting twice restores the original tile data
    let (_, again) = convert_slice(&converted).unwrap();
    assert_eq!(summary, again);
});
