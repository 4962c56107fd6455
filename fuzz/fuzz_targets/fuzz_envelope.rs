#![no_main]
use jmendian::zlib::{self, Envelope};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(envelope) = Envelope::from_slice(data) else {
        return;
    };

    // Regions always cover the input exactly
    assert_eq!(envelope.body().len() + 6, data.len());

    let Ok(mut tiles) = envelope.inflate() else {
        return;
    };

    assert_eq!(jmendian::adler32(&tiles), envelope.checksum());
    if jmendian::swap_pairs_in_place(&mut tiles).is_ok() {
        let encoded = zlib::encode(&tiles).unwrap();
        assert_eq!(zlib::decode(&encoded).unwrap(), tiles);
    }
});
