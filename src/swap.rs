use crate::errors::{Error, ErrorKind};

/// Reverses the byte order of every two byte tile code in place
///
/// ```
/// let mut data = [0x01, 0x02, 0x03, 0x04];
/// jmendian::swap_pairs_in_place(&mut data).unwrap();
/// assert_eq!(data, [0x02, 0x01, 0x04, 0x03]);
/// ```
pub fn swap_pairs_in_place(data: &mut [u8]) -> Result<(), Error> {
    if data.len() % 2 != 0 {
        return Err(ErrorKind::InvalidPayloadLength { len: data.len() }.into());
    }

    for pair in data.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }

    Ok(())
}

/// Returns a copy of the data with every two byte tile code reversed
pub fn swap_pairs(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = data.to_vec();
    swap_pairs_in_place(&mut out)?;
    Ok(out)
}
