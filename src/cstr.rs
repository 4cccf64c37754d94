use core::ffi::CStr;
use heapless::Vec;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    BufferOverflow,
    InteriorNul,
}

/// Copies a configuration value into `buffer` as a NUL-terminated string,
/// for C-side Wi-Fi and TLS calls that take an SSID, password or server name.
///
/// Fails when the value plus terminator does not fit, or when the value
/// itself contains a NUL byte.
pub fn write_c_str<'buf>(s: &str, buffer: &'buf mut [u8]) -> Result<&'buf CStr, Error> {
    let bytes = s.as_bytes();
    let len = bytes.len();

    if len + 1 > buffer.len() {
        return Err(Error::BufferOverflow);
    }

    buffer[..len].copy_from_slice(bytes);
    buffer[len] = 0;

    CStr::from_bytes_with_nul(&buffer[..=len]).map_err(|_| Error::InteriorNul)
}

/// Owned variant of [`write_c_str`] for values that outlive the caller's stack buffer.
pub fn c_str_vec<const N: usize>(s: &str) -> Result<Vec<u8, N>, Error> {
    if s.as_bytes().contains(&0) {
        return Err(Error::InteriorNul);
    }

    let mut buf: Vec<u8, N> = Vec::new();
    buf.extend_from_slice(s.as_bytes())
        .map_err(|_| Error::BufferOverflow)?;
    buf.push(0).map_err(|_| Error::BufferOverflow)?;

    Ok(buf)
}
