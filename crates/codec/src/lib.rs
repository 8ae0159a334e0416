//! Base64, hex and UTF-8 codecs for octetbuf.
//!
//! # Overview
//!
//! - [`to_base64`] / [`from_base64`] - RFC 4648 standard alphabet, `=` padding
//! - [`to_hex`] / [`from_hex`] - two lowercase digits per octet
//! - [`to_utf8`] / [`from_utf8`] - extended multi-byte scheme, code units up
//!   to `0x7FFF_FFFF` ([`read_code_unit`] / [`write_code_unit`] expose the
//!   code-unit layer)
//! - [`Encoding`] - case-insensitive encoding name resolution, plus the
//!   [`encode`] / [`decode`] dispatchers
//!
//! # Example
//!
//! ```
//! use octetbuf_codec::{decode, encode, Encoding};
//!
//! let bytes = decode("TWFu", Encoding::Base64).unwrap();
//! assert_eq!(bytes, b"Man");
//! assert_eq!(encode(&bytes, Encoding::Hex), "4d616e");
//! ```

mod constants;
mod encoding;
mod error;
mod from_base64;
mod from_hex;
mod from_utf8;
mod tables;
mod to_base64;
mod to_hex;
mod to_utf8;

pub use constants::{ALPHABET, PAD};
pub use encoding::Encoding;
pub use error::EncodingError;
pub use from_base64::from_base64;
pub use from_hex::from_hex;
pub use from_utf8::{from_utf8, write_code_unit};
pub use to_base64::to_base64;
pub use to_hex::to_hex;
pub use to_utf8::{read_code_unit, to_utf8};

/// Decodes text to bytes per the given encoding.
pub fn decode(text: &str, encoding: Encoding) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        Encoding::Utf8 => Ok(from_utf8(text)),
        Encoding::Hex => from_hex(text),
        Encoding::Base64 => from_base64(text),
    }
}

/// Encodes bytes to text per the given encoding.
pub fn encode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => to_utf8(bytes),
        Encoding::Hex => to_hex(bytes),
        Encoding::Base64 => to_base64(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_parsed_name() {
        let encoding = Encoding::parse("BASE64").unwrap();
        assert_eq!(encode(b"Man", encoding), "TWFu");
        assert_eq!(decode("TWFu", encoding).unwrap(), b"Man");
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        assert!(matches!(
            Encoding::parse("ucs2"),
            Err(EncodingError::UnknownEncoding(_))
        ));
    }
}
