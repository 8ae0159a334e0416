//! Mutable octet buffer with base64/hex/UTF-8 codecs and typed accessors.
//!
//! [`Buffer`] is an owned, growable, index-addressable sequence of octets
//! with deterministic text conversions and bit-exact fixed-width integer
//! and IEEE 754 float accessors at arbitrary byte offsets, in either
//! endianness. Every accessor comes in a checked variant returning
//! `Result` and an `_unchecked` variant that skips validation.
//!
//! Single-threaded and synchronous: operations run to completion, mutate in
//! place, and exclusive access is expressed through `&mut`.
//!
//! # Example
//!
//! ```
//! use octetbuf::{Buffer, Encoding, Endian};
//!
//! let mut buf = Buffer::from_text("TWFu", Encoding::Base64).unwrap();
//! assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "Man");
//!
//! buf.write_i16(-1, 0, Endian::Big).unwrap();
//! assert_eq!(buf.read_i16(0, Endian::Big).unwrap(), -1);
//! assert_eq!(buf.to_text(Encoding::Hex, 0, None), "ffff6e");
//! ```

mod buffer;
mod endian;
mod error;
mod float;
mod int;
mod ops;
mod print_octets;

pub use buffer::Buffer;
pub use endian::Endian;
pub use error::{
    BoundsError, BufferError, EncodingError, UnsupportedOperationError, ValidationError,
};
pub use ops::FillValue;
pub use print_octets::print_octets;

pub use octetbuf_codec::Encoding;
