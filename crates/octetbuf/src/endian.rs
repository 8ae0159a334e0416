//! Byte-order flag for multi-byte accessors.

use std::fmt;

/// Byte ordering of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// True for [`Endian::Big`].
    pub fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endian::Big => "big",
            Endian::Little => "little",
        })
    }
}
