//! Encoding name resolution.

use std::fmt;

use crate::EncodingError;

/// A recognized text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 with the extended multi-byte scheme (default).
    #[default]
    Utf8,
    /// Lowercase hexadecimal, two digits per octet.
    Hex,
    /// RFC 4648 base64 with `=` padding.
    Base64,
}

impl Encoding {
    /// Resolves an encoding name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf_codec::Encoding;
    ///
    /// assert_eq!(Encoding::parse("UTF8").unwrap(), Encoding::Utf8);
    /// assert_eq!(Encoding::parse("Base64").unwrap(), Encoding::Base64);
    /// assert!(Encoding::parse("latin1").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Encoding, EncodingError> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" => Ok(Encoding::Utf8),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            _ => Err(EncodingError::UnknownEncoding(name.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        for name in ["hex", "HEX", "Hex"] {
            assert_eq!(Encoding::parse(name).unwrap(), Encoding::Hex);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Encoding::parse("ascii"),
            Err(EncodingError::UnknownEncoding("ascii".into()))
        );
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Encoding::default(), Encoding::Utf8);
    }
}
