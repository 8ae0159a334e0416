//! Base64 decoding function.

use crate::constants::PAD;
use crate::tables::a2i;
use crate::EncodingError;

/// Decodes a standard padded base64 string to bytes.
///
/// The input length must be a multiple of four. At most the last two
/// characters may be `=`; one trailing `=` drops one byte from the final
/// group, two drop two.
///
/// # Example
///
/// ```
/// use octetbuf_codec::from_base64;
///
/// assert_eq!(from_base64("TWFu").unwrap(), b"Man");
/// assert_eq!(from_base64("TWE=").unwrap(), b"Ma");
/// assert!(from_base64("TWFuX").is_err());
/// ```
pub fn from_base64(text: &str) -> Result<Vec<u8>, EncodingError> {
    let data = text.as_bytes();
    let length = data.len();

    if length % 4 != 0 {
        return Err(EncodingError::Base64Length);
    }

    let mut group_count = length / 4;
    let mut missing = 0;
    if length != 0 {
        if data[length - 1] == PAD {
            missing += 1;
            group_count -= 1;
        }
        if data[length - 2] == PAD {
            missing += 1;
        }
    }

    let mut out = Vec::with_capacity(3 * group_count + 2);
    let mut index = 0;
    for _ in 0..group_count {
        let c0 = a2i(data[index])?;
        let c1 = a2i(data[index + 1])?;
        let c2 = a2i(data[index + 2])?;
        let c3 = a2i(data[index + 3])?;
        index += 4;

        out.push(((c0 << 2) | (c1 >> 4)) as u8);
        out.push(((c1 << 4) | (c2 >> 2)) as u8);
        out.push(((c2 << 6) | c3) as u8);
    }

    match missing {
        1 => {
            let c0 = a2i(data[index])?;
            let c1 = a2i(data[index + 1])?;
            let c2 = a2i(data[index + 2])?;
            out.push(((c0 << 2) | (c1 >> 4)) as u8);
            out.push(((c1 << 4) | (c2 >> 2)) as u8);
        }
        2 => {
            let c0 = a2i(data[index])?;
            let c1 = a2i(data[index + 1])?;
            out.push(((c0 << 2) | (c1 >> 4)) as u8);
        }
        _ => {}
    }

    Ok(out)
}
