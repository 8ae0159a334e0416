//! Buffer operations: copy, slice, fill, write, concat and conversions.

use octetbuf_codec::Encoding;

use crate::buffer::Buffer;
use crate::error::{BoundsError, BufferError, UnsupportedOperationError, ValidationError};

/// Fill source: a raw octet, or a character contributing its code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillValue {
    Byte(u8),
    Char(char),
}

impl FillValue {
    fn octet(self) -> Result<u8, ValidationError> {
        match self {
            FillValue::Byte(byte) => Ok(byte),
            FillValue::Char(c) => {
                let code = c as u32;
                if code > 0xFF {
                    return Err(ValidationError::FillRange(code));
                }
                Ok(code as u8)
            }
        }
    }
}

impl From<u8> for FillValue {
    fn from(byte: u8) -> FillValue {
        FillValue::Byte(byte)
    }
}

impl From<char> for FillValue {
    fn from(c: char) -> FillValue {
        FillValue::Char(c)
    }
}

impl Buffer {
    /// Copies `[source_start, source_end)` of this buffer into `target`
    /// starting at `target_start`, clamping the span to the room left in
    /// `target`. Returns `target`'s (unchanged) length, or 0 when either
    /// buffer or the span is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf::Buffer;
    ///
    /// let source = Buffer::from_bytes(vec![1u8, 2, 3, 4]);
    /// let mut target = Buffer::zeroed(4);
    /// source.copy_to(&mut target, 1, 1, Some(3)).unwrap();
    /// assert_eq!(target.as_slice(), &[0, 2, 3, 0]);
    /// ```
    pub fn copy_to(
        &self,
        target: &mut Buffer,
        target_start: usize,
        source_start: usize,
        source_end: Option<usize>,
    ) -> Result<usize, BufferError> {
        let source_length = self.len();
        let target_length = target.len();
        let mut source_end = source_end.unwrap_or(source_length);

        if source_end < source_start {
            return Err(BoundsError::EndBeforeStart {
                start: source_start,
                end: source_end,
            }
            .into());
        }
        if source_end == source_start || target_length == 0 || source_length == 0 {
            return Ok(0);
        }
        if target_start >= target_length {
            return Err(BoundsError::Start {
                start: target_start,
                length: target_length,
            }
            .into());
        }
        if source_start >= source_length {
            return Err(BoundsError::Start {
                start: source_start,
                length: source_length,
            }
            .into());
        }
        if source_end > source_length {
            return Err(BoundsError::End {
                end: source_end,
                length: source_length,
            }
            .into());
        }

        if target_length - target_start < source_end - source_start {
            source_end = target_length - target_start + source_start;
        }

        let count = source_end - source_start;
        target.data[target_start..target_start + count]
            .copy_from_slice(&self.data[source_start..source_end]);

        Ok(target.len())
    }

    /// Truncates this buffer in place to `[start, end)`.
    ///
    /// This is destructive, not a view.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf::Buffer;
    ///
    /// let mut buf = Buffer::from_bytes(vec![1u8, 2, 3, 4, 5]);
    /// buf.slice(1, Some(3)).unwrap();
    /// assert_eq!(buf.as_slice(), &[2, 3]);
    /// ```
    pub fn slice(&mut self, start: usize, end: Option<usize>) -> Result<(), BufferError> {
        let length = self.len();
        let end = end.unwrap_or(length);

        if end > length {
            return Err(BoundsError::End { end, length }.into());
        }
        if start > end {
            return Err(BoundsError::EndBeforeStart { start, end }.into());
        }

        self.data.truncate(end);
        self.data.drain(..start);
        Ok(())
    }

    /// Sets every octet in `[start, end)` to `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf::Buffer;
    ///
    /// let mut buf = Buffer::zeroed(4);
    /// buf.fill('a', 1, Some(3)).unwrap();
    /// assert_eq!(buf.as_slice(), &[0, 0x61, 0x61, 0]);
    /// ```
    pub fn fill(
        &mut self,
        value: impl Into<FillValue>,
        start: usize,
        end: Option<usize>,
    ) -> Result<(), BufferError> {
        let octet = value.into().octet()?;
        let length = self.len();
        let end = end.unwrap_or(length);

        if end < start {
            return Err(BoundsError::EndBeforeStart { start, end }.into());
        }
        if end == start || length == 0 {
            return Ok(());
        }
        if start >= length {
            return Err(BoundsError::Start { start, length }.into());
        }
        if end > length {
            return Err(BoundsError::End { end, length }.into());
        }

        for slot in &mut self.data[start..end] {
            *slot = octet;
        }
        Ok(())
    }

    /// Decodes `data` per `encoding` and overwrites up to `length` octets of
    /// this buffer at `offset`, clamped to the room remaining. Returns the
    /// number of octets written. The buffer's length never changes.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf::{Buffer, Encoding};
    ///
    /// let mut buf = Buffer::zeroed(5);
    /// let written = buf.write("TWFu", 1, None, Encoding::Base64).unwrap();
    /// assert_eq!(written, 3);
    /// assert_eq!(buf.as_slice(), &[0, b'M', b'a', b'n', 0]);
    /// ```
    pub fn write(
        &mut self,
        data: &str,
        offset: usize,
        length: Option<usize>,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let remaining = self.len().saturating_sub(offset);
        let length = match length {
            Some(length) => length.min(remaining),
            None => remaining,
        };

        let decoded = octetbuf_codec::decode(data, encoding)?;
        let count = decoded.len().min(length);
        if count == 0 {
            return Ok(0);
        }

        self.data[offset..offset + count].copy_from_slice(&decoded[..count]);
        Ok(count)
    }

    /// Concatenates `list` in order into one buffer.
    ///
    /// An empty list yields an empty buffer; a single-element list returns
    /// that element itself, not a copy. With an explicit `length` the output
    /// is pre-sized and each element copy clamps or faults exactly as
    /// [`copy_to`](Buffer::copy_to) does.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf::Buffer;
    ///
    /// let joined = Buffer::concat(
    ///     vec![Buffer::from_bytes(vec![1u8, 2]), Buffer::from_bytes(vec![3u8, 4])],
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(joined.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn concat(list: Vec<Buffer>, length: Option<usize>) -> Result<Buffer, BufferError> {
        let mut list = list;
        if list.is_empty() {
            return Ok(Buffer::new());
        }
        if list.len() == 1 {
            return Ok(list.swap_remove(0));
        }

        let total = match length {
            Some(length) => length,
            None => list.iter().map(Buffer::len).sum(),
        };

        let mut buffer = Buffer::zeroed(total);
        let mut pos = 0;
        for buf in &list {
            buf.copy_to(&mut buffer, pos, 0, None)?;
            pos += buf.len();
        }
        Ok(buffer)
    }

    /// Encodes `[start, end)` as text per `encoding`, clamping the range to
    /// the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use octetbuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::from_bytes(vec![0x00, 0xFF, 0x10]);
    /// assert_eq!(buf.to_text(Encoding::Hex, 0, None), "00ff10");
    /// ```
    pub fn to_text(&self, encoding: Encoding, start: usize, end: Option<usize>) -> String {
        let length = self.len();
        let start = start.min(length);
        let end = end.unwrap_or(length).min(length);
        if start >= end {
            return String::new();
        }
        octetbuf_codec::encode(&self.data[start..end], encoding)
    }

    /// Copies `[start, end)` out as a plain byte vector.
    pub fn to_array(&self, start: usize, end: Option<usize>) -> Result<Vec<u8>, BufferError> {
        let length = self.len();
        let end = end.unwrap_or(length);

        if end < start {
            return Err(BoundsError::EndBeforeStart { start, end }.into());
        }
        if end == start || length == 0 {
            return Ok(Vec::new());
        }
        if start >= length {
            return Err(BoundsError::Start { start, length }.into());
        }
        if end > length {
            return Err(BoundsError::End { end, length }.into());
        }

        Ok(self.data[start..end].to_vec())
    }

    /// External data-view conversion, refused on this host: Rust has a
    /// native fixed-width byte view, so [`as_slice`](Buffer::as_slice) and
    /// [`to_array`](Buffer::to_array) are the supported paths.
    pub fn to_data_view(&self, _start: usize, _end: Option<usize>) -> Result<Vec<u8>, BufferError> {
        Err(UnsupportedOperationError::NativeView.into())
    }

    /// External array-buffer conversion; same refusal as
    /// [`to_data_view`](Buffer::to_data_view).
    pub fn to_array_buffer(
        &self,
        start: usize,
        end: Option<usize>,
    ) -> Result<Vec<u8>, BufferError> {
        self.to_data_view(start, end)
    }
}
