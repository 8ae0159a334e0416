//! IEEE 754 float accessors.
//!
//! Both widths run in the `f64` domain: reads return the exact widened
//! value and writes accept any `f64`, so the single-precision range check
//! stays meaningful. NaN and the infinities bypass the range check.

use octetbuf_ieee754::{
    read_ieee754, write_ieee754, DOUBLE_BYTES, DOUBLE_MANTISSA_BITS, SINGLE_BYTES,
    SINGLE_MANTISSA_BITS,
};

use crate::buffer::Buffer;
use crate::endian::Endian;
use crate::error::{BufferError, ValidationError};

impl Buffer {
    /// Reads a single-precision value at `offset`, widened exactly to `f64`.
    pub fn read_f32(&self, offset: usize, endian: Endian) -> Result<f64, BufferError> {
        self.check_span(offset, SINGLE_BYTES)?;
        Ok(self.read_f32_unchecked(offset, endian))
    }

    #[inline]
    pub fn read_f32_unchecked(&self, offset: usize, endian: Endian) -> f64 {
        read_ieee754(
            &self.data,
            offset,
            endian.is_big(),
            SINGLE_MANTISSA_BITS,
            SINGLE_BYTES,
        )
    }

    /// Reads a double-precision value at `offset`.
    pub fn read_f64(&self, offset: usize, endian: Endian) -> Result<f64, BufferError> {
        self.check_span(offset, DOUBLE_BYTES)?;
        Ok(self.read_f64_unchecked(offset, endian))
    }

    #[inline]
    pub fn read_f64_unchecked(&self, offset: usize, endian: Endian) -> f64 {
        read_ieee754(
            &self.data,
            offset,
            endian.is_big(),
            DOUBLE_MANTISSA_BITS,
            DOUBLE_BYTES,
        )
    }

    /// Writes `value` as a single-precision float at `offset`.
    ///
    /// Finite values outside the single-precision range are rejected with a
    /// [`ValidationError`]; NaN and the infinities pass through.
    pub fn write_f32(&mut self, value: f64, offset: usize, endian: Endian) -> Result<(), BufferError> {
        self.check_span(offset, SINGLE_BYTES)?;
        if value.is_finite() && value.abs() > f32::MAX as f64 {
            return Err(ValidationError::FloatRange(value).into());
        }
        self.write_f32_unchecked(value, offset, endian);
        Ok(())
    }

    #[inline]
    pub fn write_f32_unchecked(&mut self, value: f64, offset: usize, endian: Endian) {
        write_ieee754(
            &mut self.data,
            value,
            offset,
            endian.is_big(),
            SINGLE_MANTISSA_BITS,
            SINGLE_BYTES,
        );
    }

    /// Writes `value` as a double-precision float at `offset`.
    pub fn write_f64(&mut self, value: f64, offset: usize, endian: Endian) -> Result<(), BufferError> {
        self.check_span(offset, DOUBLE_BYTES)?;
        self.write_f64_unchecked(value, offset, endian);
        Ok(())
    }

    #[inline]
    pub fn write_f64_unchecked(&mut self, value: f64, offset: usize, endian: Endian) {
        write_ieee754(
            &mut self.data,
            value,
            offset,
            endian.is_big(),
            DOUBLE_MANTISSA_BITS,
            DOUBLE_BYTES,
        );
    }
}
