//! XDR primitive decoder.
//!
//! Reference: RFC 4506 — all integers big-endian, 4-byte alignment.

/// XDR decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
    #[error("length prefix exceeds the maximum allowed size")]
    MaxSizeExceeded,
    #[error("unknown {0} discriminant: {1}")]
    UnknownDiscriminant(&'static str, i32),
    #[error("unsupported {0}")]
    Unsupported(&'static str),
    #[error("trailing bytes after a complete value")]
    TrailingBytes,
}

/// XDR primitive decoder over a borrowed byte slice.
pub struct XdrDecoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> XdrDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fails unless the input has been consumed exactly.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.pos != self.data.len() {
            return Err(DecodeError::TrailingBytes);
        }
        Ok(())
    }

    // ---------------------------------------------------------------- helpers

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.pos + n > self.data.len() {
            return Err(DecodeError::EndOfInput);
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn skip_padding(&mut self, data_len: usize) -> Result<(), DecodeError> {
        let rem = data_len % 4;
        if rem != 0 {
            self.take(4 - rem)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------- primitives

    pub fn read_int(&mut self) -> Result<i32, DecodeError> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_unsigned_int(&mut self) -> Result<u32, DecodeError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_hyper(&mut self) -> Result<i64, DecodeError> {
        let b = self.take(8)?;
        let bytes: [u8; 8] = b.try_into().unwrap();
        Ok(i64::from_be_bytes(bytes))
    }

    pub fn read_unsigned_hyper(&mut self) -> Result<u64, DecodeError> {
        let b = self.take(8)?;
        let bytes: [u8; 8] = b.try_into().unwrap();
        Ok(u64::from_be_bytes(bytes))
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_unsigned_int()? != 0)
    }

    /// Reads a fixed-size opaque array with padding.
    pub fn read_opaque_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.take(N)?;
        self.skip_padding(N)?;
        Ok(bytes.try_into().unwrap())
    }

    /// Reads variable-length opaque data, bounded by `max` when given.
    pub fn read_varlen_opaque(&mut self, max: Option<u32>) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_unsigned_int()?;
        if let Some(max) = max {
            if len > max {
                return Err(DecodeError::MaxSizeExceeded);
            }
        }
        let bytes = self.take(len as usize)?.to_vec();
        self.skip_padding(len as usize)?;
        Ok(bytes)
    }

    /// Reads a string: length prefix, UTF-8 bytes, padding.
    pub fn read_string(&mut self, max: Option<u32>) -> Result<String, DecodeError> {
        let bytes = self.read_varlen_opaque(max)?;
        String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
    }
}
