//! XDR primitive encoder.
//!
//! Reference: RFC 4506 — all integers big-endian, every item padded to a
//! 4-byte boundary.

/// XDR primitive encoder over a growable byte buffer.
///
/// Writing cannot fail; size constraints are the responsibility of the
/// typed layer above.
pub struct XdrEncoder {
    buf: Vec<u8>,
}

impl Default for XdrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl XdrEncoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Consumes the encoder and returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn pad(&mut self, data_len: usize) {
        let rem = data_len % 4;
        if rem != 0 {
            self.buf.extend_from_slice(&[0u8; 4][..4 - rem]);
        }
    }

    // ---------------------------------------------------------------- primitives

    pub fn write_int(&mut self, val: i32) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    pub fn write_unsigned_int(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    pub fn write_hyper(&mut self, val: i64) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    pub fn write_unsigned_hyper(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    pub fn write_bool(&mut self, val: bool) {
        self.write_unsigned_int(val as u32);
    }

    /// Writes fixed-size opaque data with padding.
    pub fn write_opaque(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
        self.pad(data.len());
    }

    /// Writes variable-length opaque data: length prefix, bytes, padding.
    pub fn write_varlen_opaque(&mut self, data: &[u8]) {
        self.write_unsigned_int(data.len() as u32);
        self.write_opaque(data);
    }

    /// Writes a string: length prefix, UTF-8 bytes, padding.
    pub fn write_string(&mut self, s: &str) {
        self.write_varlen_opaque(s.as_bytes());
    }
}
