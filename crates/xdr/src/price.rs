//! Wire price: a rational as two signed 32-bit integers.

use crate::decoder::{DecodeError, XdrDecoder};
use crate::encoder::XdrEncoder;
use crate::XdrCodec;

/// Price of `n` units of one asset in terms of `d` units of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl Price {
    pub fn new(n: i32, d: i32) -> Self {
        Price { n, d }
    }
}

impl XdrCodec for Price {
    fn encode(&self, enc: &mut XdrEncoder) {
        enc.write_int(self.n);
        enc.write_int(self.d);
    }

    fn decode(dec: &mut XdrDecoder<'_>) -> Result<Self, DecodeError> {
        let n = dec.read_int()?;
        let d = dec.read_int()?;
        Ok(Price { n, d })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_two_ints() {
        let bytes = Price { n: 3, d: 2 }.to_bytes();
        assert_eq!(bytes, [0, 0, 0, 3, 0, 0, 0, 2]);
    }

    #[test]
    fn roundtrip() {
        let price = Price { n: i32::MAX, d: 1 };
        assert_eq!(Price::from_bytes(&price.to_bytes()).unwrap(), price);
    }
}
