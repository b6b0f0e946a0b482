use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{
    buffer::{
        BitBuffer, ByteBuffer, DataBuffer, FloatBuffer, IntBuffer, LongBuffer, ShortBuffer,
        UnsignedByteBuffer,
    },
    config::WireOrder,
    error::BufferError,
};

use super::{Decode, Encode, decode_fixed, encode_fixed};

macro_rules! fixed_width_codec {
    ($buffer:ty, $elem:ty, $read_into:ident, $write_into:ident) => {
        impl Decode for $buffer {
            fn decode(bytes: &[u8], order: WireOrder) -> Result<Self, BufferError> {
                let read: fn(&[u8], &mut [$elem]) = match order {
                    WireOrder::Little => LittleEndian::$read_into,
                    WireOrder::Big => BigEndian::$read_into,
                };
                Ok(decode_fixed(Self::KIND, bytes, read)?.into())
            }
        }

        impl Encode for $buffer {
            fn encode(&self, order: WireOrder) -> Result<Vec<u8>, BufferError> {
                let write: fn(&[$elem], &mut [u8]) = match order {
                    WireOrder::Little => LittleEndian::$write_into,
                    WireOrder::Big => BigEndian::$write_into,
                };
                Ok(encode_fixed(Self::KIND, self.as_slice(), write))
            }
        }
    };
}

fixed_width_codec!(FloatBuffer, f32, read_f32_into, write_f32_into);
fixed_width_codec!(ShortBuffer, i16, read_i16_into, write_i16_into);
fixed_width_codec!(IntBuffer, i32, read_i32_into, write_i32_into);
fixed_width_codec!(LongBuffer, i64, read_i64_into, write_i64_into);

// Single-byte kinds ignore the byte order.

fn copy_bytes(src: &[u8], dst: &mut [u8]) {
    dst.copy_from_slice(src);
}

impl Decode for UnsignedByteBuffer {
    fn decode(bytes: &[u8], _order: WireOrder) -> Result<Self, BufferError> {
        Ok(decode_fixed(Self::KIND, bytes, copy_bytes)?.into())
    }
}

impl Encode for UnsignedByteBuffer {
    fn encode(&self, _order: WireOrder) -> Result<Vec<u8>, BufferError> {
        Ok(encode_fixed(Self::KIND, self.as_slice(), copy_bytes))
    }
}

impl Decode for ByteBuffer {
    fn decode(bytes: &[u8], _order: WireOrder) -> Result<Self, BufferError> {
        let read: fn(&[u8], &mut [i8]) = |src, dst| {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = *s as i8;
            }
        };
        Ok(decode_fixed(Self::KIND, bytes, read)?.into())
    }
}

impl Encode for ByteBuffer {
    fn encode(&self, _order: WireOrder) -> Result<Vec<u8>, BufferError> {
        let write: fn(&[i8], &mut [u8]) = |src, dst| {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = *s as u8;
            }
        };
        Ok(encode_fixed(Self::KIND, self.as_slice(), write))
    }
}

// One byte per element. Any non-zero byte reads as `true`.
impl Decode for BitBuffer {
    fn decode(bytes: &[u8], _order: WireOrder) -> Result<Self, BufferError> {
        let read: fn(&[u8], &mut [bool]) = |src, dst| {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = *s != 0;
            }
        };
        Ok(decode_fixed(Self::KIND, bytes, read)?.into())
    }
}

impl Encode for BitBuffer {
    fn encode(&self, _order: WireOrder) -> Result<Vec<u8>, BufferError> {
        let write: fn(&[bool], &mut [u8]) = |src, dst| {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = u8::from(*s);
            }
        };
        Ok(encode_fixed(Self::KIND, self.as_slice(), write))
    }
}
