//! Binary codecs for the typed buffers.
//!
//! The wire format carries no header and no type tag: the caller routes the
//! bytes to the codec of the buffer type it expects.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::{
    buffer::{AnyBuffer, DataBuffer, DoubleBuffer, match_any_buffer},
    config::{CodecConfig, WireOrder},
    element::ElementKind,
    error::{BufferError, MalformedBufferError},
};

mod fixed;
mod strings;

pub trait Decode: DataBuffer {
    fn decode(bytes: &[u8], order: WireOrder) -> Result<Self, BufferError>;
}

pub trait Encode: DataBuffer {
    fn encode(&self, order: WireOrder) -> Result<Vec<u8>, BufferError>;
}

/// Decode little-endian binary64 values into a [`DoubleBuffer`].
///
/// The length of `bytes` must be a multiple of 8. An empty input yields an
/// empty buffer.
pub fn deserialize(bytes: &[u8]) -> Result<DoubleBuffer, MalformedBufferError> {
    deserialize_with(bytes, &CodecConfig::default())
}

pub fn deserialize_with(
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<DoubleBuffer, MalformedBufferError> {
    let read: fn(&[u8], &mut [f64]) = match config.byte_order {
        WireOrder::Little => LittleEndian::read_f64_into,
        WireOrder::Big => BigEndian::read_f64_into,
    };
    decode_fixed(ElementKind::Double, bytes, read).map(DoubleBuffer::new)
}

/// Encode a [`DoubleBuffer`] in the format read by [`deserialize`].
pub fn serialize(buffer: &DoubleBuffer) -> Vec<u8> {
    serialize_with(buffer, &CodecConfig::default())
}

pub fn serialize_with(buffer: &DoubleBuffer, config: &CodecConfig) -> Vec<u8> {
    let write: fn(&[f64], &mut [u8]) = match config.byte_order {
        WireOrder::Little => LittleEndian::write_f64_into,
        WireOrder::Big => BigEndian::write_f64_into,
    };
    encode_fixed(ElementKind::Double, buffer.as_slice(), write)
}

impl Decode for DoubleBuffer {
    fn decode(bytes: &[u8], order: WireOrder) -> Result<Self, BufferError> {
        Ok(deserialize_with(bytes, &CodecConfig::new(order))?)
    }
}

impl Encode for DoubleBuffer {
    fn encode(&self, order: WireOrder) -> Result<Vec<u8>, BufferError> {
        Ok(serialize_with(self, &CodecConfig::new(order)))
    }
}

/// Decode `bytes` into the buffer type matching `kind`.
pub fn decode_any(
    kind: ElementKind,
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<AnyBuffer, BufferError> {
    use crate::buffer::*;

    let order = config.byte_order;
    let buffer = match kind {
        ElementKind::Double => DoubleBuffer::decode(bytes, order)?.into(),
        ElementKind::Float => FloatBuffer::decode(bytes, order)?.into(),
        ElementKind::Bit => BitBuffer::decode(bytes, order)?.into(),
        ElementKind::Byte => ByteBuffer::decode(bytes, order)?.into(),
        ElementKind::UnsignedByte => UnsignedByteBuffer::decode(bytes, order)?.into(),
        ElementKind::Short => ShortBuffer::decode(bytes, order)?.into(),
        ElementKind::Int => IntBuffer::decode(bytes, order)?.into(),
        ElementKind::Long => LongBuffer::decode(bytes, order)?.into(),
        #[cfg(feature = "strings")]
        ElementKind::String => StringBuffer::decode(bytes, order)?.into(),
        #[cfg(not(feature = "strings"))]
        ElementKind::String => return Err(BufferError::Disabled(kind)),
    };
    Ok(buffer)
}

impl AnyBuffer {
    pub fn encode(&self, order: WireOrder) -> Result<Vec<u8>, BufferError> {
        match_any_buffer!(self, buffer => buffer.encode(order))
    }
}

fn element_count(
    kind: ElementKind,
    width: usize,
    bytes: &[u8],
) -> Result<usize, MalformedBufferError> {
    if bytes.len() % width != 0 {
        tracing::debug!(%kind, len = bytes.len(), width, "rejected malformed buffer");
        return Err(MalformedBufferError {
            kind,
            len: bytes.len(),
            width,
        });
    }
    Ok(bytes.len() / width)
}

fn decode_fixed<T: Copy + Default>(
    kind: ElementKind,
    bytes: &[u8],
    read: fn(&[u8], &mut [T]),
) -> Result<Vec<T>, MalformedBufferError> {
    let count = element_count(kind, std::mem::size_of::<T>(), bytes)?;
    let mut data = vec![T::default(); count];
    read(bytes, &mut data);
    tracing::trace!(%kind, bytes = bytes.len(), elements = count, "decoded buffer");
    Ok(data)
}

fn encode_fixed<T>(kind: ElementKind, data: &[T], write: fn(&[T], &mut [u8])) -> Vec<u8> {
    let mut bytes = vec![0; data.len() * std::mem::size_of::<T>()];
    write(data, &mut bytes);
    tracing::trace!(%kind, elements = data.len(), bytes = bytes.len(), "encoded buffer");
    bytes
}
