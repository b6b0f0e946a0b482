pub mod buffer;
pub mod codec;
pub mod config;
pub mod element;
pub mod error;

pub use buffer::{
    AnyBuffer, BitBuffer, ByteBuffer, DataBuffer, DoubleBuffer, FloatBuffer, IntBuffer,
    LongBuffer, ShortBuffer, StringBuffer, UnsignedByteBuffer,
};
pub use codec::{
    Decode, Encode, decode_any, deserialize, deserialize_with, serialize, serialize_with,
};
pub use config::{CodecConfig, WireOrder};
pub use element::ElementKind;
pub use error::{BufferError, MalformedBufferError};
