//! Typed buffers exchanged with the scripting runtime.
//!
//! Every element kind has its own nominal buffer type so that the matching
//! codec is picked by the static type of the buffer. [`AnyBuffer`] covers the
//! case where the kind is only known at run time.

use std::fmt::{Debug, Display};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;

pub trait DataBuffer: Display + Sized {
    type Element;

    const KIND: ElementKind;

    fn as_slice(&self) -> &[Self::Element];
    fn into_inner(self) -> Vec<Self::Element>;

    /// Number of elements
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

fn write_sequence<T: Debug>(f: &mut std::fmt::Formatter<'_>, data: &[T]) -> std::fmt::Result {
    f.write_str("[")?;
    for (i, value) in data.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:?}", value)?;
    }
    f.write_str("]")
}

macro_rules! data_buffer {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }
        }

        impl DataBuffer for $name {
            type Element = $elem;

            const KIND: ElementKind = ElementKind::$kind;

            fn as_slice(&self) -> &[$elem] {
                &self.data
            }
            fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write_sequence(f, &self.data)
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl From<$name> for AnyBuffer {
            fn from(buffer: $name) -> Self {
                AnyBuffer::$kind(buffer)
            }
        }

        impl TryFrom<AnyBuffer> for $name {
            type Error = AnyBuffer;

            fn try_from(value: AnyBuffer) -> Result<Self, Self::Error> {
                match value {
                    AnyBuffer::$kind(buffer) => Ok(buffer),
                    other => Err(other),
                }
            }
        }
    };
}

data_buffer!(
    /// IEEE-754 binary64 values
    DoubleBuffer, f64, Double
);
data_buffer!(
    /// IEEE-754 binary32 values
    FloatBuffer, f32, Float
);
data_buffer!(BitBuffer, bool, Bit);
data_buffer!(ByteBuffer, i8, Byte);
data_buffer!(UnsignedByteBuffer, u8, UnsignedByte);
data_buffer!(ShortBuffer, i16, Short);
data_buffer!(IntBuffer, i32, Int);
data_buffer!(LongBuffer, i64, Long);
data_buffer!(StringBuffer, String, String);

/// Buffer of any element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AnyBuffer {
    Double(DoubleBuffer),
    Float(FloatBuffer),
    Bit(BitBuffer),
    Byte(ByteBuffer),
    UnsignedByte(UnsignedByteBuffer),
    Short(ShortBuffer),
    Int(IntBuffer),
    Long(LongBuffer),
    String(StringBuffer),
}

macro_rules! match_any_buffer {
    ($value:expr, $buffer:ident => $body:expr) => {
        match $value {
            AnyBuffer::Double($buffer) => $body,
            AnyBuffer::Float($buffer) => $body,
            AnyBuffer::Bit($buffer) => $body,
            AnyBuffer::Byte($buffer) => $body,
            AnyBuffer::UnsignedByte($buffer) => $body,
            AnyBuffer::Short($buffer) => $body,
            AnyBuffer::Int($buffer) => $body,
            AnyBuffer::Long($buffer) => $body,
            AnyBuffer::String($buffer) => $body,
        }
    };
}
pub(crate) use match_any_buffer;

fn kind_of<B: DataBuffer>(_: &B) -> ElementKind {
    B::KIND
}

impl AnyBuffer {
    pub fn kind(&self) -> ElementKind {
        match_any_buffer!(self, buffer => kind_of(buffer))
    }
    pub fn len(&self) -> usize {
        match_any_buffer!(self, buffer => buffer.len())
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for AnyBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match_any_buffer!(self, buffer => Display::fmt(buffer, f))
    }
}
