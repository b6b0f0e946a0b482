use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::BufferError;

/// Semantic type of the values stored in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Double,
    Float,
    Bit,
    Byte,
    UnsignedByte,
    Short,
    Int,
    Long,
    String,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        Self::Double,
        Self::Float,
        Self::Bit,
        Self::Byte,
        Self::UnsignedByte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::String,
    ];

    /// Number of bytes one element occupies on the wire.
    /// Returns `None` for variable-width kinds.
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Double | Self::Long => Some(8),
            Self::Float | Self::Int => Some(4),
            Self::Short => Some(2),
            Self::Bit | Self::Byte | Self::UnsignedByte => Some(1),
            Self::String => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Bit => "bit",
            Self::Byte => "byte",
            Self::UnsignedByte => "unsigned_byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::String => "string",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BufferError::UnknownElementKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BufferError;

    use super::ElementKind;

    #[test]
    fn width() {
        assert_eq!(ElementKind::Double.width(), Some(8));
        assert_eq!(ElementKind::Float.width(), Some(4));
        assert_eq!(ElementKind::Short.width(), Some(2));
        assert_eq!(ElementKind::UnsignedByte.width(), Some(1));
        assert_eq!(ElementKind::String.width(), None);
    }

    #[test]
    fn parse() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.name().parse::<ElementKind>(), Ok(kind));
        }
        assert_eq!(
            "Unsigned_Byte".parse::<ElementKind>(),
            Ok(ElementKind::UnsignedByte)
        );
        assert_eq!(
            "complex".parse::<ElementKind>(),
            Err(BufferError::UnknownElementKind("complex".to_string()))
        );
    }

    #[test]
    fn serde_name() {
        assert_eq!(
            serde_json::to_string(&ElementKind::UnsignedByte).unwrap(),
            "\"unsigned_byte\""
        );
    }
}
