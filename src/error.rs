use crate::element::ElementKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "malformed {kind} buffer: {len} bytes is not a multiple of the {width}-byte element width"
)]
pub struct MalformedBufferError {
    pub kind: ElementKind,
    pub len: usize,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error(transparent)]
    Malformed(#[from] MalformedBufferError),
    #[error("malformed string buffer: {0}")]
    MalformedStrings(String),
    #[error("unsupported element type '{0}'")]
    UnknownElementKind(String),
    #[error("{0} buffers are not enabled in this build")]
    Disabled(ElementKind),
}
