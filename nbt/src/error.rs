use crate::tag::TagId;
use thiserror::Error;

/// NbtError is returned if a tag tree cannot be read from or written to a byte stream.
#[derive(Debug, Error)]
pub enum NbtError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown tag id {0}")]
    UnknownTagId(u8),
    #[error("unexpected end tag")]
    UnexpectedEnd,
    #[error("negative length {0}")]
    NegativeLength(i32),
    #[error("length {0} exceeds the format limit")]
    LengthOverflow(usize),
    #[error("tags are nested deeper than {0} levels")]
    DepthLimit(usize),
    #[error("string is not valid UTF-8")]
    InvalidString,
    #[error("string of {0} bytes does not fit into a tag")]
    StringTooLong(usize),
    #[error("root tag must be a compound, but is {0}")]
    RootNotCompound(TagId),
    #[error("list of {expected} contains an item of type {found}")]
    MixedList { expected: TagId, found: TagId },
}

pub type Result<T> = std::result::Result<T, NbtError>;
