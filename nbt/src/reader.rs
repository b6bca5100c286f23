use crate::error::{NbtError, Result};
use crate::tag::{Compound, ListTag, Tag, TagId};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// Maximum nesting depth of lists and compounds (same limit as the game itself).
pub const MAX_DEPTH: usize = 512;

// lengths are read from untrusted input, allocations grow beyond this only while data arrives
const PREALLOC_LIMIT: usize = 4096;

/// NbtReader decodes an uncompressed, big-endian NBT stream.
pub struct NbtReader<R: Read> {
    reader: R,
}

impl<R: Read> NbtReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// read_named_root reads the root tag of a file, which must be a named compound, and returns
    /// its name together with the compound.
    pub fn read_named_root(&mut self) -> Result<(String, Compound)> {
        let tag_id = TagId::try_from(self.reader.read_u8()?)?;

        if tag_id != TagId::Compound {
            return Err(NbtError::RootNotCompound(tag_id));
        }

        let name = self.read_string()?;
        let root = self.read_compound(0)?;
        Ok((name, root))
    }

    fn read_payload(&mut self, tag_id: TagId, depth: usize) -> Result<Tag> {
        let tag = match tag_id {
            TagId::End => return Err(NbtError::UnexpectedEnd),
            TagId::Byte => Tag::Byte(self.reader.read_i8()?),
            TagId::Short => Tag::Short(self.reader.read_i16::<BigEndian>()?),
            TagId::Int => Tag::Int(self.reader.read_i32::<BigEndian>()?),
            TagId::Long => Tag::Long(self.reader.read_i64::<BigEndian>()?),
            TagId::Float => Tag::Float(self.reader.read_f32::<BigEndian>()?),
            TagId::Double => Tag::Double(self.reader.read_f64::<BigEndian>()?),
            TagId::ByteArray => {
                let len = self.read_len()?;
                let mut vals = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    vals.push(self.reader.read_i8()?);
                }
                Tag::ByteArray(vals)
            }
            TagId::String => Tag::String(self.read_string()?),
            TagId::List => Tag::List(self.read_list(depth + 1)?),
            TagId::Compound => Tag::Compound(self.read_compound(depth + 1)?),
            TagId::IntArray => {
                let len = self.read_len()?;
                let mut vals = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    vals.push(self.reader.read_i32::<BigEndian>()?);
                }
                Tag::IntArray(vals)
            }
            TagId::LongArray => {
                let len = self.read_len()?;
                let mut vals = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    vals.push(self.reader.read_i64::<BigEndian>()?);
                }
                Tag::LongArray(vals)
            }
        };
        Ok(tag)
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthLimit(MAX_DEPTH));
        }

        let mut compound = Compound::new();

        loop {
            let tag_id = TagId::try_from(self.reader.read_u8()?)?;

            if tag_id == TagId::End {
                break;
            }

            let key = self.read_string()?;
            let tag = self.read_payload(tag_id, depth)?;
            compound.insert(key, tag);
        }

        Ok(compound)
    }

    fn read_list(&mut self, depth: usize) -> Result<ListTag> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthLimit(MAX_DEPTH));
        }

        let element = TagId::try_from(self.reader.read_u8()?)?;
        let len = self.read_len()?;
        let mut list = ListTag::new(element);

        // lists of end tags only occur empty
        if element == TagId::End {
            if len > 0 {
                return Err(NbtError::UnexpectedEnd);
            }
            return Ok(list);
        }

        list.items.reserve(len.min(PREALLOC_LIMIT));

        for _ in 0..len {
            list.items.push(self.read_payload(element, depth)?);
        }

        Ok(list)
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.reader.read_i32::<BigEndian>()?;

        if len < 0 {
            return Err(NbtError::NegativeLength(len));
        }

        Ok(len as usize)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf)?;
        String::from_utf8(buf).map_err(|_| NbtError::InvalidString)
    }
}
