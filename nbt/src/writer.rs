use crate::error::{NbtError, Result};
use crate::tag::{Compound, ListTag, Tag, TagId};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

/// NbtWriter encodes a tag tree into an uncompressed, big-endian NBT stream.
pub struct NbtWriter<W: Write> {
    writer: W,
}

impl<W: Write> NbtWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// into_inner returns the underlying writer, e.g. to finish a compressing encoder.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// write_named_root writes the root compound including its tag id and name.
    pub fn write_named_root(&mut self, name: &str, root: &Compound) -> Result<()> {
        self.writer.write_u8(TagId::Compound as u8)?;
        self.write_string(name)?;
        self.write_compound(root)
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::Byte(x) => self.writer.write_i8(*x)?,
            Tag::Short(x) => self.writer.write_i16::<BigEndian>(*x)?,
            Tag::Int(x) => self.writer.write_i32::<BigEndian>(*x)?,
            Tag::Long(x) => self.writer.write_i64::<BigEndian>(*x)?,
            Tag::Float(x) => self.writer.write_f32::<BigEndian>(*x)?,
            Tag::Double(x) => self.writer.write_f64::<BigEndian>(*x)?,
            Tag::ByteArray(vals) => {
                self.write_len(vals.len())?;
                for &x in vals.iter() {
                    self.writer.write_i8(x)?;
                }
            }
            Tag::String(s) => self.write_string(s)?,
            Tag::List(list) => self.write_list(list)?,
            Tag::Compound(compound) => self.write_compound(compound)?,
            Tag::IntArray(vals) => {
                self.write_len(vals.len())?;
                for &x in vals.iter() {
                    self.writer.write_i32::<BigEndian>(x)?;
                }
            }
            Tag::LongArray(vals) => {
                self.write_len(vals.len())?;
                for &x in vals.iter() {
                    self.writer.write_i64::<BigEndian>(x)?;
                }
            }
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (key, tag) in compound.iter() {
            self.writer.write_u8(tag.id() as u8)?;
            self.write_string(key)?;
            self.write_payload(tag)?;
        }
        self.writer.write_u8(TagId::End as u8)?;
        Ok(())
    }

    fn write_list(&mut self, list: &ListTag) -> Result<()> {
        if let Some(item) = list.items.iter().find(|item| item.id() != list.element) {
            return Err(NbtError::MixedList {
                expected: list.element,
                found: item.id(),
            });
        }

        self.writer.write_u8(list.element as u8)?;
        self.write_len(list.items.len())?;

        for item in list.items.iter() {
            self.write_payload(item)?;
        }
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| NbtError::LengthOverflow(len))?;
        self.writer.write_i32::<BigEndian>(len)?;
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        let len = u16::try_from(s.len()).map_err(|_| NbtError::StringTooLong(s.len()))?;
        self.writer.write_u16::<BigEndian>(len)?;
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }
}
