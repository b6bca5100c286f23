use crate::error::NbtError;
use std::fmt;

/// TagId enumerates the payload kinds of the Named Binary Tag format. The discriminants are the
/// ids written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagId {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TryFrom<u8> for TagId {
    type Error = NbtError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        let tag_id = match id {
            0 => TagId::End,
            1 => TagId::Byte,
            2 => TagId::Short,
            3 => TagId::Int,
            4 => TagId::Long,
            5 => TagId::Float,
            6 => TagId::Double,
            7 => TagId::ByteArray,
            8 => TagId::String,
            9 => TagId::List,
            10 => TagId::Compound,
            11 => TagId::IntArray,
            12 => TagId::LongArray,
            _ => return Err(NbtError::UnknownTagId(id)),
        };
        Ok(tag_id)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tag holds a single typed NBT payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(ListTag),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn id(&self) -> TagId {
        match self {
            Tag::Byte(_) => TagId::Byte,
            Tag::Short(_) => TagId::Short,
            Tag::Int(_) => TagId::Int,
            Tag::Long(_) => TagId::Long,
            Tag::Float(_) => TagId::Float,
            Tag::Double(_) => TagId::Double,
            Tag::ByteArray(_) => TagId::ByteArray,
            Tag::String(_) => TagId::String,
            Tag::List(_) => TagId::List,
            Tag::Compound(_) => TagId::Compound,
            Tag::IntArray(_) => TagId::IntArray,
            Tag::LongArray(_) => TagId::LongArray,
        }
    }

    /// as_i64 widens any integer payload (byte, short, int, long) to i64.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(x) => Some(x as i64),
            Tag::Short(x) => Some(x as i64),
            Tag::Int(x) => Some(x as i64),
            Tag::Long(x) => Some(x),
            _ => None,
        }
    }

    /// as_f64 converts any numeric payload to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Float(x) => Some(x as f64),
            Tag::Double(x) => Some(x),
            _ => self.as_i64().map(|x| x as f64),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(vals) => Some(vals),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListTag> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

impl From<Compound> for Tag {
    fn from(compound: Compound) -> Self {
        Tag::Compound(compound)
    }
}

impl From<ListTag> for Tag {
    fn from(list: ListTag) -> Self {
        Tag::List(list)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::String(s.to_owned())
    }
}

/// ListTag is a homogeneous list. The element id is kept even if the list is empty such that an
/// unmodified list is written back exactly as it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTag {
    pub element: TagId,
    pub items: Vec<Tag>,
}

impl ListTag {
    pub fn new(element: TagId) -> ListTag {
        ListTag {
            element,
            items: Vec::new(),
        }
    }

    /// of_compounds creates a compound list from the inserted compounds.
    pub fn of_compounds(compounds: Vec<Compound>) -> ListTag {
        ListTag {
            element: TagId::Compound,
            items: compounds.into_iter().map(Tag::Compound).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    /// compounds returns the compound items of the list, skipping items of any other kind.
    pub fn compounds(&self) -> impl Iterator<Item = &Compound> {
        self.items.iter().filter_map(Tag::as_compound)
    }
}

/// Compound maps keys to tags and keeps the insertion order of its entries, i.e. a compound that
/// is read and written again keeps its key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    entries: Vec<(String, Tag)>,
}

impl Compound {
    pub fn new() -> Compound {
        Compound::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        match self.position(key) {
            Some(idx) => Some(&mut self.entries[idx].1),
            None => None,
        }
    }

    /// insert replaces the value of an existing key in place (the entry keeps its position) or
    /// appends a new entry. The previous value is returned if there was one.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
        let key = key.into();
        let tag = tag.into();

        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, tag)),
            None => {
                self.entries.push((key, tag));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(key, tag)| (key.as_str(), tag))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}
