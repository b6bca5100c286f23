pub mod error;
pub mod file;
pub mod reader;
pub mod tag;
pub mod writer;

pub use error::NbtError;
pub use file::{read_file, write_file, Compression, NbtFile};
pub use tag::{Compound, ListTag, Tag, TagId};

#[cfg(test)]
mod tag_tests {
    use crate::tag::{Compound, ListTag, Tag, TagId};
    use approx::assert_ulps_eq;

    #[test]
    fn test_compound_insert_keeps_position() {
        let mut compound = Compound::new();
        compound.insert("a", Tag::Int(1));
        compound.insert("b", Tag::Int(2));
        compound.insert("c", Tag::Int(3));
        let prev = compound.insert("b", Tag::String("x".to_owned()));

        assert_eq!(prev, Some(Tag::Int(2)));
        assert_eq!(compound.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(compound.get("b").and_then(Tag::as_str), Some("x"));
    }
    #[test]
    fn test_compound_remove() {
        let mut compound = Compound::new();
        compound.insert("a", Tag::Int(1));
        compound.insert("b", Tag::Int(2));

        assert_eq!(compound.remove("a"), Some(Tag::Int(1)));
        assert!(!compound.contains_key("a"));
        assert_eq!(compound.len(), 1);
        assert_eq!(compound.remove("a"), None);
    }
    #[test]
    fn test_tag_as_i64_widens_integers() {
        assert_eq!(Tag::Byte(-3).as_i64(), Some(-3));
        assert_eq!(Tag::Short(300).as_i64(), Some(300));
        assert_eq!(Tag::Int(-70000).as_i64(), Some(-70000));
        assert_eq!(Tag::Long(1 << 40).as_i64(), Some(1 << 40));
        assert_eq!(Tag::Double(1.0).as_i64(), None);
        assert_eq!(Tag::String("1".to_owned()).as_i64(), None);
    }
    #[test]
    fn test_tag_as_f64() {
        assert_ulps_eq!(Tag::Float(0.25).as_f64().unwrap(), 0.25);
        assert_ulps_eq!(Tag::Double(0.7).as_f64().unwrap(), 0.7);
        assert_ulps_eq!(Tag::Int(2).as_f64().unwrap(), 2.0);
        assert!(Tag::IntArray(vec![]).as_f64().is_none());
    }
    #[test]
    fn test_tag_as_int_array() {
        assert_eq!(Tag::IntArray(vec![1, -2]).as_int_array(), Some(&[1, -2][..]));
        assert!(Tag::LongArray(vec![1]).as_int_array().is_none());
    }
    #[test]
    fn test_list_compounds_skips_other_items() {
        let mut list = ListTag::of_compounds(vec![Compound::new(), Compound::new()]);
        assert_eq!(list.element, TagId::Compound);
        assert_eq!(list.compounds().count(), 2);

        list.items.push(Tag::Int(1));
        assert_eq!(list.compounds().count(), 2);
    }
    #[test]
    fn test_tag_id_try_from() {
        assert_eq!(TagId::try_from(11u8).unwrap(), TagId::IntArray);
        assert!(TagId::try_from(13u8).is_err());
    }
}
