use crate::core::edit_error::EditError;
use crate::core::space_race::SpaceRace;
use nbt::{Compound, ListTag, Tag, TagId};

const KEY_DATA: &str = "data";
const KEY_SPACE_RACE_LIST: &str = "SpaceRaceList";

/// RaceRoster contains all space races of a world in the order of the race list on disk. The root
/// compound the roster was loaded from is kept such that saving only replaces the race list and
/// leaves all other data untouched.
#[derive(Debug, Clone, Default)]
pub struct RaceRoster {
    races: Vec<SpaceRace>,
    original_root: Option<Compound>,
}

impl RaceRoster {
    /// from_races creates a roster that was not loaded from a root compound.
    pub fn from_races(races: Vec<SpaceRace>) -> RaceRoster {
        RaceRoster {
            races,
            original_root: None,
        }
    }

    /// load decodes the race list below root -> data -> SpaceRaceList. If either key is missing,
    /// the world has no races yet and the roster is empty.
    pub fn load(root: &Compound) -> Result<RaceRoster, EditError> {
        let mut roster = RaceRoster {
            races: Vec::new(),
            original_root: Some(root.to_owned()),
        };

        let data = match root.get(KEY_DATA) {
            Some(tag) => tag.as_compound().ok_or_else(|| EditError::UnexpectedTag {
                key: KEY_DATA.to_owned(),
                expected: TagId::Compound,
            })?,
            None => {
                log::info!("No {} compound found, the world has no space races", KEY_DATA);
                return Ok(roster);
            }
        };

        let race_list = match data.get(KEY_SPACE_RACE_LIST) {
            Some(tag) => as_race_list(tag)?,
            None => {
                log::info!("No {} found in {}", KEY_SPACE_RACE_LIST, KEY_DATA);
                return Ok(roster);
            }
        };

        roster.races = race_list.compounds().map(SpaceRace::decode).collect();
        log::info!("Loaded {} space race(s)", roster.races.len());

        Ok(roster)
    }

    /// to_root returns the root compound with the race list replaced by the current races. If the
    /// roster was loaded from a root compound, that compound is the basis, otherwise a minimal
    /// root is created.
    pub fn to_root(&self) -> Result<Compound, EditError> {
        let mut root = self.original_root.to_owned().unwrap_or_default();

        if !root.contains_key(KEY_DATA) {
            root.insert(KEY_DATA, Compound::new());
        }

        let data = root
            .get_mut(KEY_DATA)
            .and_then(Tag::as_compound_mut)
            .ok_or_else(|| EditError::UnexpectedTag {
                key: KEY_DATA.to_owned(),
                expected: TagId::Compound,
            })?;

        let race_entries = self
            .races
            .iter()
            .map(|race| {
                let mut race_entry = Compound::new();
                race.encode(&mut race_entry);
                race_entry
            })
            .collect();

        data.insert(KEY_SPACE_RACE_LIST, ListTag::of_compounds(race_entries));

        Ok(root)
    }

    pub fn races(&self) -> &[SpaceRace] {
        &self.races
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpaceRace> {
        self.races.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SpaceRace> {
        self.races.get_mut(index)
    }

    /// check_index returns an OutOfRange error if the roster has no race at the given index.
    pub fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index >= self.races.len() {
            return Err(EditError::OutOfRange {
                index,
                len: self.races.len(),
            });
        }
        Ok(())
    }
}

/// as_race_list checks that the tag is a list of race entries. Empty lists of any element type are
/// accepted since the game writes empty lists without element type.
fn as_race_list(tag: &Tag) -> Result<&ListTag, EditError> {
    match tag.as_list() {
        Some(list) if list.is_empty() || list.element == TagId::Compound => Ok(list),
        _ => Err(EditError::UnexpectedTag {
            key: KEY_SPACE_RACE_LIST.to_owned(),
            expected: TagId::List,
        }),
    }
}
