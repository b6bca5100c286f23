use crate::core::flag_raster::FlagRaster;
use nbt::{Compound, ListTag, Tag, TagId};
use std::fmt;

pub const DEFAULT_TEAM_NAME: &str = "Unnamed";
pub const DEFAULT_TEAM_COLOR: [f64; 3] = [0.5, 0.5, 0.5];

const KEY_TEAM_NAME: &str = "TeamName";
const KEY_SPACE_RACE_ID: &str = "SpaceRaceID";
const KEY_TICKS_SPENT: &str = "TicksSpent";
const KEYS_TEAM_COLOR: [&str; 3] = ["teamColorR", "teamColorG", "teamColorB"];
const KEY_PLAYER_LIST: &str = "PlayerList";
const KEY_PLAYER_NAME: &str = "PlayerName";
const KEY_CELESTIAL_BODY_LIST: &str = "CelestialBodyList";
const KEY_CELESTIAL_BODY_NAME: &str = "CelestialBodyName";
const KEY_TIME_TAKEN: &str = "TimeTaken";

/// * `team_name` - Name of the team, e.g. Rocketeers
/// * `space_race_id` - Id of the race assigned by the game
/// * `ticks_spent` - (ticks) Time the team has spent in the race
/// * `flag` - Flag of the team
/// * `team_color` - Display color of the team (RGB, each in [0.0, 1.0]), independent of the flag
/// * `player_names` - Members of the team in join order
/// * `celestial_bodies` - Reached celestial bodies with the (ticks) it took to reach them, in the
/// order they were first reached
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceRace {
    pub team_name: String,
    pub space_race_id: i32,
    pub ticks_spent: i64,
    pub flag: FlagRaster,
    pub team_color: [f64; 3],
    pub player_names: Vec<String>,
    celestial_bodies: Vec<(String, i32)>,
}

impl Default for SpaceRace {
    fn default() -> Self {
        SpaceRace {
            team_name: DEFAULT_TEAM_NAME.to_owned(),
            space_race_id: 0,
            ticks_spent: 0,
            flag: FlagRaster::default(),
            team_color: DEFAULT_TEAM_COLOR,
            player_names: Vec::new(),
            celestial_bodies: Vec::new(),
        }
    }
}

impl SpaceRace {
    pub fn celestial_bodies(&self) -> &[(String, i32)] {
        &self.celestial_bodies
    }

    /// time_taken returns the time it took to reach the given celestial body, if it was reached.
    pub fn time_taken(&self, body_name: &str) -> Option<i32> {
        self.celestial_bodies
            .iter()
            .find(|(name, _)| name == body_name)
            .map(|&(_, time_taken)| time_taken)
    }

    /// set_time_taken stores the time for a celestial body. A body that is already known keeps its
    /// position and gets the new time.
    pub fn set_time_taken(&mut self, body_name: &str, time_taken: i32) {
        match self
            .celestial_bodies
            .iter_mut()
            .find(|(name, _)| name == body_name)
        {
            Some(entry) => entry.1 = time_taken,
            None => self
                .celestial_bodies
                .push((body_name.to_owned(), time_taken)),
        }
    }

    /// decode reads a race from its race entry. Each field is optional, absent fields keep their
    /// default values.
    pub fn decode(node: &Compound) -> SpaceRace {
        let mut race = SpaceRace::default();

        if let Some(team_name) = node.get(KEY_TEAM_NAME).and_then(Tag::as_str) {
            race.team_name = team_name.to_owned();
        }

        if let Some(space_race_id) = node.get(KEY_SPACE_RACE_ID).and_then(Tag::as_i64) {
            race.space_race_id = space_race_id as i32;
        }

        if let Some(ticks_spent) = node.get(KEY_TICKS_SPENT).and_then(Tag::as_i64) {
            race.ticks_spent = ticks_spent;
        }

        race.flag = FlagRaster::decode(node);

        for (component, key) in race.team_color.iter_mut().zip(KEYS_TEAM_COLOR.iter()) {
            if let Some(val) = node.get(key).and_then(Tag::as_f64) {
                *component = val;
            }
        }

        if let Some(player_list) = node.get(KEY_PLAYER_LIST).and_then(Tag::as_list) {
            race.player_names.extend(
                player_list
                    .compounds()
                    .filter_map(|player| player.get(KEY_PLAYER_NAME).and_then(Tag::as_str))
                    .map(str::to_owned),
            );
        }

        if let Some(body_list) = node.get(KEY_CELESTIAL_BODY_LIST).and_then(Tag::as_list) {
            for body in body_list.compounds() {
                let body_name = match body.get(KEY_CELESTIAL_BODY_NAME).and_then(Tag::as_str) {
                    Some(body_name) => body_name,
                    None => continue,
                };
                let time_taken = body
                    .get(KEY_TIME_TAKEN)
                    .and_then(Tag::as_i64)
                    .unwrap_or(0);

                race.set_time_taken(body_name, time_taken as i32);
            }
        }

        race
    }

    /// encode writes all fields of the race into its race entry. The player and celestial body
    /// lists are rebuilt from the current state, previous list entries are discarded.
    pub fn encode(&self, node: &mut Compound) {
        node.insert(KEY_TEAM_NAME, Tag::String(self.team_name.to_owned()));
        node.insert(KEY_SPACE_RACE_ID, Tag::Int(self.space_race_id));
        node.insert(KEY_TICKS_SPENT, Tag::Long(self.ticks_spent));

        self.flag.encode(node);

        for (&component, key) in self.team_color.iter().zip(KEYS_TEAM_COLOR.iter()) {
            node.insert(*key, Tag::Double(component));
        }

        let mut player_list = ListTag::new(TagId::Compound);

        for player_name in self.player_names.iter() {
            let mut player = Compound::new();
            player.insert(KEY_PLAYER_NAME, Tag::String(player_name.to_owned()));
            player_list.items.push(Tag::Compound(player));
        }

        node.insert(KEY_PLAYER_LIST, player_list);

        let mut body_list = ListTag::new(TagId::Compound);

        for (body_name, time_taken) in self.celestial_bodies.iter() {
            let mut body = Compound::new();
            body.insert(KEY_CELESTIAL_BODY_NAME, Tag::String(body_name.to_owned()));
            body.insert(KEY_TIME_TAKEN, Tag::Int(*time_taken));
            body_list.items.push(Tag::Compound(body));
        }

        node.insert(KEY_CELESTIAL_BODY_LIST, body_list);
    }
}

impl fmt::Display for SpaceRace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let players = if self.player_names.is_empty() {
            "None".to_owned()
        } else {
            self.player_names.join(", ")
        };

        let bodies = if self.celestial_bodies.is_empty() {
            "None".to_owned()
        } else {
            self.celestial_bodies
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<&str>>()
                .join(", ")
        };

        writeln!(f, "Space Race #{}: {}", self.space_race_id, self.team_name)?;
        writeln!(f, "  Players: {}", players)?;
        writeln!(
            f,
            "  Flag Size: {}x{}",
            self.flag.width(),
            self.flag.height()
        )?;
        writeln!(
            f,
            "  Team Color: RGB({:.2}, {:.2}, {:.2})",
            self.team_color[0], self.team_color[1], self.team_color[2]
        )?;
        writeln!(f, "  Celestial Bodies Visited: {}", bodies)?;
        write!(f, "  Ticks Spent: {}", self.ticks_spent)
    }
}
