use crate::core::space_race::SpaceRace;
use serde::Serialize;
use std::fmt;

/// RaceSummary contains the information about a race that is shown when listing the races of a
/// world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceSummary {
    pub index: usize,
    pub space_race_id: i32,
    pub team_name: String,
    pub player_names: Vec<String>,
    pub flag_width: usize,
    pub flag_height: usize,
    pub team_color: [f64; 3],
    pub celestial_bodies: Vec<String>,
    pub ticks_spent: i64,
    #[serde(skip)]
    description: String,
}

impl RaceSummary {
    pub fn new(index: usize, race: &SpaceRace) -> RaceSummary {
        RaceSummary {
            index,
            space_race_id: race.space_race_id,
            team_name: race.team_name.to_owned(),
            player_names: race.player_names.to_owned(),
            flag_width: race.flag.width(),
            flag_height: race.flag.height(),
            team_color: race.team_color,
            celestial_bodies: race
                .celestial_bodies()
                .iter()
                .map(|(name, _)| name.to_owned())
                .collect(),
            ticks_spent: race.ticks_spent,
            description: race.to_string(),
        }
    }
}

impl fmt::Display for RaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.description)
    }
}

/// print_race_summaries prints the race summaries to the console output.
pub fn print_race_summaries(summaries: &[RaceSummary]) {
    if summaries.is_empty() {
        println!("No space races found in this world.");
        return;
    }

    let separator = "=".repeat(60);

    println!("\n{}", separator);
    println!("SPACE RACES");
    println!("{}", separator);

    for summary in summaries.iter() {
        println!("\n{}", summary);
    }

    println!("\n{}\n", separator);
}

/// print_race_summaries_json prints the race summaries as a JSON array to the console output.
pub fn print_race_summaries_json(summaries: &[RaceSummary]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summaries)?);
    Ok(())
}
