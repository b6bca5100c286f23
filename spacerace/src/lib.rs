pub mod core {
    pub mod color_codec;
    pub mod edit_error;
    pub mod flag_editor;
    pub mod flag_raster;
    pub mod race_roster;
    pub mod space_race;
}

pub mod interfaces {
    pub mod vector_rasterizer;
    pub mod world_save;
}

pub mod post {
    pub mod race_summary;
}

pub mod pre {
    pub mod check_editor_opts_pars;
    pub mod editor_opts;
    pub mod read_editor_pars;
}

#[cfg(test)]
mod test_helpers {
    use crate::core::color_codec::pack;
    use crate::core::space_race::SpaceRace;
    use nbt::{Compound, ListTag, Tag};

    /// compact_flag_node creates a race entry containing a compact flag with the given rows of
    /// unsigned colors.
    pub fn compact_flag_node(width: i32, height: i32, rows: &[Vec<[u8; 3]>]) -> Compound {
        let mut node = Compound::new();
        node.insert("FWidth", Tag::Int(width));
        node.insert("FHeight", Tag::Int(height));

        for (y, row) in rows.iter().enumerate() {
            let row = row.iter().map(|&rgb| pack(rgb)).collect();
            node.insert(format!("FRow{}", y), Tag::IntArray(row));
        }

        node
    }

    pub fn race(team_name: &str, space_race_id: i32) -> SpaceRace {
        let mut race = SpaceRace::default();
        race.team_name = team_name.to_owned();
        race.space_race_id = space_race_id;
        race.ticks_spent = 1000 + space_race_id as i64;
        race.team_color = [0.1, 0.2, 0.3];
        race.player_names = vec![format!("{}_captain", team_name), "Steve".to_owned()];
        race.set_time_taken("moon", 3600);
        race
    }

    pub fn root_with_races(race_entries: Vec<Compound>) -> Compound {
        let mut data = Compound::new();
        data.insert("SpaceRaceList", ListTag::of_compounds(race_entries));
        data.insert("OtherData", Tag::Int(7));

        let mut root = Compound::new();
        root.insert("data", data);
        root.insert("DataVersion", Tag::Int(1343));
        root
    }
}



#[cfg(test)]
mod space_race_tests {
    use crate::core::flag_raster::FlagRaster;
    use crate::core::space_race::SpaceRace;
    use crate::test_helpers::{compact_flag_node, race};
    use approx::assert_ulps_eq;
    use nbt::{Compound, ListTag, Tag, TagId};

    fn player(name: &str) -> Compound {
        let mut player = Compound::new();
        player.insert("PlayerName", Tag::String(name.to_owned()));
        player
    }

    fn body(name: &str, time_taken: Option<i32>) -> Compound {
        let mut body = Compound::new();
        body.insert("CelestialBodyName", Tag::String(name.to_owned()));
        if let Some(time_taken) = time_taken {
            body.insert("TimeTaken", Tag::Int(time_taken));
        }
        body
    }

    #[test]
    fn test_decode_defaults() {
        let race = SpaceRace::decode(&Compound::new());

        assert_eq!(race.team_name, "Unnamed");
        assert_eq!(race.space_race_id, 0);
        assert_eq!(race.ticks_spent, 0);
        assert_eq!(race.flag, FlagRaster::default());
        assert_ulps_eq!(race.team_color[0], 0.5);
        assert_ulps_eq!(race.team_color[2], 0.5);
        assert!(race.player_names.is_empty());
        assert!(race.celestial_bodies().is_empty());
    }
    #[test]
    fn test_decode_fields() {
        let mut node = compact_flag_node(1, 1, &[vec![[255, 255, 255]]]);
        node.insert("TeamName", Tag::String("Rocketeers".to_owned()));
        node.insert("SpaceRaceID", Tag::Int(4));
        node.insert("TicksSpent", Tag::Long(5_000_000_000));
        node.insert("teamColorR", Tag::Double(0.25));
        node.insert("teamColorB", Tag::Double(1.0));
        node.insert(
            "PlayerList",
            ListTag::of_compounds(vec![player("Alex"), Compound::new(), player("Alex")]),
        );
        let race = SpaceRace::decode(&node);

        assert_eq!(race.team_name, "Rocketeers");
        assert_eq!(race.space_race_id, 4);
        assert_eq!(race.ticks_spent, 5_000_000_000);
        assert_eq!(race.flag.pixel(0, 0), Some([127, 127, 127]));
        assert_ulps_eq!(race.team_color[0], 0.25);
        assert_ulps_eq!(race.team_color[1], 0.5);
        assert_ulps_eq!(race.team_color[2], 1.0);
        assert_eq!(race.player_names, vec!["Alex", "Alex"]);
    }
    #[test]
    fn test_decode_celestial_bodies() {
        let mut node = Compound::new();
        node.insert(
            "CelestialBodyList",
            ListTag::of_compounds(vec![
                body("moon", Some(100)),
                body("mars", None),
                Compound::new(),
                body("moon", Some(300)),
            ]),
        );
        let race = SpaceRace::decode(&node);

        assert_eq!(
            race.celestial_bodies(),
            &[("moon".to_owned(), 300), ("mars".to_owned(), 0)]
        );
        assert_eq!(race.time_taken("moon"), Some(300));
        assert_eq!(race.time_taken("venus"), None);
    }
    #[test]
    fn test_encode_field_types() {
        let mut node = Compound::new();
        race("Rocketeers", 3).encode(&mut node);

        assert_eq!(node.get("TeamName").map(Tag::id), Some(TagId::String));
        assert_eq!(node.get("SpaceRaceID"), Some(&Tag::Int(3)));
        assert_eq!(node.get("TicksSpent"), Some(&Tag::Long(1003)));
        assert_eq!(node.get("teamColorG"), Some(&Tag::Double(0.2)));
        assert_eq!(node.get("FWidth"), Some(&Tag::Int(20)));
        assert_eq!(node.get("FHeight"), Some(&Tag::Int(14)));

        let bodies = node.get("CelestialBodyList").and_then(Tag::as_list).unwrap();
        let moon = bodies.compounds().next().unwrap();
        assert_eq!(moon.get("CelestialBodyName").and_then(Tag::as_str), Some("moon"));
        assert_eq!(moon.get("TimeTaken"), Some(&Tag::Int(3600)));
    }
    #[test]
    fn test_encode_defaults_unconditionally() {
        let mut node = Compound::new();
        SpaceRace::default().encode(&mut node);

        for key in [
            "TeamName",
            "SpaceRaceID",
            "TicksSpent",
            "teamColorR",
            "teamColorG",
            "teamColorB",
            "PlayerList",
            "CelestialBodyList",
        ] {
            assert!(node.contains_key(key), "missing key {}", key);
        }

        let players = node.get("PlayerList").and_then(Tag::as_list).unwrap();
        assert!(players.is_empty());
        assert_eq!(players.element, TagId::Compound);
    }
    #[test]
    fn test_encode_rebuilds_lists() {
        let mut node = Compound::new();
        node.insert(
            "PlayerList",
            ListTag::of_compounds(vec![player("Stale1"), player("Stale2"), player("Stale3")]),
        );
        race("Rocketeers", 3).encode(&mut node);

        let decoded = SpaceRace::decode(&node);
        assert_eq!(decoded.player_names, vec!["Rocketeers_captain", "Steve"]);
    }
    #[test]
    fn test_round_trip() {
        let race = race("Rocketeers", 3);
        let mut node = Compound::new();
        race.encode(&mut node);

        assert_eq!(SpaceRace::decode(&node), race);
    }
    #[test]
    fn test_set_time_taken_keeps_order() {
        let mut race = SpaceRace::default();
        race.set_time_taken("moon", 1);
        race.set_time_taken("mars", 2);
        race.set_time_taken("moon", 3);

        assert_eq!(
            race.celestial_bodies(),
            &[("moon".to_owned(), 3), ("mars".to_owned(), 2)]
        );
    }
    #[test]
    fn test_display() {
        let text = race("Rocketeers", 3).to_string();

        assert!(text.starts_with("Space Race #3: Rocketeers\n"));
        assert!(text.contains("  Players: Rocketeers_captain, Steve\n"));
        assert!(text.contains("  Flag Size: 20x14\n"));
        assert!(text.contains("  Team Color: RGB(0.10, 0.20, 0.30)\n"));
        assert!(text.contains("  Celestial Bodies Visited: moon\n"));
        assert!(text.ends_with("  Ticks Spent: 1003"));

        let text = SpaceRace::default().to_string();
        assert!(text.contains("  Players: None\n"));
        assert!(text.contains("  Celestial Bodies Visited: None\n"));
    }
}



#[cfg(test)]
mod race_summary_tests {
    use crate::post::race_summary::RaceSummary;
    use crate::test_helpers::race;

    #[test]
    fn test_display() {
        let summary = RaceSummary::new(4, &race("Rocketeers", 3));
        assert!(summary
            .to_string()
            .starts_with("[4] Space Race #3: Rocketeers\n"));
    }
    #[test]
    fn test_json() {
        let summary = RaceSummary::new(0, &race("Rocketeers", 3));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["team_name"], "Rocketeers");
        assert_eq!(json["flag_width"], 20);
        assert_eq!(json["celestial_bodies"][0], "moon");
        assert!(json.get("description").is_none());
    }
}


#[cfg(test)]
mod pre_tests {
    use crate::core::flag_raster::ScaleMode;
    use crate::pre::check_editor_opts_pars::check_editor_opts_pars;
    use crate::pre::editor_opts::EditorOpts;
    use crate::pre::read_editor_pars::{read_editor_pars, EditorPars};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> EditorOpts {
        EditorOpts::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_opts_default_action_is_list() {
        let opts = parse(&["flag-editor", "world"]);

        assert_eq!(opts.world_path, PathBuf::from("world"));
        assert!(opts.list_requested());
        assert_eq!(opts.mode, None);
    }
    #[test]
    fn test_opts_export() {
        let opts = parse(&["flag-editor", "world", "--export", "2"]);

        assert!(!opts.list_requested());
        assert_eq!(opts.export, Some(2));
        assert_eq!(opts.export_path(2), PathBuf::from("flag_race_2.png"));

        let opts = parse(&["flag-editor", "world", "--export", "2", "-o", "out.png"]);
        assert_eq!(opts.export_path(2), PathBuf::from("out.png"));
    }
    #[test]
    fn test_opts_import() {
        let opts = parse(&[
            "flag-editor",
            "world",
            "--import",
            "1",
            "--image",
            "flag.png",
            "--mode",
            "pad",
        ]);

        assert_eq!(opts.import_index, Some(1));
        assert_eq!(opts.image, Some(PathBuf::from("flag.png")));
        assert_eq!(opts.mode, Some(ScaleMode::Pad));
    }
    #[test]
    fn test_opts_invalid_mode() {
        assert!(EditorOpts::try_parse_from(["flag-editor", "world", "--mode", "crop"]).is_err());
    }
    #[test]
    fn test_check_import_requires_image() {
        let opts = parse(&["flag-editor", "world", "--import", "0"]);
        assert!(check_editor_opts_pars(&opts, &EditorPars::default()).is_err());

        let opts = parse(&["flag-editor", "world", "--import", "0", "-i", "flag.png"]);
        assert!(check_editor_opts_pars(&opts, &EditorPars::default()).is_ok());
    }
    #[test]
    fn test_check_pars() {
        let opts = parse(&["flag-editor", "world"]);

        let pars = EditorPars {
            flag_width: 0,
            ..Default::default()
        };
        assert!(check_editor_opts_pars(&opts, &pars).is_err());

        let pars = EditorPars {
            race_data_file: "../evil.dat".to_owned(),
            ..Default::default()
        };
        assert!(check_editor_opts_pars(&opts, &pars).is_err());

        let pars = EditorPars {
            race_data_file: String::new(),
            ..Default::default()
        };
        assert!(check_editor_opts_pars(&opts, &pars).is_err());
    }
    #[test]
    fn test_read_editor_pars() {
        let dir = tempfile::tempdir().unwrap();
        let parfile_path = dir.path().join("pars.json");
        fs::write(&parfile_path, r#"{"default_mode": "pad", "create_backup": false}"#).unwrap();

        let pars = read_editor_pars(&parfile_path).unwrap();
        assert_eq!(pars.default_mode, ScaleMode::Pad);
        assert!(!pars.create_backup);
        assert_eq!(pars.flag_width, 48);
        assert_eq!(pars.flag_height, 32);
        assert_eq!(pars.race_data_file, "GCSpaceRaceData.dat");
    }
    #[test]
    fn test_read_editor_pars_errors() {
        let dir = tempfile::tempdir().unwrap();
        let parfile_path = dir.path().join("pars.json");

        assert!(read_editor_pars(&parfile_path).is_err());

        fs::write(&parfile_path, r#"{"flag_widht": 10}"#).unwrap();
        assert!(read_editor_pars(&parfile_path).is_err());
    }
}
