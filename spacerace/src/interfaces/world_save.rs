use crate::core::edit_error::EditError;
use crate::core::race_roster::RaceRoster;
use nbt::{Compression, NbtFile};
use std::fs;
use std::path::{Path, PathBuf};

pub const LEVEL_DAT_FILE: &str = "level.dat";
pub const DATA_DIR: &str = "data";
pub const DEFAULT_RACE_DATA_FILE: &str = "GCSpaceRaceData.dat";
const BACKUP_SUFFIX: &str = ".backup";

/// WorldSave locates the space race data file of a world folder and handles loading and saving
/// it. The name and compression of a loaded file are reused when the file is written back.
#[derive(Debug)]
pub struct WorldSave {
    world_path: PathBuf,
    race_data_path: PathBuf,
    root_name: String,
    compression: Compression,
}

impl WorldSave {
    /// open checks that the folder is a world folder (i.e. contains a level.dat).
    pub fn open(world_path: &Path, race_data_file: &str) -> Result<WorldSave, EditError> {
        let level_dat_path = world_path.join(LEVEL_DAT_FILE);

        if !level_dat_path.is_file() {
            return Err(EditError::NotFound(level_dat_path));
        }

        Ok(WorldSave {
            world_path: world_path.to_owned(),
            race_data_path: world_path.join(DATA_DIR).join(race_data_file),
            root_name: String::new(),
            compression: Compression::Gzip,
        })
    }

    pub fn world_path(&self) -> &Path {
        &self.world_path
    }

    pub fn race_data_path(&self) -> &Path {
        &self.race_data_path
    }

    /// backup_path returns the path the race data file is copied to before it is overwritten.
    pub fn backup_path(&self) -> PathBuf {
        let mut file_name = self
            .race_data_path
            .file_name()
            .map(|name| name.to_owned())
            .unwrap_or_default();
        file_name.push(BACKUP_SUFFIX);
        self.race_data_path.with_file_name(file_name)
    }

    /// load_roster reads the race data file. A world without race data file has no races yet,
    /// which results in an empty roster.
    pub fn load_roster(&mut self) -> Result<RaceRoster, EditError> {
        if !self.race_data_path.is_file() {
            log::info!(
                "No space race data found at {}, the world may not have any space races yet",
                self.race_data_path.display()
            );
            return Ok(RaceRoster::default());
        }

        log::info!(
            "Loading space race data from {}",
            self.race_data_path.display()
        );
        let nbt_file = nbt::read_file(&self.race_data_path)?;
        self.root_name = nbt_file.name.to_owned();
        self.compression = nbt_file.compression;

        RaceRoster::load(&nbt_file.root)
    }

    /// save_roster writes the roster to the race data file and returns its path. An existing file
    /// is copied to a backup file first if indicated.
    pub fn save_roster(
        &self,
        roster: &RaceRoster,
        create_backup: bool,
    ) -> Result<PathBuf, EditError> {
        // encode before touching the disk
        let nbt_file = NbtFile {
            name: self.root_name.to_owned(),
            root: roster.to_root()?,
            compression: self.compression,
        };

        if let Some(data_dir) = self.race_data_path.parent() {
            fs::create_dir_all(data_dir)?;
        }

        if create_backup && self.race_data_path.is_file() {
            let backup_path = self.backup_path();
            fs::copy(&self.race_data_path, &backup_path)?;
            log::info!("Backup created: {}", backup_path.display());
        }

        nbt::write_file(&nbt_file, &self.race_data_path)?;
        log::info!(
            "Space race data saved to {}",
            self.race_data_path.display()
        );

        Ok(self.race_data_path.to_owned())
    }
}
