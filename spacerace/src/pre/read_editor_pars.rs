use crate::core::flag_raster::{ScaleMode, IMPORT_FLAG_HEIGHT, IMPORT_FLAG_WIDTH};
use crate::interfaces::world_save::DEFAULT_RACE_DATA_FILE;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// * `flag_width` - (px) Width of imported flags
/// * `flag_height` - (px) Height of imported flags
/// * `default_mode` - Scaling mode used if none is given on the command line -> stretch, pad
/// * `create_backup` - Copy the race data file to a backup file before overwriting it
/// * `race_data_file` - Name of the race data file in the data folder of the world
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EditorPars {
    pub flag_width: u32,
    pub flag_height: u32,
    pub default_mode: ScaleMode,
    pub create_backup: bool,
    pub race_data_file: String,
}

impl Default for EditorPars {
    fn default() -> Self {
        EditorPars {
            flag_width: IMPORT_FLAG_WIDTH,
            flag_height: IMPORT_FLAG_HEIGHT,
            default_mode: ScaleMode::Stretch,
            create_backup: true,
            race_data_file: DEFAULT_RACE_DATA_FILE.to_owned(),
        }
    }
}

/// read_editor_pars reads the JSON file and decodes the JSON string into the editor parameters
/// struct. Parameters missing in the file keep their default values.
pub fn read_editor_pars(filepath: &Path) -> anyhow::Result<EditorPars> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .with_context(|| format!("Failed to open parameter file {}!", filepath.display()))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh)
        .with_context(|| format!("Failed to parse parameter file {}!", filepath.display()))?;
    Ok(pars)
}
