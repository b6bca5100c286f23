use crate::core::flag_raster::ScaleMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "flag-editor",
    about = "Edit space race flags in world saves (48x32 pixels)",
    after_help = "Examples:
  List all space races:
    flag-editor /path/to/world

  Export a flag:
    flag-editor /path/to/world --export 0 --output flag.png

  Import a flag (automatically resized to 48x32):
    flag-editor /path/to/world --import 0 --image my_flag.png"
)]
pub struct EditorOpts {
    // ARGUMENTS -----------------------------------------------------------------------------------
    /// Set path to the world folder (containing level.dat)
    pub world_path: PathBuf,

    // FLAGS ---------------------------------------------------------------------------------------
    /// List all space races (default action if neither export nor import is requested)
    #[arg(short, long)]
    pub list: bool,

    /// Print the race list as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Activate debug logging
    #[arg(short, long)]
    pub debug: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Export the flag of the space race at INDEX
    #[arg(long, value_name = "INDEX")]
    pub export: Option<usize>,

    /// Import a flag into the space race at INDEX (the world is saved afterwards)
    #[arg(long = "import", value_name = "INDEX")]
    pub import_index: Option<usize>,

    /// Set output image path for export (default: flag_race_<INDEX>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set input image path for import
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Set scaling mode for import: 'stretch' fills the flag, 'pad' preserves the aspect ratio
    /// and pads with black (default taken from the parameter file, otherwise stretch)
    #[arg(short, long, value_enum)]
    pub mode: Option<ScaleMode>,

    /// Set path to an optional editor parameter file (JSON)
    #[arg(short, long)]
    pub parfile_path: Option<PathBuf>,
}

impl EditorOpts {
    /// list_requested returns true if the races should be listed, which is also the default action
    /// if neither export nor import is requested.
    pub fn list_requested(&self) -> bool {
        self.list || (self.export.is_none() && self.import_index.is_none())
    }

    /// export_path returns the output path for the export of the race at the given index.
    pub fn export_path(&self, index: usize) -> PathBuf {
        self.output
            .to_owned()
            .unwrap_or_else(|| PathBuf::from(format!("flag_race_{}.png", index)))
    }
}
