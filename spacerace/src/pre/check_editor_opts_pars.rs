use crate::pre::editor_opts::EditorOpts;
use crate::pre::read_editor_pars::EditorPars;
use anyhow::Context;
use std::path::Path;
use thiserror::Error;

/// Maximum flag size (per side) that can be imported.
pub const MAX_IMPORT_DIMENSION: u32 = 1024;

/// InputValueError is used if some editor option or parameter does not fulfill the posed
/// requirements, e.g., an import without input image.
#[derive(Debug, Clone, Error)]
#[error("Invalid input value")]
pub struct InputValueError;

/// check_editor_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_editor_opts_pars(opts: &EditorOpts, pars: &EditorPars) -> anyhow::Result<()> {
    // PART 1: EDITOR OPTIONS
    if opts.import_index.is_some() && opts.image.is_none() {
        return Err(InputValueError).context("--image is required when importing a flag!");
    }

    if opts.import_index.is_none() && opts.image.is_some() {
        return Err(InputValueError).context("--image is only used together with --import!");
    }

    if opts.export.is_none() && opts.output.is_some() {
        return Err(InputValueError).context("--output is only used together with --export!");
    }

    // PART 2: EDITOR PARAMETERS
    for (name, val) in [
        ("flag_width", pars.flag_width),
        ("flag_height", pars.flag_height),
    ] {
        if !(1..=MAX_IMPORT_DIMENSION).contains(&val) {
            return Err(InputValueError).context(format!(
                "{} is {}px, which is not within the reasonable range of [1, {}]px!",
                name, val, MAX_IMPORT_DIMENSION
            ));
        }
    }

    let race_data_file = Path::new(&pars.race_data_file);

    if pars.race_data_file.is_empty()
        || race_data_file.file_name() != Some(race_data_file.as_os_str())
    {
        return Err(InputValueError).context(format!(
            "race_data_file must be a bare file name, but is \"{}\"!",
            pars.race_data_file
        ));
    }

    Ok(())
}
