use anyhow::Context;
use clap::Parser;
use spacerace::core::flag_editor::FlagEditor;
use spacerace::interfaces::world_save::WorldSave;
use spacerace::post::race_summary::{print_race_summaries, print_race_summaries_json};
use spacerace::pre::check_editor_opts_pars::check_editor_opts_pars;
use spacerace::pre::editor_opts::EditorOpts;
use spacerace::pre::read_editor_pars::{read_editor_pars, EditorPars};

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get editor options from the command line arguments and read editor parameters (if given)
    let opts: EditorOpts = EditorOpts::parse();

    // set up logging (RUST_LOG overrides the default filter)
    let default_filter = if opts.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let pars = match opts.parfile_path.as_ref() {
        Some(parfile_path) => read_editor_pars(parfile_path)?,
        None => EditorPars::default(),
    };

    // check editor options and parameters
    check_editor_opts_pars(&opts, &pars)?;

    // load the space races of the world
    let mut world_save = WorldSave::open(&opts.world_path, &pars.race_data_file)
        .context("Failed to open world folder!")?;
    let mut roster = world_save
        .load_roster()
        .context("Failed to load space race data!")?;

    // no vector rasterizer is available in this build -> SVG imports are reported as unsupported
    let editor = FlagEditor::new(None);

    // EXECUTION -----------------------------------------------------------------------------------
    // LIST ----------------------------------------------------------------------------------------
    if opts.list_requested() {
        let summaries = editor.list(&roster);

        if opts.json {
            print_race_summaries_json(&summaries)?;
        } else {
            print_race_summaries(&summaries);
        }
    }

    // EXPORT --------------------------------------------------------------------------------------
    if let Some(index) = opts.export {
        let output_path = opts.export_path(index);
        editor
            .export_to_path(&roster, index, &output_path)
            .context(format!("Failed to export flag of space race {}!", index))?;
        println!("RESULT: Flag exported to {}", output_path.display());
    }

    // IMPORT --------------------------------------------------------------------------------------
    if let (Some(index), Some(image_path)) = (opts.import_index, opts.image.as_ref()) {
        let mode = opts.mode.unwrap_or(pars.default_mode);

        editor
            .import_from_path(
                &mut roster,
                index,
                image_path,
                pars.flag_width,
                pars.flag_height,
                mode,
            )
            .context(format!("Failed to import flag into space race {}!", index))?;

        // POST-PROCESSING -------------------------------------------------------------------------
        // save the modified race data back to the world
        let saved_path = world_save
            .save_roster(&roster, pars.create_backup)
            .context("Failed to save space race data!")?;

        println!("RESULT: Flag imported, space race data saved to {}", saved_path.display());
        println!("Done! Remember to backup your world before using the modified save.");
    }

    Ok(())
}
