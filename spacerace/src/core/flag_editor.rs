use crate::core::edit_error::EditError;
use crate::core::flag_raster::{FlagRaster, ScaleMode};
use crate::core::race_roster::RaceRoster;
use crate::interfaces::vector_rasterizer::{is_vector_image, VectorRasterizer};
use crate::post::race_summary::RaceSummary;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// FlagEditor provides the editing operations on a loaded roster: listing the races, exporting a
/// flag to an image and importing a flag from an image. A vector rasterizer can be injected to
/// support vector image imports. Every operation validates its inputs before anything is
/// modified.
#[derive(Default)]
pub struct FlagEditor {
    rasterizer: Option<Box<dyn VectorRasterizer>>,
}

impl FlagEditor {
    pub fn new(rasterizer: Option<Box<dyn VectorRasterizer>>) -> FlagEditor {
        FlagEditor { rasterizer }
    }

    pub fn supports_vector_images(&self) -> bool {
        self.rasterizer.is_some()
    }

    /// list returns a summary for every race of the roster.
    pub fn list(&self, roster: &RaceRoster) -> Vec<RaceSummary> {
        roster
            .races()
            .iter()
            .enumerate()
            .map(|(index, race)| RaceSummary::new(index, race))
            .collect()
    }

    /// export returns the flag of the race at the given index as an image.
    pub fn export(&self, roster: &RaceRoster, index: usize) -> Result<RgbImage, EditError> {
        roster.check_index(index)?;
        Ok(roster.races()[index].flag.to_image())
    }

    /// export_to_path saves the flag of the race at the given index as an image file, the image
    /// format is determined by the file extension. Nothing is written for an invalid index.
    pub fn export_to_path(
        &self,
        roster: &RaceRoster,
        index: usize,
        output_path: &Path,
    ) -> Result<(), EditError> {
        let img = self.export(roster, index)?;
        img.save(output_path)?;
        log::info!("Flag exported to {}", output_path.display());
        Ok(())
    }

    /// import replaces the flag of the race at the given index by a flag created from the image.
    /// All other fields and races stay untouched.
    pub fn import(
        &self,
        roster: &mut RaceRoster,
        index: usize,
        img: &DynamicImage,
        target_width: u32,
        target_height: u32,
        mode: ScaleMode,
    ) -> Result<(), EditError> {
        roster.check_index(index)?;

        let flag = FlagRaster::from_image(img, target_width, target_height, mode);

        if let Some(race) = roster.get_mut(index) {
            race.flag = flag;
        }

        Ok(())
    }

    /// import_from_path loads an image file and imports it as flag of the race at the given
    /// index. Index, file existence and vector support are checked before the image is loaded.
    pub fn import_from_path(
        &self,
        roster: &mut RaceRoster,
        index: usize,
        image_path: &Path,
        target_width: u32,
        target_height: u32,
        mode: ScaleMode,
    ) -> Result<(), EditError> {
        roster.check_index(index)?;

        if !image_path.exists() {
            return Err(EditError::NotFound(image_path.to_owned()));
        }

        let img = self.load_image(image_path)?;
        self.import(roster, index, &img, target_width, target_height, mode)?;

        let race = &roster.races()[index];
        log::info!(
            "Flag imported from {} using mode {:?}, applied to space race #{}: {}",
            image_path.display(),
            mode,
            race.space_race_id,
            race.team_name
        );

        Ok(())
    }

    /// load_image opens a raster image, or renders a vector image if a rasterizer is available.
    fn load_image(&self, image_path: &Path) -> Result<DynamicImage, EditError> {
        if !is_vector_image(image_path) {
            return Ok(image::open(image_path)?);
        }

        match self.rasterizer.as_ref() {
            Some(rasterizer) => rasterizer
                .render(image_path)
                .map_err(EditError::Rasterize),
            None => Err(EditError::UnsupportedInput {
                path: image_path.to_owned(),
                reason: "no vector image rasterizer available, convert the image to PNG first"
                    .to_owned(),
            }),
        }
    }
}
