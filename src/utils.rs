use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::ImageAnnotation;

/// Read and parse a single annotation JSON file.
///
/// Parsing is strict: a file missing `shapes`, `imageHeight` or `imageWidth`
/// is rejected here instead of faulting later in the conversion.
pub fn read_and_parse_json(path: &Path) -> Result<ImageAnnotation> {
    let file = File::open(path)?;
    serde_json::from_reader(file).map_err(|source| ConvertError::AnnotationParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the pixel dimensions of an image from its header, without decoding.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let size = imagesize::size(path).map_err(|source| ConvertError::ImageDimensions {
        path: path.to_path_buf(),
        source,
    })?;

    let width =
        u32::try_from(size.width).map_err(|_| dimension_overflow(path, "width", size.width))?;
    let height =
        u32::try_from(size.height).map_err(|_| dimension_overflow(path, "height", size.height))?;
    Ok((width, height))
}

fn dimension_overflow(path: &Path, axis: &str, value: usize) -> ConvertError {
    ConvertError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!(
            "image {} {} of {} does not fit in u32",
            axis,
            value,
            path.display()
        ),
    ))
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .expect("progress bar template is valid")
            .progress_chars("#>-"),
    );
    pb
}

/// Create an output directory, reusing it if it already exists.
pub fn create_output_directory(path: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}
