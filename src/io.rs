use glob::glob;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::{OutputDirs, SplitDirs, IMG_FORMATS};
use crate::utils::create_output_directory;

/// Set up the root directory structure for YOLOv8 dataset output
pub fn setup_output_directories(output_dir: &Path) -> std::io::Result<OutputDirs> {
    let images_dir = create_output_directory(&output_dir.join("images"))?;
    let labels_dir = create_output_directory(&output_dir.join("labels"))?;

    Ok(OutputDirs {
        root: output_dir.to_path_buf(),
        images_dir,
        labels_dir,
    })
}

/// Set up the image/label output directories for one dataset split
pub fn setup_split_directories(
    output_dirs: &OutputDirs,
    subfolder: &str,
) -> std::io::Result<SplitDirs> {
    let images_dir = create_output_directory(&output_dirs.images_dir.join(subfolder))?;
    let labels_dir = create_output_directory(&output_dirs.labels_dir.join(subfolder))?;

    Ok(SplitDirs {
        images_dir,
        labels_dir,
    })
}

/// List the image files of a directory, sorted lexicographically by name.
///
/// Sorting makes manifest ordering deterministic across platforms; raw
/// directory order is filesystem-defined.
pub fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConvertError::InputDirMissing(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = IMG_FORMATS
        .iter()
        .flat_map(|ext| {
            let pattern = format!("{}/*.{}", dir.display(), ext);
            glob(&pattern)
                .expect("Failed to read image glob pattern")
                .filter_map(|entry| entry.ok())
                .collect::<Vec<_>>()
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Write a split manifest: relative image paths, newline-joined without a
/// trailing newline.
pub fn write_manifest(path: &Path, entries: &[String]) -> std::io::Result<()> {
    fs::write(path, entries.join("\n"))
}

/// Create the data.yaml descriptor for YOLOv8 training.
///
/// The template is static and always names both split manifests, whether or
/// not a Validation split was produced.
pub fn write_dataset_yaml(output_root: &Path, class_name: &str) -> std::io::Result<()> {
    let yaml_content = format!(
        "Train: Train.txt\nValidation: Validation.txt\nnames:\n  0: {}\npath: .",
        class_name
    );

    let mut dataset_yaml = BufWriter::new(File::create(output_root.join("data.yaml"))?);
    dataset_yaml.write_all(yaml_content.as_bytes())
}
