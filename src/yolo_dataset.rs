use log::info;
use rayon::prelude::*;
use std::fs::{copy, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::conversion::convert_to_segmentation_labels;
use crate::error::{ConvertError, Result};
use crate::io::{
    list_image_files, setup_output_directories, setup_split_directories, write_dataset_yaml,
    write_manifest,
};
use crate::types::{OutputDirs, SplitDirs, TRAIN_SUBFOLDER, VALIDATION_SUBFOLDER};
use crate::utils::{create_progress_bar, read_and_parse_json};

/// Convert a polygon-JSON dataset to a YOLOv8 segmentation dataset.
///
/// `input_dir` must contain a `Train/` subfolder of images with same-named
/// `.json` sidecars, and a `Validation/` subfolder when `include_validation`
/// is set. Produces `images/<split>/`, `labels/<split>/`, one `<split>.txt`
/// manifest per split and a `data.yaml` under `output_dir`.
pub fn convert_to_yolov8_segmentation(
    input_dir: &Path,
    output_dir: &Path,
    include_validation: bool,
    class_name: &str,
) -> Result<()> {
    if !input_dir.is_dir() {
        return Err(ConvertError::InputDirMissing(input_dir.to_path_buf()));
    }

    let output_dirs = setup_output_directories(output_dir)?;

    let subfolders: &[&str] = if include_validation {
        &[TRAIN_SUBFOLDER, VALIDATION_SUBFOLDER]
    } else {
        &[TRAIN_SUBFOLDER]
    };

    for subfolder in subfolders {
        process_split(input_dir, &output_dirs, subfolder)?;
    }

    write_dataset_yaml(&output_dirs.root, class_name)?;
    info!("Conversion process completed successfully.");

    Ok(())
}

/// Process one dataset split: copy its images, write its label files and its
/// manifest.
fn process_split(input_dir: &Path, output_dirs: &OutputDirs, subfolder: &str) -> Result<()> {
    let input_split_dir = input_dir.join(subfolder);
    let split_dirs = setup_split_directories(output_dirs, subfolder)?;

    let image_files = list_image_files(&input_split_dir)?;
    info!(
        "Processing {} image(s) in {}...",
        image_files.len(),
        subfolder
    );

    let pb = create_progress_bar(image_files.len() as u64, subfolder);

    // Parallel per-file work; the order-preserving collect keeps manifest
    // entries aligned with the sorted listing, and the first error aborts.
    let image_list = image_files
        .par_iter()
        .map(|image_path| {
            let entry = process_image(image_path, subfolder, &split_dirs);
            pb.inc(1);
            entry
        })
        .collect::<Result<Vec<String>>>()?;

    pb.finish_with_message(format!("{} processing complete", subfolder));

    let manifest_path = output_dirs.root.join(format!("{}.txt", subfolder));
    write_manifest(&manifest_path, &image_list)?;

    Ok(())
}

/// Convert a single image and its JSON sidecar, returning the manifest entry.
fn process_image(image_path: &Path, subfolder: &str, split_dirs: &SplitDirs) -> Result<String> {
    let file_name = image_path.file_name().unwrap().to_str().unwrap();
    let base_name = image_path.file_stem().unwrap().to_str().unwrap();

    copy(image_path, split_dirs.images_dir.join(file_name))?;

    let json_path = image_path.with_extension("json");
    if !json_path.exists() {
        return Err(ConvertError::MissingAnnotation {
            image: image_path.to_path_buf(),
            annotation: json_path,
        });
    }
    let annotation = read_and_parse_json(&json_path)?;

    let yolo_data = convert_to_segmentation_labels(&annotation);
    let label_path = split_dirs.labels_dir.join(format!("{}.txt", base_name));
    let mut writer = BufWriter::new(File::create(&label_path)?);
    writer.write_all(yolo_data.as_bytes())?;

    Ok(format!("data/images/{}/{}", subfolder, file_name))
}
