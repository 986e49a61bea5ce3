use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs::{self, copy, File};
use std::io::BufWriter;
use std::path::Path;

use crate::conversion::{build_annotation, parse_label_line, shape_from_label_line};
use crate::error::{ConvertError, Result};
use crate::io::list_image_files;
use crate::utils::{create_output_directory, create_progress_bar, image_dimensions};

/// Convert a YOLOv8 segmentation dataset back to polygon-JSON annotations.
///
/// Every image in `image_dir` with a same-named label file in `label_dir` is
/// copied to `output_dir` next to a synthesized `<base>.json`; images without
/// a label file are skipped. `class_names` maps label-file class ids to shape
/// labels; `num_classes` is accepted for caller intent only.
pub fn convert_yolov8_to_labelme(
    image_dir: &Path,
    label_dir: &Path,
    num_classes: usize,
    class_names: &[String],
    output_dir: &Path,
) -> Result<()> {
    if num_classes != class_names.len() {
        warn!(
            "num_classes ({}) does not match the {} provided class name(s)",
            num_classes,
            class_names.len()
        );
    }

    create_output_directory(output_dir)?;

    let image_files = list_image_files(image_dir)?;
    info!(
        "Processing {} image(s) from {}...",
        image_files.len(),
        image_dir.display()
    );

    let pb = create_progress_bar(image_files.len() as u64, "Annotations");

    let converted = image_files
        .par_iter()
        .map(|image_path| {
            let result = process_image(image_path, label_dir, class_names, output_dir);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<bool>>>()?;

    pb.finish_with_message("Annotation processing complete");

    let converted_count = converted.iter().filter(|&&done| done).count();
    info!(
        "Converted {} of {} image(s); {} skipped without a label file.",
        converted_count,
        converted.len(),
        converted.len() - converted_count
    );

    Ok(())
}

/// Convert one image and its label file. Returns `Ok(false)` when the image
/// has no label file and was skipped.
fn process_image(
    image_path: &Path,
    label_dir: &Path,
    class_names: &[String],
    output_dir: &Path,
) -> Result<bool> {
    let file_name = image_path.file_name().unwrap().to_str().unwrap();
    let base_name = image_path.file_stem().unwrap().to_str().unwrap();

    let label_path = label_dir.join(format!("{}.txt", base_name));
    if !label_path.exists() {
        debug!("No label file for {}; skipping", image_path.display());
        return Ok(false);
    }

    // The only reason image bytes are opened in this direction: the label
    // coordinates are normalized and the JSON record needs pixel dimensions.
    let (width, height) = image_dimensions(image_path)?;

    copy(image_path, output_dir.join(file_name))?;

    let content = fs::read_to_string(&label_path)?;
    let mut shapes = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let Some(row) = parse_label_line(line, &label_path, line_num)? else {
            continue;
        };
        shapes.push(shape_from_label_line(
            &row,
            class_names,
            width,
            height,
            &label_path,
            line_num,
        )?);
    }

    let annotation = build_annotation(file_name, width, height, shapes);
    let json_path = output_dir.join(format!("{}.json", base_name));
    let writer = BufWriter::new(File::create(&json_path)?);
    serde_json::to_writer_pretty(writer, &annotation).map_err(|source| {
        ConvertError::AnnotationWrite {
            path: json_path,
            source,
        }
    })?;

    Ok(true)
}
