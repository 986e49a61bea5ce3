use std::collections::HashMap;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::types::{ImageAnnotation, Shape, ANNOTATION_VERSION};

/// Class id written for every polygon in the forward direction. The source
/// datasets are single-class; the class name only surfaces in data.yaml.
pub const FORWARD_CLASS_ID: usize = 0;

/// Convert an annotation to YOLOv8 segmentation label lines.
///
/// Emits one line per polygon shape, `0 x1 y1 x2 y2 ...` with every
/// coordinate normalized to [0, 1] by the image dimensions. Shapes of any
/// other type produce no output.
pub fn convert_to_segmentation_labels(annotation: &ImageAnnotation) -> String {
    let width = annotation.image_width as f64;
    let height = annotation.image_height as f64;

    let mut yolo_data = String::with_capacity(annotation.shapes.len() * 64);
    for shape in &annotation.shapes {
        if shape.shape_type != "polygon" {
            continue;
        }
        yolo_data.push_str(&format!("{}", FORWARD_CLASS_ID));
        for &(x, y) in &shape.points {
            // Shortest-form float formatting, so 10px in a 100px image
            // round-trips as "0.1" rather than a fixed precision.
            yolo_data.push_str(&format!(" {} {}", x / width, y / height));
        }
        yolo_data.push('\n');
    }

    yolo_data
}

/// One parsed YOLOv8 label line: a class id and normalized polygon points.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub class_id: usize,
    pub points: Vec<(f64, f64)>,
}

/// Parse a single YOLOv8 label line.
///
/// Returns `Ok(None)` for blank lines. An odd coordinate-token count is an
/// error rather than a silent truncation, as is any non-numeric token.
pub fn parse_label_line(line: &str, path: &Path, line_num: usize) -> Result<Option<LabelLine>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let class_id = tokens[0]
        .parse::<usize>()
        .map_err(|_| ConvertError::LabelParse {
            path: path.to_path_buf(),
            line: line_num,
            message: format!(
                "invalid class id '{}'; expected non-negative integer",
                tokens[0]
            ),
        })?;

    let coords = &tokens[1..];
    if coords.len() % 2 != 0 {
        return Err(ConvertError::LabelParse {
            path: path.to_path_buf(),
            line: line_num,
            message: format!(
                "odd number of coordinate tokens ({}); expected x y pairs",
                coords.len()
            ),
        });
    }

    let mut points = Vec::with_capacity(coords.len() / 2);
    for pair in coords.chunks_exact(2) {
        let x = parse_coordinate(pair[0], path, line_num)?;
        let y = parse_coordinate(pair[1], path, line_num)?;
        points.push((x, y));
    }

    Ok(Some(LabelLine { class_id, points }))
}

fn parse_coordinate(raw: &str, path: &Path, line_num: usize) -> Result<f64> {
    raw.parse::<f64>().map_err(|_| ConvertError::LabelParse {
        path: path.to_path_buf(),
        line: line_num,
        message: format!("invalid coordinate '{raw}'; expected floating-point number"),
    })
}

/// Build a polygon shape from a parsed label line, scaling the normalized
/// points back to pixel coordinates.
///
/// A class id outside `class_names` is fatal.
pub fn shape_from_label_line(
    row: &LabelLine,
    class_names: &[String],
    width: u32,
    height: u32,
    path: &Path,
    line_num: usize,
) -> Result<Shape> {
    let label = class_names
        .get(row.class_id)
        .ok_or_else(|| ConvertError::LabelParse {
            path: path.to_path_buf(),
            line: line_num,
            message: format!(
                "class id {} is out of range for class list with {} entr{}",
                row.class_id,
                class_names.len(),
                if class_names.len() == 1 { "y" } else { "ies" }
            ),
        })?;

    let points = row
        .points
        .iter()
        .map(|&(x, y)| (x * width as f64, y * height as f64))
        .collect();

    Ok(Shape {
        label: label.clone(),
        text: String::new(),
        points,
        group_id: None,
        shape_type: "polygon".to_string(),
        flags: HashMap::new(),
    })
}

/// Assemble the annotation record written by the reverse converter.
pub fn build_annotation(
    image_name: &str,
    width: u32,
    height: u32,
    shapes: Vec<Shape>,
) -> ImageAnnotation {
    ImageAnnotation {
        version: ANNOTATION_VERSION.to_string(),
        flags: HashMap::new(),
        shapes,
        image_path: image_name.to_string(),
        image_data: None,
        image_height: height,
        image_width: width,
        text: String::new(),
    }
}
