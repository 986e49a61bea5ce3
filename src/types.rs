use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

// Image extensions picked up by both converters. The annotation tooling this
// crate interoperates with only ever writes lowercase .jpg/.png.
pub const IMG_FORMATS: &[&str] = &["jpg", "png"];

/// Annotation-format version stamped into synthesized JSON files.
pub const ANNOTATION_VERSION: &str = "0.4.10";

/// Class name used for the single-class forward conversion unless overridden.
pub const DEFAULT_CLASS_NAME: &str = "product";

/// Dataset split subfolders expected under the forward converter's input root.
pub const TRAIN_SUBFOLDER: &str = "Train";
pub const VALIDATION_SUBFOLDER: &str = "Validation";

// An annotated shape. Only `shape_type` and `points` drive the conversion;
// the remaining fields ride along so a file can round-trip through serde.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Shape {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub text: String,
    pub points: Vec<(f64, f64)>,
    #[serde(default)]
    pub group_id: Option<i64>,
    pub shape_type: String,
    #[serde(default)]
    pub flags: HashMap<String, bool>,
}

// The per-image annotation record. `shapes`, `imageHeight` and `imageWidth`
// are required; a file missing any of them is rejected at parse time.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnnotation {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub flags: HashMap<String, bool>,
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub image_data: Option<String>,
    pub image_height: u32,
    pub image_width: u32,
    #[serde(default)]
    pub text: String,
}

fn default_version() -> String {
    ANNOTATION_VERSION.to_string()
}

/// Paths to the root-level output directories of the forward converter.
pub struct OutputDirs {
    pub root: PathBuf,
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
}

/// Per-split image/label output directories under [`OutputDirs`].
pub struct SplitDirs {
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
}
