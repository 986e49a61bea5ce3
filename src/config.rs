use clap::Parser;

use crate::types::DEFAULT_CLASS_NAME;

/// Command-line arguments for converting polygon JSON annotations to a
/// YOLOv8 segmentation dataset.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ForwardArgs {
    /// Directory containing Train/ (and optionally Validation/) subfolders
    /// of images and JSON annotations
    #[arg(short = 'i', long = "input_dir")]
    pub input_dir: String,

    /// Directory to write the YOLOv8 dataset to
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: String,

    /// Process only the Train subfolder, skipping Validation
    #[arg(long = "train_only")]
    pub train_only: bool,

    /// Name recorded for class 0 in data.yaml
    #[arg(long = "class_name", default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,
}

/// Command-line arguments for converting a YOLOv8 segmentation dataset back
/// to polygon JSON annotations.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ReverseArgs {
    /// Directory containing the dataset images
    #[arg(short = 'i', long = "image_dir")]
    pub image_dir: String,

    /// Directory containing the YOLOv8 label files
    #[arg(short = 'l', long = "label_dir")]
    pub label_dir: String,

    /// Number of classes in the dataset
    #[arg(short = 'n', long = "num_classes")]
    pub num_classes: usize,

    /// The ordered class name list
    #[arg(long = "class_names", use_value_delimiter = true, required = true)]
    pub class_names: Vec<String>,

    /// Directory to write images and JSON annotations to
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: String,
}
