//! Polygon JSON to YOLOv8 segmentation converter
//!
//! This library converts LabelMe-style polygon JSON annotations to the
//! YOLOv8 segmentation dataset format for model training, and back again.

pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod labelme_dataset;
pub mod types;
pub mod utils;
pub mod yolo_dataset;

// Re-export commonly used types and functions
pub use config::{ForwardArgs, ReverseArgs};
pub use error::{ConvertError, Result};
pub use labelme_dataset::convert_yolov8_to_labelme;
pub use types::{ImageAnnotation, OutputDirs, Shape, SplitDirs};
pub use yolo_dataset::convert_to_yolov8_segmentation;
