use std::path::PathBuf;
use thiserror::Error;

/// The error type shared by both conversion directions.
///
/// Every variant is fatal to the run: there is no retry policy and no
/// cleanup of already-written output files.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input directory does not exist: {0}")]
    InputDirMissing(PathBuf),

    #[error("Missing annotation file for image {image}: expected {annotation}")]
    MissingAnnotation { image: PathBuf, annotation: PathBuf },

    #[error("Failed to parse annotation JSON {path}: {source}")]
    AnnotationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write annotation JSON {path}: {source}")]
    AnnotationWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed label line {path}:{line}: {message}")]
    LabelParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensions {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
