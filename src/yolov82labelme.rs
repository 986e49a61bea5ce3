use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use labelme2yolov8::{convert_yolov8_to_labelme, ReverseArgs};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ReverseArgs::parse();

    let image_dir = PathBuf::from(&args.image_dir);
    if !image_dir.exists() {
        error!("The specified image_dir does not exist: {}", args.image_dir);
        return ExitCode::FAILURE;
    }

    info!("Starting the conversion process...");

    let label_dir = PathBuf::from(&args.label_dir);
    let output_dir = PathBuf::from(&args.output_dir);
    match convert_yolov8_to_labelme(
        &image_dir,
        &label_dir,
        args.num_classes,
        &args.class_names,
        &output_dir,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to convert dataset: {}", e);
            ExitCode::FAILURE
        }
    }
}
