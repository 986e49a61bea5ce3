use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use labelme2yolov8::{convert_to_yolov8_segmentation, ForwardArgs};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ForwardArgs::parse();

    let input_dir = PathBuf::from(&args.input_dir);
    if !input_dir.exists() {
        error!("The specified input_dir does not exist: {}", args.input_dir);
        return ExitCode::FAILURE;
    }

    info!("Starting the conversion process...");

    let output_dir = PathBuf::from(&args.output_dir);
    match convert_to_yolov8_segmentation(
        &input_dir,
        &output_dir,
        !args.train_only,
        &args.class_name,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to convert dataset: {}", e);
            ExitCode::FAILURE
        }
    }
}
