pub mod environment;
pub mod files;

pub use environment::{DATASET_ENV_VAR, get_dataset_path};
pub use files::{open_dataset_file, validate_file_size};
