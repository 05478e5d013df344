pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{fts_dir_in, get_fts_dir};
pub use paths::{format_path_with_tilde, read_html_file, validate_dataset_name};
