pub mod file;
pub mod logging;
pub mod naming;

pub use file::{
    ensure_directory_exists, free_destination, is_same_file, relocate_to_directory, safe_move_file,
};
pub use logging::init_logging;
pub use naming::{clean_name, numbered_file_name, resolve_full_name, unique_file_name};
