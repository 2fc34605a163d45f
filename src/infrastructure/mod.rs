//! Infrastructure layer for filesystem locations in the plugin sandbox.

pub mod paths;

pub use paths::get_data_dir;
