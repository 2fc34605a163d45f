//! Data layer producing simulated titles.
//!
//! - [`source`]: The [`TitleSource`] trait, one method per result shape
//! - [`manager`]: [`DataManager`], the flag-driven implementation

pub mod manager;
pub mod source;

pub use manager::DataManager;
pub use source::TitleSource;
