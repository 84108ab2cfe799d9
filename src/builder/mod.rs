// public modules
pub mod config;
pub mod core;

// private modules
mod setters;

pub use self::core::{build_tree, Id3Builder};
