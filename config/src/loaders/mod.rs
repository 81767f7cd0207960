//! Loaders of partial configurations, one submodule per format.

pub mod toml;
