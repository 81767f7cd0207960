//! # Config
//!
//! Configuration of the wallet daemon: a __total__ [`Config`](config::Config)
//! assembled from per-environment defaults plus a __partial__ configuration
//! loaded from a TOML file.

#![deny(rust_2018_idioms)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub mod config;
pub mod defaults;
pub mod dirs;
pub mod loaders;
