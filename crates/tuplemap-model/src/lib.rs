//! Demonstration models used as mapping sources and destinations.
//!
//! Each model carries two string fields. [`ModelA`] is the mapping source;
//! [`ModelB`] and [`ModelC`] are destinations whose fields are derived from
//! `ModelA` by the demonstration profile.

#![deny(unsafe_code)]

pub mod models;

pub use models::{ModelA, ModelB, ModelC};
