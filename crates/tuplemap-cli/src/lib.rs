//! Library components for the tuplemap demonstration driver.

#![allow(missing_docs)]

pub mod demo;
pub mod logging;
pub mod summary;
pub mod transcript;
