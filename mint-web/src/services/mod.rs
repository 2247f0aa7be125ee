//! Browser services

pub mod ethereum;
