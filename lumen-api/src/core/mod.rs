//! Core types and constants

pub mod types;
