//! Data models for statement extraction.

pub mod config;
pub mod statement;
pub mod summary;
