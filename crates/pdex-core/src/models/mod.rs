//! Data models shared by the extraction pipeline and its front ends.

pub mod config;
pub mod profile;
