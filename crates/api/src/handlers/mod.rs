//! HTTP request handlers, one module per use-case area.

pub mod game;
pub mod profile;
