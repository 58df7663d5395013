//! rasdesk-cli library - modules exposed for unit tests

pub mod app;
pub mod commands;
pub mod render;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;
