//! artbrowse - browse the Art Institute of Chicago collection from a terminal
//!
//! The crate is split into the API client (`artic`), the domain model
//! (`models`), and the terminal interface (`tui`).

pub mod artic;
pub mod config;
pub mod models;
pub mod tui;
