//! Reusable UI components for the artbrowse TUI

pub mod artwork_table;
pub mod paginator;
pub mod selection_panel;
pub mod toast;

pub use artwork_table::ArtworkTable;
pub use paginator::{PageChangeEvent, Paginator};
pub use toast::Toast;
