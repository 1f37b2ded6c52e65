//! TUI widgets for margintop.

mod error_banner;
mod filters;
mod header;
mod help;
mod quit_confirm;
mod sidebar;
mod skeleton;
mod summary;
mod table;

pub use error_banner::{ERROR_HEIGHT, render_error};
pub use filters::{FILTERS_HEIGHT, render_filters};
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use sidebar::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH, render_sidebar};
pub use skeleton::render_skeleton;
pub use summary::{SUMMARY_HEIGHT, render_summary};
pub use table::render_table;
