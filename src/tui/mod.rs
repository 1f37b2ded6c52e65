//! Terminal user interface for the margintop viewer.
//!
//! An interactive dashboard over back-margin records: summary cards,
//! filter bar, sortable paginated table, and a collapsible sidebar.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, PopupState};
