//! margintop - Back-margin dashboard library.
//!
//! This library provides the pieces behind the `margintop` viewer:
//! - `model` - record type, sample data, filter option lists
//! - `view` - filter/sort/paginate/summarize derivation
//! - `store` - fetched records plus loading/error flags
//! - `api` - HTTP and sample record sources
//! - `tui` - interactive terminal dashboard

pub mod api;
pub mod fmt;
pub mod model;
pub mod store;
pub mod tui;
pub mod view;
