//! Future Dates Core Library
//!
//! Core logic for a sidebar extension that surfaces upcoming
//! date-stamped daily notes and every note that mentions them, with
//! bounded excerpts around each mention. Host capabilities (vault
//! reads, link cache, configuration, navigation, the panel surface)
//! are injected through the traits in [`host`].

pub mod date;
pub mod error;
pub mod excerpt;
pub mod graph;
pub mod host;
pub mod logging;
pub mod panel;
pub mod plugin;
pub mod scanner;
