//! Terminal watch library
//!
//! Clock, stopwatch and countdown timer panels with analog dials, switched
//! between by a section menu.

pub mod app;
pub mod chime;
pub mod config;
pub mod error;
pub mod event;
pub mod state;
pub mod ui;
