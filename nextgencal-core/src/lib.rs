//! Core library for the nextgencal assistant.
//!
//! This crate provides everything the CLI builds on:
//! - `Event` — the validated, normalized calendar event
//! - `export` — ICS generation, Google/Outlook deep links, download filenames
//! - `store` — the locally persisted event list
//! - `config` — global configuration

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod store;

pub use error::{NextgencalError, NextgencalResult};
pub use event::Event;
