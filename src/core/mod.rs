//! The uninstall sequencer and its steps.

pub mod artifacts;
pub mod crontab;
pub mod paths;
pub mod sequencer;
pub mod service;
