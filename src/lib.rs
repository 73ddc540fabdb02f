//! AgriTech client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod api;
pub mod app;
pub mod backend;
pub mod chat;
pub mod commands;
pub mod config;
pub mod dialog_coordinator;
pub mod events;
pub mod input_state;
pub mod logging;
pub mod protocol;
pub mod state;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod integration_tests;
