//! Travel Guide library
//!
//! Exposes the navigation shell, pages and rendering so the binary and the
//! integration tests drive the same code.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod shell;
pub mod theme;
pub mod ui;
