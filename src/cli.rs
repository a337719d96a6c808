//! Command-line interface parsing for the travel guide
//!
//! Every flag is optional and overrides the matching field of the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::theme::{SidebarLayout, Theme};

/// Travel Guide - browse destinations from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "travelguide")]
#[command(about = "A terminal travel guide with a sidebar menu and attraction cards")]
#[command(version)]
pub struct Cli {
    /// Colour theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Sidebar layout
    #[arg(long, value_enum)]
    pub layout: Option<SidebarLayout>,

    /// Directory that attraction image paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Page to open on startup
    ///
    /// Examples:
    ///   travelguide --page "Top Attractions"
    ///   travelguide --page itineraries
    #[arg(long, value_name = "NAME")]
    pub page: Option<String>,

    /// Config file to read instead of the per-user default
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
