//! Server configuration, from flags or environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::logging::LogFormat;

/// Art gallery catalog server.
#[derive(Debug, Clone, Parser)]
#[command(name = "art-gallery", version, about)]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "ART_GALLERY_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// JSON document holding the catalog. Created with default data if missing.
    #[arg(long, env = "ART_GALLERY_DATA_FILE", default_value = "gallery.json")]
    pub data_file: PathBuf,

    /// Log output format.
    #[arg(long, env = "ART_GALLERY_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

/// CLI spelling of [`LogFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
