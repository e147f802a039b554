//! Command-line arguments.

use clap::{Parser, ValueEnum};

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    /// Human-readable, colorized output for local development.
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

impl std::fmt::Display for TracingFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TracingFormat::Pretty => write!(f, "pretty"),
            TracingFormat::Json => write!(f, "json"),
        }
    }
}

impl TracingFormat {
    fn default_for_build() -> Self {
        if cfg!(debug_assertions) {
            TracingFormat::Pretty
        } else {
            TracingFormat::Json
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "campusd", version, about = "Campus directory API server")]
pub struct Args {
    /// Tracing output format (defaults to pretty in debug builds, json in release).
    #[arg(long, value_enum, default_value_t = TracingFormat::default_for_build())]
    pub tracing: TracingFormat,
}
