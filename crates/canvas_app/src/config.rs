//! Command line configuration.

use clap::Parser;

/// Build a small canvas, query it, and log what the store holds.
#[derive(Debug, Clone, Parser)]
#[command(name = "canvas_app", about = "Canvas entity-component store demo")]
pub struct AppConfig {
    /// Number of extra shapes to spawn after the starter scene
    #[arg(short, long, default_value_t = 3)]
    pub shapes: usize,

    /// Tracing filter, overrides `RUST_LOG` (e.g. `canvas_ecs=trace`)
    #[arg(short, long)]
    pub log: Option<String>,
}
