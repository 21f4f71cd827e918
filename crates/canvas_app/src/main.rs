//! # canvas_app
//!
//! Builds a canvas store, runs a few views over it, destroys an entity and
//! reports again. Useful for eyeballing store behaviour with
//! `RUST_LOG=canvas_ecs=trace`.

mod config;
mod scene;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use canvas_ecs::Context;
use canvas_utilities::Clock;
use config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::parse();

    // Initialise structured logging.
    let filter = match &config.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::from_default_env().add_directive("canvas_app=info".parse()?),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut clock = Clock::new();
    let mut ctx = Context::new();

    let starter = scene::build_starter(&mut ctx)?;
    let shapes = scene::spawn_shapes(&mut ctx, config.shapes)?;
    info!(
        rect = %starter.rect,
        empty = %starter.empty,
        anchor = %starter.anchor,
        shapes = shapes.len(),
        "scene ready"
    );
    scene::report(&ctx);

    ctx.destroy(starter.rect);
    info!(entity = %starter.rect, "destroyed");
    scene::report(&ctx);

    info!(elapsed = clock.tick(), "done");
    Ok(())
}
