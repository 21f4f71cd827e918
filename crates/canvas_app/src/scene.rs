//! Starter scene built on the store.

use anyhow::Result;
use tracing::{debug, info};

use canvas_ecs::{Component, Context, Entity};
use canvas_utilities::{Color, Matrix, Vector};

/// Marks an entity as renderable and names its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub shape: String,
}

impl Drawable {
    #[must_use]
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

impl Component for Drawable {
    fn type_name() -> &'static str {
        "Drawable"
    }
}

/// Entities created by [`build_starter`].
#[derive(Debug, Clone, Copy)]
pub struct Starter {
    /// Positioned and drawable.
    pub rect: Entity,
    /// No components at all.
    pub empty: Entity,
    /// Positioned only.
    pub anchor: Entity,
}

/// Spawn the three-entity starter scene.
pub fn build_starter(ctx: &mut Context) -> Result<Starter> {
    let rect = ctx.entity();
    let empty = ctx.entity();
    let anchor = ctx.entity();

    ctx.attach(rect, Vector::new(10.0, 20.0))?;
    ctx.attach(anchor, Vector::new(10.0, 20.0))?;
    ctx.attach(rect, Drawable::new("rect"))?;

    debug!(%rect, %empty, %anchor, "starter scene built");
    Ok(Starter {
        rect,
        empty,
        anchor,
    })
}

/// Spawn `count` drawable shapes laid out along a row, each with a fill
/// color and a transform.
pub fn spawn_shapes(ctx: &mut Context, count: usize) -> Result<Vec<Entity>> {
    const SHAPES: [&str; 3] = ["circle", "rect", "line"];

    let mut spawned = Vec::with_capacity(count);
    for (i, shape) in SHAPES.iter().cycle().take(count).enumerate() {
        let e = ctx.entity();
        let offset = Vector::new(i as f64 * 50.0, 0.0);
        ctx.attach(e, offset)?;
        ctx.attach(e, Drawable::new(*shape))?;
        ctx.attach(e, Matrix::from_translation(offset))?;
        ctx.attach(e, Color::rgb(0, (i * 40 % 256) as u8, 255))?;
        spawned.push(e);
    }
    Ok(spawned)
}

/// Log what the main views currently return.
pub fn report(ctx: &Context) {
    let positioned: Vec<Entity> = ctx.view::<(Vector,)>().collect();
    let drawn: Vec<Entity> = ctx.view::<(Vector, Drawable)>().collect();
    let colored = ctx.view::<(Drawable, Color, Matrix)>().count();
    info!(
        live = ctx.len(),
        positioned = positioned.len(),
        drawn = drawn.len(),
        colored,
        "canvas state"
    );
    for e in drawn {
        if let (Some(pos), Some(drawable)) = (ctx.get::<Vector>(e), ctx.get::<Drawable>(e)) {
            debug!(entity = %e, shape = %drawable.shape, x = pos.x, y = pos.y, "drawable");
        }
    }
}
