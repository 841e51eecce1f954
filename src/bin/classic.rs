//! White Lorenz attractor drawing itself in over a fixed camera.
//!
//! Run with: `cargo run --bin lorenz-classic`

use lorenz_overlay::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    Overlay::new()
        .with_style(RenderStyle::classic())
        .run()?;
    Ok(())
}
