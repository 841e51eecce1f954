//! Rainbow Lorenz attractor that draws itself in while slowly spinning.
//!
//! Run with: `RUST_LOG=debug cargo run --bin lorenz-rainbow`

use lorenz_overlay::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    Overlay::new()
        .with_style(RenderStyle::rainbow())
        .with_title("Lorenz Attractor (rainbow)")
        .run()?;
    Ok(())
}
