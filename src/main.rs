mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tfrt::logger::init_logger;
use tfrt::output;
use tfrt::render::{render, render_parallel};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let now = Instant::now();
    info!("Starting, at {}", chrono::offset::Local::now());

    let scene = args
        .scene_config()?
        .build()
        .context("invalid scene parameters")?;
    let format = args.image_format()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the render thread pool")?;
    }

    let mut framebuffer = scene.framebuffer();
    let stats = if args.sequential {
        render(&scene, &mut framebuffer)?
    } else {
        render_parallel(&scene, &mut framebuffer)?
    };
    info!("{} pixels covered by {}", stats.hits, scene.sphere);

    output::save(&framebuffer, format, args.encoding, &args.output)
        .with_context(|| format!("could not write {}", args.output.display()))?;

    info!("Render time : {}s", now.elapsed().as_secs_f32());
    Ok(())
}
