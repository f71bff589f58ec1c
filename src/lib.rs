//! Overlapping histogram comparison of two sample files.
//!
//! [`run`] is the whole program: echo the input paths, load both sample sets,
//! bin them into a [`figure::Figure`] and hand it to a [`render::Renderer`].

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod figure;
pub mod render;
pub mod ui;

use std::io::Write;

use anyhow::{Context, Result};

use cli::Args;
use data::loader::load_samples;
use figure::{Figure, HistogramConfig};
use render::Renderer;

/// Echo both paths to `out`, then load, bin and render.
///
/// Paths are written before either file is opened.
pub fn run(args: &Args, out: &mut dyn Write, renderer: &dyn Renderer) -> Result<()> {
    writeln!(out, "{}", args.pure.display())?;
    writeln!(out, "{}", args.mixed.display())?;
    out.flush()?;

    let config = HistogramConfig::default();
    let [first, second] = config.labels;

    let pure = load_samples(first, &args.pure).context("loading first sample set")?;
    log::info!("Loaded {} {first} samples", pure.len());
    let mixed = load_samples(second, &args.mixed).context("loading second sample set")?;
    log::info!("Loaded {} {second} samples", mixed.len());

    let figure = Figure::histogram(&config, &[pure, mixed])?;
    renderer.render(&figure)
}
