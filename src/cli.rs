//! Reference host: still renders and a live preview window.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use crt_filter::{CrtConfig, CrtResult, PostProcessor, SampleFilter, Texture2D};
use minifb::Key;
use tracing::info;

#[derive(Parser)]
#[command(name = "crt-filter", version, about = "Apply a CRT display look to images")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter an image once and write the result
    Render {
        input: PathBuf,
        output: PathBuf,
        /// TOML file with [crt] and [sampler] tables
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Frame time driving the flicker phase
        #[arg(short, long)]
        time: Option<f32>,
        /// Use nearest-texel sampling instead of bilinear
        #[arg(long)]
        nearest: bool,
    },
    /// Show the filtered image in a window, flickering in real time
    Preview {
        input: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        nearest: bool,
    },
    /// Print the default configuration as TOML
    Defaults,
}

fn load_config(path: Option<&Path>, nearest: bool) -> CrtResult<CrtConfig> {
    let mut config = match path {
        Some(path) => CrtConfig::load(path)?,
        None => CrtConfig::default(),
    };
    if nearest {
        config.sampler.filter = SampleFilter::Nearest;
    }
    Ok(config)
}

pub fn render(input: &Path, output: &Path, config: Option<&Path>, time: Option<f32>, nearest: bool) -> CrtResult<()> {
    let mut config = load_config(config, nearest)?;
    if let Some(time) = time {
        config.crt.time = time;
    }

    let texture = Texture2D::load(input)?.with_filter(config.sampler.filter);
    let mut post_processor = PostProcessor::new(texture.width(), texture.height(), config.crt);
    post_processor.process(&texture);
    post_processor.to_rgba_image().save(output)?;

    info!(input = %input.display(), output = %output.display(), "wrote filtered image");
    Ok(())
}

pub fn preview(input: &Path, config: Option<&Path>, nearest: bool) -> CrtResult<()> {
    let config = load_config(config, nearest)?;
    let texture = Texture2D::load(input)?.with_filter(config.sampler.filter);
    let (width, height) = (texture.width(), texture.height());

    let mut post_processor = PostProcessor::new(width, height, config.crt);
    let mut buffer = vec![0; width * height];

    let mut window = minifb::Window::new("CRT Filter", width, height, minifb::WindowOptions::default())?;
    window.set_target_fps(60);

    let start = Instant::now();
    let base_time = config.crt.time;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        post_processor.set_time(base_time + start.elapsed().as_secs_f32());
        post_processor.process(&texture);
        post_processor.write_argb_buffer(&mut buffer);
        window.update_with_buffer(&buffer, width, height)?;
    }

    Ok(())
}

pub fn print_defaults() -> CrtResult<()> {
    print!("{}", CrtConfig::default().to_toml_string()?);
    Ok(())
}
