use std::{path::Path, sync::Arc};

use clap::Parser;
use specular::{
    config::Config,
    controls::{ControlEvent, Controls},
    raytracer::{self, FrameSnapshot, Image, RenderInfo, RenderMode, Renderer},
    utils,
};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config toml file
    #[arg(short, long)]
    config: Option<String>,
    /// Shading mode, overrides the config
    #[arg(short, long, value_enum)]
    mode: Option<RenderMode>,
    /// Light angle in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    light_angle: Option<f32>,
    /// Maximum number of reflection bounces
    #[arg(short, long, allow_negative_numbers = true)]
    bounces: Option<i64>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// Output png file
    #[arg(short, long)]
    output: Option<String>,
    /// Render this many frames with the light going once around the scene
    #[arg(short, long)]
    sweep: Option<usize>,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(angle) = self.light_angle {
            config.light_angle = angle;
        }
        if let Some(bounces) = self.bounces {
            config.bounce_limit = bounces;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(output) = &self.output {
            config.output = Some(output.into());
        }
    }
}

async fn render_frame(frame: FrameSnapshot, path: &Path) -> anyhow::Result<RenderInfo> {
    let render_image = Arc::new(RwLock::new(Image::new(frame.image_size())));
    let renderer = Arc::new(Renderer::new(frame));

    let render_info = raytracer::render_task(renderer, render_image.clone()).await?;

    render_image.read().await.to_rgba_image().save(path)?;
    info!("Saved render image to '{}'", path.display());
    Ok(render_info)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load command line arguments.
    let args = Args::parse();

    // Initialize logger.
    tracing_subscriber::fmt()
        .with_env_filter("specular=info")
        .init();

    // Load config file if specified, otherwise use default.
    let mut config = match &args.config {
        Some(path) => {
            info!("Loaded config from '{}'", path);
            Config::from_file(&path).await?
        }
        None => {
            info!("Using default config");
            Default::default()
        }
    };
    args.apply_overrides(&mut config);

    let mut controls = Controls::from_config(&config)?;
    let output = config
        .output
        .clone()
        .unwrap_or_else(utils::timestamped_render_path);
    let mut render_info = RenderInfo::default();

    match args.sweep {
        Some(frames) if frames > 0 => {
            let start_angle = controls.light_angle();
            for i in 0..frames {
                let angle = start_angle + 360.0 * i as f32 / frames as f32;
                let frame = controls.apply(ControlEvent::SetLightAngle(angle))?;
                let path = utils::sequence_path(&output, i);
                render_info.merge(&render_frame(frame, &path).await?);
            }
        }
        _ => {
            let frame = controls.snapshot()?;
            render_info.merge(&render_frame(frame, &output).await?);
        }
    }

    info!(
        "Rendered {} frame(s) in {} ms ({} ms per frame, mode {:?}, {} bounce(s))",
        render_info.total_frames,
        render_info.total_time,
        render_info.avg_time_per_frame,
        controls.settings().mode,
        controls.settings().bounce_limit
    );

    Ok(())
}
