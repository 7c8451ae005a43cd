//! Batch driver: replay a placement job from a JSON file and write the
//! composited frame as an image.
//!
//! ```text
//! placeboard <job.json>
//! ```
//!
//! Job format:
//!
//! ```json
//! {
//!   "background": "detected.jpg",
//!   "coordinates": "coordinates.txt",
//!   "opacity": 80,
//!   "label_font": "DejaVuSans.ttf",
//!   "placements": [{ "image": "sofa.png", "x": 30.0, "y": 30.0 }],
//!   "output": "composited.png"
//! }
//! ```

use anyhow::{Context as _, bail};
use placeboard::{Compositor, Session};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Job {
    background: PathBuf,
    coordinates: PathBuf,
    #[serde(default = "default_opacity")]
    opacity: f32,
    label_font: Option<PathBuf>,
    #[serde(default)]
    placements: Vec<PlacementSpec>,
    output: PathBuf,
}

/// One replayed press: select `image`, then press at `(x, y)`.
#[derive(Debug, Deserialize)]
struct PlacementSpec {
    image: PathBuf,
    x: f32,
    y: f32,
}

fn default_opacity() -> f32 {
    100.0
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(job_path), None) = (args.next(), args.next()) else {
        bail!("usage: placeboard <job.json>");
    };
    let job_path = PathBuf::from(job_path);

    let job: Job = serde_json::from_str(
        &std::fs::read_to_string(&job_path)
            .with_context(|| format!("reading job file {}", job_path.display()))?,
    )
    .with_context(|| format!("parsing job file {}", job_path.display()))?;

    let mut session = Session::new();
    session.load_regions_from_path(&job.coordinates);
    session.load_background_from_path(&job.background);
    if !session.has_background() {
        bail!("{}", session.status());
    }
    session.set_opacity_percent(job.opacity);

    for spec in &job.placements {
        let bytes = std::fs::read(&spec.image)
            .with_context(|| format!("reading overlay {}", spec.image.display()))?;
        session.select_image_bytes(&bytes, None);
        session.pointer_down(spec.x, spec.y);
        session.pointer_up();
        info!(image = %spec.image.display(), x = spec.x, y = spec.y, status = session.status(), "press replayed");
    }

    let compositor = match &job.label_font {
        Some(font) => Compositor::new()
            .with_label_font_file(font)
            .with_context(|| format!("loading label font {}", font.display()))?,
        None => Compositor::new(),
    };

    let frame = session.render(&compositor).context("rendering frame")?;
    frame
        .save(&job.output)
        .with_context(|| format!("writing {}", job.output.display()))?;
    info!(output = %job.output.display(), "frame written");

    Ok(())
}
