// What you SEE:
// • A picture made of small coloured squares (the "PXLME" logo by default).
// • Move the mouse over it: squares near the cursor fly away and grow.
// • Move away: they spring back home and snap into place. ESC quits.
//
// `--config scene.json` loads other pictures/settings (several surfaces are
// shown side by side). `--headless N --snapshot out.png` renders N frames
// without a window and saves the last one.

use std::path::PathBuf;

use clap::Parser;
use pixel_repel::config::SceneConfig;
use pixel_repel::draw::Drawer;
use pixel_repel::error::Error;
use pixel_repel::headless::HeadlessHost;
use pixel_repel::scheduler::Scheduler;
use pixel_repel::surface::Surface;

#[derive(Parser, Debug)]
#[command(name = "pixel-repel", about = "Pixels that run away from your mouse")]
struct Args {
    /// Scene file (JSON). Defaults to the built-in logo.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames per second; overrides the scene file.
    #[arg(long)]
    fps: Option<usize>,

    /// Render this many frames without opening a window.
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,

    /// Save the last rendered frame as PNG (headless mode only).
    #[arg(long, value_name = "PNG", requires = "headless")]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    /* --- Scene ---
       Visual: decides how many pictures you see and what they look like. */
    let mut scene = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(fps) = args.fps {
        scene.target_fps = fps;
    }
    scene.validate()?;

    let mut scheduler = Scheduler::new();
    for (i, surface_config) in scene.surfaces.iter().enumerate() {
        let surface = Surface::new(surface_config, surface_config.label(i))?;
        scheduler.add_surface(surface);
    }
    let (w, h) = scheduler.window_size();

    /* --- Headless: no window, just frames (and maybe a PNG) --- */
    if let Some(frames) = args.headless {
        let mut host = HeadlessHost::new(frames);
        scheduler.run(&mut host)?;
        if let Some(path) = &args.snapshot {
            host.save_png(path)?;
        }
        return Ok(());
    }

    /* --- Window + frame loop ---
       Visual: the window opens and the squares start reacting to the mouse. */
    let title = match scene.surfaces.as_slice() {
        [only] => only.label(0),
        _ => "pixel-repel".to_string(),
    };
    let mut drawer = Drawer::new(&title, w, h, scene.target_fps)?;
    scheduler.run(&mut drawer)?;

    log::info!("Bye.");
    Ok(())
}
