//! First-person grid viewer.
//!
//! Controls  ↑/↓ move · ←/→ turn · Esc quit
//!
//! ```bash
//! cargo run --release -- --map level.png --wall wall.png --sprite bush.png
//! ```

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use tracing_subscriber::EnvFilter;

use raycaster_rs::{
    assets::{LevelFiles, load_level},
    config::RenderConfig,
    renderer::{Renderer, Software},
    sim::{InputCmd, apply_input},
    world::TextureBank,
};

#[derive(Parser, Debug)]
#[command(about = "Grid raycaster with billboard sprites")]
struct Args {
    /// Occupancy map image (white = empty, black = wall, green = decoration)
    #[arg(long, default_value = "level.png")]
    map: PathBuf,

    /// Wall texture
    #[arg(long, default_value = "wall.png")]
    wall: PathBuf,

    /// Decoration billboard texture
    #[arg(long, default_value = "bush.png")]
    sprite: PathBuf,

    /// TOML render config; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ray-march step, overrides the config file
    #[arg(long)]
    step: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    if let Some(step) = args.step {
        config.step_size = step;
        config.validate()?;
    }

    let mut bank = TextureBank::default_with_checker();
    let files = LevelFiles {
        map: args.map,
        wall: args.wall,
        billboard: args.sprite,
    };
    let scene = load_level(&files, &config.legend(), &mut bank)?;
    scene.check_textures(&bank);

    let (w, h) = (config.screen_width, config.screen_height);
    let mut pose = config.start_pose();
    let speed = config.player_speed;

    let mut win = Window::new(
        "Raycaster",
        w * config.pixel_scale,
        h * config.pixel_scale,
        WindowOptions {
            scale: Scale::FitScreen,
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    win.set_target_fps(60);

    let mut renderer = Software::new(config);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();
    let mut last_frame = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        /* --------------- one InputCmd per frame --------------------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd.turn -= 1.0;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd.turn += 1.0;
        }
        apply_input(&mut pose, cmd, &scene.map, speed, dt);

        /* draw */
        let t0 = Instant::now();
        renderer.begin_frame(w, h);
        renderer.draw_scene(&scene, &pose, &bank);
        acc_time += t0.elapsed();
        acc_frames += 1;

        let mut shown = Ok(());
        renderer.end_frame(|fb, fw, fh| shown = win.update_with_buffer(fb, fw, fh));
        shown?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            tracing::info!(
                "avg render: {:.2} ms  ({:.1} FPS)",
                avg_ms,
                1000.0 / avg_ms
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
