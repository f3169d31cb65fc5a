#![deny(unsafe_code)]
//! CLI binary for driftfield.
//!
//! Subcommands:
//! - `render <opts>` — step a field N times, write one PNG frame
//! - `animate <opts>` — drive the frame loop, write a numbered PNG sequence
//! - `list` — print available presets

mod error;

use clap::{Parser, Subcommand};
use driftfield_core::{Field, FieldConfig, FrameDriver, Scene};
use driftfield_render::{draw_frame, snapshot, Pixmap};
use error::CliError;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "driftfield", about = "Decorative particle-field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Step a field N times and write a single PNG frame.
    Render {
        /// Frame width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Frame height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of simulation steps before the snapshot.
        #[arg(short, long, default_value_t = 300)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Preset name (aurora, banner, constellation, mist).
        #[arg(short, long, default_value = "aurora")]
        preset: String,

        /// Config overrides as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Drive the frame loop and write a numbered PNG sequence.
    Animate {
        /// Frame width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Frame height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of frames to write.
        #[arg(short, long, default_value_t = 90)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Preset name (aurora, banner, constellation, mist).
        #[arg(short, long, default_value = "aurora")]
        preset: String,

        /// Config overrides as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Frame-rate throttle; falls back to the preset's target_fps.
        #[arg(long)]
        fps: Option<f64>,

        /// Output directory for the frame sequence.
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,
    },
    /// List available presets.
    List,
}

/// Builds a validated scene from the shared render/animate flags.
fn build_scene(
    width: usize,
    height: usize,
    seed: u64,
    frames: usize,
    preset: &str,
    params: &str,
) -> Result<Scene, CliError> {
    let params: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let config = FieldConfig::preset(preset)?.merge_json(&params);
    let scene = Scene {
        width,
        height,
        seed,
        frames,
        config,
    };
    scene.validate()?;
    Ok(scene)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = FieldConfig::preset_names();
            if cli.json {
                let info = serde_json::json!({ "presets": presets });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                println!("  {}", presets.join(", "));
            }
        }
        Command::Render {
            width,
            height,
            steps,
            seed,
            preset,
            params,
            output,
        } => {
            let scene = build_scene(width, height, seed, steps, &preset, &params)?;
            let mut field = Field::new(&scene.config, scene.viewport()?, scene.seed);
            for _ in 0..steps {
                field.step();
            }

            let mut pixmap = Pixmap::new(width, height)?;
            draw_frame(&field, &scene.config, &mut pixmap)?;
            snapshot::write_png(&pixmap, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {preset} ({width}x{height}, {steps} steps, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
        Command::Animate {
            width,
            height,
            frames,
            seed,
            preset,
            params,
            fps,
            output,
        } => {
            let scene = build_scene(width, height, seed, frames, &preset, &params)?;
            std::fs::create_dir_all(&output)
                .map_err(|e| CliError::Io(format!("cannot create {}: {e}", output.display())))?;

            let mut field = Field::new(&scene.config, scene.viewport()?, scene.seed);
            let mut pixmap = Pixmap::new(width, height)?;
            let config = scene.config;
            let dir = output.clone();

            let written = Rc::new(Cell::new(0_usize));
            let failure: Rc<RefCell<Option<driftfield_core::FieldError>>> =
                Rc::new(RefCell::new(None));

            let mut driver = FrameDriver::new();
            driver.set_target_fps(fps.or(config.target_fps));
            let written_cb = Rc::clone(&written);
            let failure_cb = Rc::clone(&failure);
            driver.start(move |_timestamp| {
                if failure_cb.borrow().is_some() {
                    return;
                }
                field.step();
                let path = dir.join(format!("frame_{:04}.png", written_cb.get()));
                let result = draw_frame(&field, &config, &mut pixmap)
                    .and_then(|_| snapshot::write_png(&pixmap, &path));
                match result {
                    Ok(()) => written_cb.set(written_cb.get() + 1),
                    Err(e) => *failure_cb.borrow_mut() = Some(e),
                }
            });

            while written.get() < frames && failure.borrow().is_none() {
                driver.frame();
                thread::sleep(Duration::from_millis(1));
            }
            driver.stop();

            if let Some(e) = failure.borrow_mut().take() {
                return Err(e.into());
            }

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "output": output.display().to_string(),
                    "frames_written": written.get(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "animated {preset} ({width}x{height}, {frames} frames, seed {seed}) -> {}/",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
