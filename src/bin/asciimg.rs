use std::{
    io::{stdout, Write as _},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::Context as _;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use asciimg::{
    decode, render, resolve_transparency, AnimationController, AnimationState, LoopMode,
    RenderOptions,
};

#[derive(Parser, Debug)]
#[command(name = "asciimg", version, about = "Play images and GIF animations as ASCII art in the terminal")]
struct Cli {
    /// Input image path (GIF; PNG and JPG are detected but not decoded yet).
    path: PathBuf,

    /// Output width in character columns.
    #[arg(long, default_value_t = 70)]
    width: u32,

    /// Glyph palette, darkest first; each value is one palette entry.
    #[arg(long = "chars", num_args = 1..)]
    characters: Option<Vec<String>>,

    /// Wrap each glyph in a 24-bit color escape carrying the pixel color.
    #[arg(long)]
    color: bool,

    /// Append a trailing newline to the last frame.
    #[arg(long)]
    padding: bool,

    /// Playback speed in frames per second.
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Play the animation once instead of looping.
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read(&cli.path)
        .with_context(|| format!("read '{}'", cli.path.display()))?;
    let store = resolve_transparency(decode(&raw)?)?;

    let mut options = RenderOptions {
        target_width: cli.width,
        color: cli.color,
        padding: cli.padding,
        ..RenderOptions::default()
    };
    if let Some(characters) = cli.characters {
        options.characters = characters;
    }

    let frames = render(&store, &options)?;

    // A still image prints once; an animation takes over the screen.
    if frames.len() == 1 {
        println!("{}", frames[0]);
        return Ok(());
    }

    let mut controller = AnimationController::new(frames.len(), cli.fps);
    if cli.once {
        controller.set_loop_mode(LoopMode::Once);
    }
    controller.play();

    let mut out = stdout();
    loop {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        out.write_all(frames[controller.current_frame()].as_bytes())?;
        out.write_all(b"\r\n")?;
        out.flush()?;

        thread::sleep(Duration::from_millis(controller.interval_ms()));

        if !controller.tick() && controller.state() == AnimationState::Finished {
            break;
        }
    }

    Ok(())
}
