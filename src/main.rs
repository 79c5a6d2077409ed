//! Twini Golf entry point
//!
//! Headless driver: plays one synchronized shot and reports where the balls
//! came to rest. Rendering and audio live outside this crate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use twini_golf::Settings;
use twini_golf::sim::{GameEvent, GameState, TickInput, tick};

#[derive(Parser, Debug)]
#[command(about = "Play one twin-ball shot without a window")]
struct Args {
    /// Settings JSON (defaults to the built-in layout)
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Pointer-down position as X,Y
    #[arg(long, value_parser = parse_point, default_value = "320,300")]
    press: Vec2,
    /// Pointer-up position as X,Y
    #[arg(long, value_parser = parse_point, default_value = "320,420")]
    release: Vec2,
    /// Stop after this many frames even if balls still roll
    #[arg(long, default_value_t = 2000)]
    max_frames: u64,
    /// Put the balls back on their spawns once they stop
    #[arg(long)]
    reset_after: bool,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn run() -> Result<()> {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let mut state = GameState::new(settings);

    let shot = TickInput {
        press: Some(args.press),
        release: Some(args.release),
        ..Default::default()
    };
    let mut events = tick(&mut state, &shot);
    while state.any_moving() && state.frame < args.max_frames {
        events.extend(tick(&mut state, &TickInput::default()));
    }

    for event in &events {
        match event {
            GameEvent::ShotTaken { stroke } => log::info!("Shot taken (stroke {stroke})"),
            GameEvent::BallCaptured { ball, hole } => {
                log::info!("Ball {ball} holed in hole {hole}")
            }
        }
    }
    if state.any_moving() {
        log::warn!("Frame cap {} reached with balls still moving", args.max_frames);
    }

    println!("frames: {}  strokes: {}", state.frame, state.strokes);
    for (i, ball) in state.balls.iter().enumerate() {
        println!(
            "ball {i}: pos=({:.2}, {:.2}) vel=({:.3}, {:.3}) holed={}",
            ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y, ball.captured
        );
    }
    if state.all_captured() {
        println!("all balls holed");
    }

    if args.reset_after {
        tick(
            &mut state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
        );
        let home = state.balls.iter().all(|b| b.pos == b.initial_pos() && !b.captured);
        println!("reset: balls back on spawn = {home}");
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Twini Golf (headless) starting...");
    run()
}
