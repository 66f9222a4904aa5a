mod autopilot;
mod screen;

use std::cell::RefCell;
use std::env;
use std::rc::Rc;
use std::time::Duration;

use game_core::{Config, FlowState, Game, Side};
use tracing::info;

use autopilot::Autopilot;
use screen::{Screen, TraceRenderer};

/// Command line options
#[derive(Debug, Clone, PartialEq)]
struct Options {
    seed: u64,
    /// Zero plays until someone wins
    frames: u64,
    frame_ms: u64,
    aim_offset: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 12345,
            frames: 0,
            frame_ms: game_core::Params::FRAME_DELAY_MS,
            aim_offset: 30.0,
        }
    }
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Self::default();
        let mut iter = args.iter();

        while let Some(flag) = iter.next() {
            let mut value = || {
                iter.next()
                    .ok_or_else(|| format!("{flag} requires a value"))
            };
            match flag.as_str() {
                "--seed" => options.seed = parse_value(flag, value()?)?,
                "--frames" => options.frames = parse_value(flag, value()?)?,
                "--frame-ms" => options.frame_ms = parse_value(flag, value()?)?,
                "--aim-offset" => options.aim_offset = parse_value(flag, value()?)?,
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(options)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}

fn print_usage(program: &str) {
    println!("Usage: {program} [--seed <n>] [--frames <n>] [--frame-ms <n>] [--aim-offset <x>]");
    println!();
    println!("Plays one match with the player paddle on autopilot.");
    println!("Set RUST_LOG=debug (or trace) to follow frames and draw calls.");
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("court");

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_usage(program);
        return;
    }

    let options = Options::parse(args.get(1..).unwrap_or_default()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        print_usage(program);
        std::process::exit(1);
    });

    let config = Config {
        frame_delay: Duration::from_millis(options.frame_ms),
        ..Config::new()
    };
    let mut game = Game::new(config, options.seed).unwrap_or_else(|e| {
        eprintln!("Error: invalid configuration: {e}");
        std::process::exit(1);
    });

    let screen = Rc::new(RefCell::new(Screen::default()));
    let mut renderer = TraceRenderer::new(screen.clone(), 60);
    let mut pilot = Autopilot::new(screen, &game.config, options.aim_offset, options.frames);

    info!(?options, "starting match");
    let winner = game.run(&mut pilot, &mut renderer);

    let score = game.score;
    match (winner, game.flow.state()) {
        (Some(Side::Player), _) => println!("Player wins {}-{}", score.player, score.computer),
        (Some(Side::Computer), _) => {
            println!("Computer wins {}-{}", score.computer, score.player)
        }
        (None, FlowState::Quit) => println!(
            "Stopped after {} frames at {}-{}",
            options.frames, score.player, score.computer
        ),
        (None, state) => println!("Match ended in {state:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(Options::parse(&[]), Ok(Options::default()));
    }

    #[test]
    fn test_parse_flags() {
        let options = Options::parse(&args(&["--seed", "7", "--frames", "300", "--frame-ms", "0"]))
            .expect("valid flags");
        assert_eq!(options.seed, 7);
        assert_eq!(options.frames, 300);
        assert_eq!(options.frame_ms, 0);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Options::parse(&args(&["--seed"])).is_err());
        assert!(Options::parse(&args(&["--seed", "abc"])).is_err());
        assert!(Options::parse(&args(&["--fast"])).is_err());
    }
}
