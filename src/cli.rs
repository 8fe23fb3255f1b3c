//! Command-line flags for the terminal session.

use clap::Parser;
use core::piece::Color;
use engine::options::{EngineConfig, LIMIT_DEPTH};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Which side the human plays: "red" or "black".
    #[clap(long, default_value = "red")]
    pub side: String,

    /// Search depth cap, clamped to 1..=32.
    #[clap(long, default_value_t = LIMIT_DEPTH)]
    pub depth: u8,
}

impl Args {
    pub fn human_side(&self) -> Color {
        parse_side(&self.side).unwrap_or_else(|err| {
            log::warn!("{err}; defaulting to red");
            Color::Red
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::with_depth_cap(self.depth)
    }
}

fn parse_side(raw: &str) -> Result<Color, String> {
    match raw.to_ascii_lowercase().as_str() {
        "red" => Ok(Color::Red),
        "black" => Ok(Color::Black),
        other => Err(format!("expected \"red\" or \"black\", got \"{other}\"")),
    }
}
