mod cli;
mod terminal;

use clap::Parser;
use cli::Args;
use engine::driver::Driver;
use terminal::{TerminalInput, TerminalView};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .expect("logger should only be initialized once");

    let args = Args::parse();

    let mut driver = Driver::new(
        args.human_side(),
        args.engine_config(),
        TerminalInput,
        TerminalView::new(),
    );
    driver.run();
}
