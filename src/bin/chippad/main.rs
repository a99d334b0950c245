//! chippad - keyboard soundboard for the chipfx cue set
//!
//! Run with: cargo run

mod app;

use app::Chippad;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    Chippad::new().run()
}
