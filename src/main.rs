mod app;
mod audio;
mod config;
mod error;
mod events;
mod keepsake;
mod player;
mod playlist;
mod runtime;
mod timefmt;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
