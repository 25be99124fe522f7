use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{AudioSurface, RodioSurface, SilentSurface};
use crate::player::Player;
use crate::playlist;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_problem) = settings::load_settings();

    match logging::init_logging(&settings.log) {
        Ok(Some(path)) => info!(path = %path.display(), "stellina starting"),
        Ok(None) => {}
        Err(e) => eprintln!("stellina: logging disabled: {e}"),
    }
    if let Some(msg) = settings_problem {
        warn!("{msg}");
    }

    // A path on the command line overrides the configured playlist source.
    let source = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.playlist.source.clone());
    let playlist = playlist::load(source.as_deref(), &settings.playlist);

    let surface: Box<dyn AudioSurface> = match RodioSurface::open() {
        Ok(surface) => Box::new(surface),
        Err(e) => {
            warn!(error = %e, "no audio output, playback will be simulated");
            Box::new(SilentSurface)
        }
    };

    let mut player = Player::new(playlist, surface);
    startup::apply_playback_defaults(&mut player, &settings);
    let mut app = App::new(player, settings.controls.volume_step);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(love_points = app.keepsake.points, "stellina exiting");
    run_result
}
