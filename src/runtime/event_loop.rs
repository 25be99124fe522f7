use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::audio::AudioSurface;
use crate::config;
use crate::events::{EventArgs, HandlerTable, names};
use crate::ui::{self, HitAreas};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
enum KeyAction {
    /// Dispatch a named event with no arguments.
    Fire(&'static str),
    CursorUp,
    CursorDown,
    /// Play the row under the cursor.
    PlayCursor,
}

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Keyboard-selected playlist row.
    pub cursor: usize,
    /// Active row last seen; the cursor follows it when it changes.
    last_active: usize,
    /// Clickable areas from the last frame.
    hit: HitAreas,
    /// When the simulated clock is due to advance next.
    next_tick: Instant,
}

impl EventLoopState {
    pub fn new<S: AudioSurface>(app: &App<S>, now: Instant) -> Self {
        let active = app.player.view().active;
        Self {
            cursor: active,
            last_active: active,
            hit: HitAreas::default(),
            next_tick: now,
        }
    }
}

/// Main terminal event loop: handles input, polls the audio output, advances
/// the simulated clock and draws. Returns `Ok(())` when quit is requested.
pub fn run<S: AudioSurface>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let handlers = HandlerTable::default();
    let poll = Duration::from_millis(settings.audio.poll_ms);
    let tick = Duration::from_millis(settings.audio.simulate_tick_ms);
    let mut state = EventLoopState::new(app, Instant::now() + tick);

    while !app.quit {
        let now = Instant::now();

        handlers.pump_surface(app, now);
        if app.player.is_simulating() && app.player.state().playing {
            if now >= state.next_tick {
                app.player.tick();
                state.next_tick = now + tick;
            }
        } else {
            state.next_tick = now + tick;
        }
        app.keepsake.expire(now);
        follow_active(app, &mut state);

        terminal.draw(|f| state.hit = ui::draw(f, app, state.cursor, &settings.ui))?;

        if !event::poll(poll)? {
            continue;
        }
        let now = Instant::now();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = key_action(key) {
                    apply_key_action(action, &handlers, app, &mut state, now);
                }
            }
            Event::Mouse(mouse) => {
                if let Some((name, args)) = mouse_event(mouse, &state.hit) {
                    handlers.dispatch(name, app, &args, now);
                } else if let Some(action) = scroll_action(mouse) {
                    apply_key_action(action, &handlers, app, &mut state, now);
                }
            }
            _ => {}
        }
    }

    debug!("event loop finished");
    Ok(())
}

/// Move the cursor onto the active row whenever the player changes tracks.
fn follow_active<S: AudioSurface>(app: &App<S>, state: &mut EventLoopState) {
    let active = app.player.view().active;
    if active != state.last_active {
        state.last_active = active;
        state.cursor = active;
    }
}

fn apply_key_action<S: AudioSurface>(
    action: KeyAction,
    handlers: &HandlerTable<S>,
    app: &mut App<S>,
    state: &mut EventLoopState,
    now: Instant,
) {
    let last = app.player.playlist().last_index();
    match action {
        KeyAction::Fire(name) => {
            handlers.dispatch(name, app, &EventArgs::None, now);
        }
        KeyAction::CursorUp => state.cursor = state.cursor.saturating_sub(1),
        KeyAction::CursorDown => state.cursor = (state.cursor + 1).min(last),
        KeyAction::PlayCursor => {
            handlers.dispatch(names::SELECT, app, &EventArgs::Select(state.cursor), now);
        }
    }
}

fn key_action(key: KeyEvent) -> Option<KeyAction> {
    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => KeyAction::Fire(names::PLAY_PAUSE),
        KeyCode::Char('h') | KeyCode::Left => KeyAction::Fire(names::PREVIOUS),
        KeyCode::Char('l') | KeyCode::Right => KeyAction::Fire(names::NEXT),
        KeyCode::Char('s') => KeyAction::Fire(names::SHUFFLE),
        KeyCode::Char('r') => KeyAction::Fire(names::REPEAT),
        KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Fire(names::VOLUME_UP),
        KeyCode::Char('-') => KeyAction::Fire(names::VOLUME_DOWN),
        KeyCode::Char('x') | KeyCode::Char('♥') => KeyAction::Fire(names::HEART),
        KeyCode::Char('m') => KeyAction::Fire(names::MESSAGE),
        KeyCode::Char('c') => KeyAction::Fire(names::CARD),
        KeyCode::Char('y') => KeyAction::Fire(names::RESPOND),
        KeyCode::Char('q') => KeyAction::Fire(names::QUIT),
        KeyCode::Char('k') | KeyCode::Up => KeyAction::CursorUp,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::CursorDown,
        KeyCode::Enter => KeyAction::PlayCursor,
        _ => return None,
    };
    Some(action)
}

/// Left clicks on the progress bar seek; on a playlist row they play it.
fn mouse_event(mouse: MouseEvent, hit: &HitAreas) -> Option<(&'static str, EventArgs)> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if let Some((offset, width)) = hit.progress_at(mouse.column, mouse.row) {
        return Some((names::SEEK, EventArgs::Seek { offset, width }));
    }
    hit.row_at(mouse.column, mouse.row)
        .map(|row| (names::SELECT, EventArgs::Select(row)))
}

fn scroll_action(mouse: MouseEvent) -> Option<KeyAction> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(KeyAction::CursorUp),
        MouseEventKind::ScrollDown => Some(KeyAction::CursorDown),
        _ => None,
    }
}
