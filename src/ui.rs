//! UI rendering for the terminal user interface.
//!
//! `draw` renders the player's published `NowPlaying` view and reports back
//! where the clickable parts ended up so the event loop can map mouse input.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::audio::AudioSurface;
use crate::config::UiSettings;
use crate::keepsake::{CARD_BODY, CARD_TITLE};
use crate::player::{RepeatMode, TIME_PLACEHOLDER};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected song");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // +/- is filled in from config.
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("x", "heart");
    map.insert("m", "message");
    map.insert("c", "card");
    map.insert("y", "respond");
    map.insert("q", "quit");
    map
});

/// Screen areas that accept mouse clicks, as laid out by the last `draw`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HitAreas {
    /// Inner area of the progress bar.
    pub progress: Rect,
    /// Inner area of the playlist; its first line shows row `first_row`.
    pub rows: Rect,
    pub first_row: usize,
}

impl HitAreas {
    /// The playlist row under a click, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .contains(Position::new(column, row))
            .then(|| self.first_row + usize::from(row - self.rows.y))
    }

    /// Offset and width of a click on the progress bar.
    pub fn progress_at(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        self.progress.contains(Position::new(column, row)).then(|| {
            (
                f64::from(column - self.progress.x),
                f64::from(self.progress.width),
            )
        })
    }
}

/// Render the controls help text, incorporating the volume step.
fn controls_text(volume_step: u8) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "enter", "space/p", "h/l", "+/-", "s", "r", "x", "m", "c", "y", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "+/-" {
                Some(format!("[+/-] volume -/+{volume_step}%"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn repeat_text(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off => "Repeat: OFF",
        RepeatMode::All => "Repeat: ALL",
        RepeatMode::One => "Repeat: ONE (1)",
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// First row of a `height`-line window over `total` rows that keeps
/// `selected` near the middle.
fn window_start(total: usize, height: usize, selected: usize) -> usize {
    if total <= height || height == 0 {
        return 0;
    }
    let half = height / 2;
    let start = selected.saturating_sub(half);
    start.min(total - height)
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI. `cursor` is the keyboard-selected playlist row.
pub fn draw<S: AudioSurface>(frame: &mut Frame, app: &App<S>, cursor: usize, ui_settings: &UiSettings) -> HitAreas {
    let view = app.player.view();
    let tracks = app.player.playlist().tracks();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" stellina ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing
    let glyph = if view.playing { "▶" } else { "⏸" };
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{glyph} ")),
            Span::raw(view.title.as_str()).bold(),
        ]),
        Line::from(view.artist.as_str()).italic(),
    ];
    if !view.cover.is_empty() {
        lines.push(Line::from(format!("cover: {}", view.cover)).dim());
    }
    let now_playing = Paragraph::new(lines).block(
        Block::bordered()
            .padding(left_pad())
            .title(" now playing "),
    );
    frame.render_widget(now_playing, chunks[1]);

    // Progress
    let progress_block = Block::bordered().title(" progress ");
    let progress_area = progress_block.inner(chunks[2]);
    let ratio = if view.progress.is_finite() {
        view.progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .block(progress_block)
        .ratio(ratio)
        .label(format!("{} / {}", view.elapsed, view.total))
        .use_unicode(true);
    frame.render_widget(gauge, chunks[2]);

    // Status
    let mut parts = vec![
        if view.shuffle {
            "Shuffle: ON".to_string()
        } else {
            "Shuffle: OFF".to_string()
        },
        repeat_text(view.repeat).to_string(),
        format!("Volume: {}%", view.volume),
        format!("♥ {}", app.keepsake.points),
    ];
    if view.simulated {
        parts.push("(simulated)".to_string());
    }
    let status = Paragraph::new(parts.join(" • "))
        .block(Block::bordered().padding(left_pad()).title(" status "));
    frame.render_widget(status, chunks[3]);

    // Playlist, windowed around the cursor.
    let list_block = Block::default().borders(Borders::ALL).title(" playlist ");
    let rows_area = list_block.inner(chunks[4]);
    let total = tracks.len();
    let height = usize::from(rows_area.height);
    let start = window_start(total, height, cursor);
    let end = (start + height).min(total);

    let items: Vec<ListItem> = tracks[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let i = start + offset;
            let marker = if i == view.active { "♪" } else { " " };
            let duration = if view.revealed.get(i).copied().unwrap_or(false) {
                track.duration.as_str()
            } else {
                TIME_PLACEHOLDER
            };
            let line = format!("{marker} {:>2}. {} · {}  {duration}", i + 1, track.title, track.artist);
            if i == view.active {
                ListItem::new(line).bold()
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if total > 0 && cursor >= start && cursor < end {
        state.select(Some(cursor - start));
    }
    frame.render_stateful_widget(list, chunks[4], &mut state);

    // Toast, over the bottom of the playlist.
    if let Some(toast) = app.keepsake.toast() {
        let list_area = chunks[4];
        let width = u16::try_from(toast.text.chars().count() + 4).unwrap_or(u16::MAX);
        let area = centered_rect_sized(width, 3, list_area);
        let area = Rect {
            y: (list_area.y + list_area.height).saturating_sub(area.height + 1).max(list_area.y),
            ..area
        };
        frame.render_widget(Clear, area);
        let toast_par = Paragraph::new(toast.text.as_str())
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(toast_par, area);
    }

    // Dedication card
    if app.keepsake.card_open {
        let popup_area = centered_rect_sized(44, 12, frame.area());
        frame.render_widget(Clear, popup_area);
        let card = Paragraph::new(CARD_BODY)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {CARD_TITLE} "))
                    .title_alignment(Alignment::Center)
                    .title_bottom(" y responds · c closes "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(card, popup_area);
    }

    let footer = Paragraph::new(controls_text(app.volume_step))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    HitAreas {
        progress: progress_area,
        rows: Rect {
            height: rows_area.height.min(u16::try_from(end - start).unwrap_or(u16::MAX)),
            ..rows_area
        },
        first_row: start,
    }
}
