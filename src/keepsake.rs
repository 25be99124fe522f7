//! Keepsake extras layered on top of the player: a heart counter with
//! small milestones, per-track messages and a dedication card.

use std::time::{Duration, Instant};

use tracing::debug;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

const HEART_POINTS: u32 = 10;
const RESPONSE_POINTS: u32 = 100;

/// Heart clicks that unlock a message, and the message shown.
const MILESTONES: [(u32, &str); 3] = [
    (10, "¡Mercedes, eres increíble! 💖"),
    (25, "¡Mi princesa hermosa! 👑✨"),
    (50, "¡Eres mi estrella más brillante! 🌟💕"),
];

pub const CARD_TITLE: &str = "💕 Para Mi Amor Eterno 💕";
pub const CARD_BODY: &str = "TE AMO MI ESTRELLITA HERMOSA;\nMI PRINCESITA HERMOSA\n\n✨ 🌟 ✨\n\nCon todo mi amor,\nPara Mercedes 💕";
const CARD_OPEN_TOAST: &str = "¡Lluvia de amor para Mercedes! 💕💖💗";
const RESPONSE_TOAST: &str = "¡Mercedes respondió con amor! 💕✨";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Keepsake {
    pub points: u32,
    pub heart_clicks: u32,
    pub card_open: bool,
    toast: Option<Toast>,
}

impl Keepsake {
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Show `text` until `now + TOAST_LIFETIME`, replacing any current toast.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        debug!(%text, "toast");
        self.toast = Some(Toast {
            text,
            expires_at: now + TOAST_LIFETIME,
        });
    }

    /// Drop the toast once its lifetime has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }

    pub fn click_heart(&mut self, now: Instant) {
        self.heart_clicks += 1;
        self.points += HEART_POINTS;
        if let Some((_, text)) = MILESTONES.iter().find(|(n, _)| *n == self.heart_clicks) {
            self.show(*text, now);
        }
    }

    /// Show a track's message, if it has one.
    pub fn show_message(&mut self, message: Option<&str>, now: Instant) {
        if let Some(text) = message {
            self.show(text, now);
        }
    }

    /// Open or close the card. Opening it also shows a toast.
    pub fn toggle_card(&mut self, now: Instant) {
        self.card_open = !self.card_open;
        if self.card_open {
            self.show(CARD_OPEN_TOAST, now);
        }
    }

    /// Answer the card: award points, say so, and close it.
    pub fn respond(&mut self, now: Instant) {
        if !self.card_open {
            return;
        }
        self.points += RESPONSE_POINTS;
        self.card_open = false;
        self.show(RESPONSE_TOAST, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_clicks_award_points_and_unlock_milestones() {
        let now = Instant::now();
        let mut k = Keepsake::default();
        for _ in 0..9 {
            k.click_heart(now);
        }
        assert_eq!(k.points, 90);
        assert!(k.toast().is_none());

        k.click_heart(now);
        assert_eq!(k.toast().unwrap().text, MILESTONES[0].1);

        for _ in 10..25 {
            k.click_heart(now);
        }
        assert_eq!(k.heart_clicks, 25);
        assert_eq!(k.toast().unwrap().text, MILESTONES[1].1);
    }

    #[test]
    fn toast_expires_after_its_lifetime() {
        let now = Instant::now();
        let mut k = Keepsake::default();
        k.show("hola", now);
        k.expire(now + Duration::from_secs(2));
        assert!(k.toast().is_some());
        k.expire(now + TOAST_LIFETIME);
        assert!(k.toast().is_none());
    }

    #[test]
    fn show_message_ignores_tracks_without_one() {
        let now = Instant::now();
        let mut k = Keepsake::default();
        k.show_message(None, now);
        assert!(k.toast().is_none());
        k.show_message(Some("para ti"), now);
        assert_eq!(k.toast().unwrap().text, "para ti");
    }

    #[test]
    fn opening_the_card_shows_a_toast_and_closing_does_not() {
        let now = Instant::now();
        let mut k = Keepsake::default();
        k.toggle_card(now);
        assert!(k.card_open);
        assert_eq!(k.toast().unwrap().text, CARD_OPEN_TOAST);

        k.expire(now + TOAST_LIFETIME);
        k.toggle_card(now + TOAST_LIFETIME);
        assert!(!k.card_open);
        assert!(k.toast().is_none());
    }

    #[test]
    fn responding_requires_an_open_card() {
        let now = Instant::now();
        let mut k = Keepsake::default();
        k.respond(now);
        assert_eq!(k.points, 0);

        k.toggle_card(now);
        assert!(k.card_open);
        k.respond(now);
        assert_eq!(k.points, 100);
        assert!(!k.card_open);
        assert_eq!(k.toast().unwrap().text, RESPONSE_TOAST);
    }
}
