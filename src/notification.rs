use std::time::Duration;
use raylib::prelude::*;
use tracing::info;

use crate::constants::NOTICE_LIFETIME;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NoticeKind {
    fn color(self) -> Color {
        match self {
            NoticeKind::Success => Color::new(25, 135, 84, 230),
            NoticeKind::Error => Color::new(220, 53, 69, 230),
            NoticeKind::Warning => Color::new(255, 193, 7, 230),
            NoticeKind::Info => Color::new(13, 202, 240, 230),
        }
    }
}

/// Sink for short user-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NoticeKind);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    remaining: Duration,
}

/// Stack of dismissible notices drawn in the top-right corner.
/// Newest first; each one disappears on its own after five seconds.
#[derive(Default)]
pub struct NotificationBanner {
    notices: Vec<Notice>,
}

const NOTICE_WIDTH: f32 = 360.0;
const NOTICE_HEIGHT: f32 = 44.0;
const NOTICE_MARGIN: f32 = 20.0;
const NOTICE_GAP: f32 = 8.0;
const CLOSE_SIZE: f32 = 28.0;

impl NotificationBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    pub fn update(&mut self, elapsed: Duration) {
        for notice in self.notices.iter_mut() {
            notice.remaining = notice.remaining.saturating_sub(elapsed);
        }
        self.notices.retain(|n| !n.remaining.is_zero());
    }

    fn notice_rect(screen_width: f32, index: usize) -> Rectangle {
        Rectangle::new(
            screen_width - NOTICE_WIDTH - NOTICE_MARGIN,
            NOTICE_MARGIN + index as f32 * (NOTICE_HEIGHT + NOTICE_GAP),
            NOTICE_WIDTH,
            NOTICE_HEIGHT,
        )
    }

    fn close_rect(notice: Rectangle) -> Rectangle {
        Rectangle::new(
            notice.x + notice.width - CLOSE_SIZE - 8.0,
            notice.y + (notice.height - CLOSE_SIZE) * 0.5,
            CLOSE_SIZE,
            CLOSE_SIZE,
        )
    }

    /// Dismisses the notice whose close button is under `point`.
    /// Returns true when the click was consumed.
    pub fn click(&mut self, screen_width: f32, point: Vector2) -> bool {
        let hit = (0..self.notices.len())
            .find(|&i| Self::close_rect(Self::notice_rect(screen_width, i)).check_collision_point_rec(point));
        match hit {
            Some(i) => {
                self.dismiss(i);
                true
            }
            None => false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width() as f32;
        for (i, notice) in self.notices.iter().enumerate() {
            let rect = Self::notice_rect(screen_width, i);
            d.draw_rectangle_rec(rect, notice.kind.color());
            d.draw_text(
                &notice.message,
                (rect.x + 12.0) as i32,
                (rect.y + 13.0) as i32,
                18,
                Color::BLACK,
            );
            let close = Self::close_rect(rect);
            d.draw_text("x", (close.x + 9.0) as i32, (close.y + 4.0) as i32, 20, Color::BLACK);
        }
    }
}

impl Notifier for NotificationBanner {
    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.notices.insert(0, Notice {
            message: message.to_string(),
            kind,
            remaining: NOTICE_LIFETIME,
        });
    }
}

/// Prints notices to stdout, for the command-line helpers.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str, kind: NoticeKind) {
        info!(?kind, text = message, "notice");
        println!("[{:?}] {}", kind, message);
    }
}
