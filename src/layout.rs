use raylib::prelude::*;
use crate::constants::*;
use crate::slide::Indicator;

/// Screen geometry of the slider and its controls.
pub struct SliderLayout {
    pub area: Rectangle,
    pub prev_button: Vector2,
    pub next_button: Vector2,
    pub dots: Vec<Vector2>,
}

impl SliderLayout {
    pub fn compute(area: Rectangle, dot_count: usize) -> Self {
        let mid_y = area.y + area.height * 0.5;
        let prev_button = Vector2::new(area.x + NAV_BUTTON_MARGIN, mid_y);
        let next_button = Vector2::new(area.x + area.width - NAV_BUTTON_MARGIN, mid_y);

        // Dot row centered horizontally
        let row_width = DOT_SPACING * dot_count.saturating_sub(1) as f32;
        let first_x = area.x + (area.width - row_width) * 0.5;
        let dot_y = area.y + area.height - DOT_BOTTOM_MARGIN;
        let dots = (0..dot_count)
            .map(|i| Vector2::new(first_x + i as f32 * DOT_SPACING, dot_y))
            .collect();

        Self { area, prev_button, next_button, dots }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.area.check_collision_point_rec(point)
    }

    pub fn hit_prev(&self, point: Vector2) -> bool {
        within(self.prev_button, NAV_BUTTON_RADIUS, point)
    }

    pub fn hit_next(&self, point: Vector2) -> bool {
        within(self.next_button, NAV_BUTTON_RADIUS, point)
    }

    /// Index of the dot under `point`, with a little slack around each dot.
    pub fn hit_dot(&self, point: Vector2) -> Option<usize> {
        self.dots.iter().position(|&dot| within(dot, DOT_RADIUS * 1.8, point))
    }

    pub fn draw_controls(&self, d: &mut RaylibDrawHandle, indicators: &[Indicator]) {
        let button = Color::new(0, 0, 0, 120);
        for (center, label) in [(self.prev_button, "<"), (self.next_button, ">")] {
            d.draw_circle_v(center, NAV_BUTTON_RADIUS, button);
            d.draw_text(label, (center.x - 6.0) as i32, (center.y - 12.0) as i32, 24, Color::WHITE);
        }

        for (dot, indicator) in self.dots.iter().zip(indicators) {
            let color = if indicator.active {
                Color::WHITE
            } else {
                Color::new(255, 255, 255, 110)
            };
            d.draw_circle_v(*dot, DOT_RADIUS, color);
        }
    }
}

fn within(center: Vector2, radius: f32, point: Vector2) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}
