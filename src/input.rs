use raylib::prelude::*;
use crate::events::{Key, SliderEvent};
use crate::layout::SliderLayout;

/// Turns raw raylib input into slider events, one frame at a time.
#[derive(Default)]
pub struct InputPoller {
    hovering: bool,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// `click_taken` is set when an overlay (a notice) already consumed this frame's click.
    pub fn poll(&mut self, rl: &RaylibHandle, layout: &SliderLayout, click_taken: bool) -> Vec<SliderEvent> {
        let mouse = rl.get_mouse_position();
        let clicked = !click_taken && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
        let mut events = self.hover_transition(pointer_over(rl.is_cursor_on_screen(), layout, mouse));

        if clicked {
            if layout.hit_prev(mouse) {
                events.push(SliderEvent::PreviousClicked);
            } else if layout.hit_next(mouse) {
                events.push(SliderEvent::NextClicked);
            } else if let Some(index) = layout.hit_dot(mouse) {
                events.push(SliderEvent::IndicatorClicked(index));
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(SliderEvent::Key(Key::ArrowLeft));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            events.push(SliderEvent::Key(Key::ArrowRight));
        }
        events
    }

    fn hover_transition(&mut self, inside: bool) -> Vec<SliderEvent> {
        if inside == self.hovering {
            return Vec::new();
        }
        self.hovering = inside;
        vec![if inside { SliderEvent::PointerEnter } else { SliderEvent::PointerLeave }]
    }
}

/// raylib keeps reporting the last position once the cursor leaves the window.
fn pointer_over(on_screen: bool, layout: &SliderLayout, mouse: Vector2) -> bool {
    on_screen && layout.contains(mouse)
}
