use raylib::prelude::*;
use crate::constants::*;

/// Anything the slider can switch between visible and hidden.
pub trait Slide {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Dot mirroring one slide. `selected` is the assistive selection state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub active: bool,
    pub selected: bool,
}

pub struct HeroSlide {
    image: Texture2D,

    active: bool,

    opacity: f32,
    start_opacity: f32,
    fade_timer: f32,
    pub is_animating: bool,
}

impl HeroSlide {
    pub fn new(
        image: Texture2D, // Accept pre-loaded (and potentially rotated) texture
    ) -> Self {
        Self {
            image,
            active: false,
            opacity: 0.0,
            start_opacity: 0.0,
            fade_timer: 0.0,
            is_animating: false,
        }
    }

    fn target_opacity(&self) -> f32 {
        if self.active { 1.0 } else { 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.fade_timer += dt;
        let t = (self.fade_timer / FADE_DURATION).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        let target = self.target_opacity();
        self.opacity = self.start_opacity + (target - self.start_opacity) * t;

        if self.fade_timer >= FADE_DURATION {
            self.is_animating = false;
            self.opacity = target;
        }
    }

    /// Draws the slide cropped to cover `area`, centered.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = (area.width / tex_width).max(area.height / tex_height);

        let src_width = area.width / scale;
        let src_height = area.height / scale;
        let source = Rectangle::new(
            (tex_width - src_width) * 0.5,
            (tex_height - src_height) * 0.5,
            src_width,
            src_height,
        );

        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        d.draw_texture_pro(
            &self.image,
            source,
            area,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}

impl Slide for HeroSlide {
    fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        self.start_opacity = self.opacity;
        self.fade_timer = 0.0;
        self.is_animating = true;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
