use raylib::prelude::*;

use crate::carousel::CarouselView;
use crate::constants::*;

pub enum SlideContent {
    Image(Texture2D),
    // Generated card used when no image could be loaded
    Placeholder { title: String, color: Color },
}

pub struct Slide {
    content: SlideContent,

    opacity: f32,
    target_opacity: f32,

    animation_timer: f32,
    is_animating: bool,
    tween_opacity: Option<ease::Tween>,
}

impl Slide {
    pub fn new(content: SlideContent) -> Self {
        Self {
            content,
            opacity: 0.0,
            target_opacity: 0.0,
            animation_timer: 0.0,
            is_animating: false,
            tween_opacity: None,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        let target = if active { 1.0 } else { 0.0 };
        if target == self.target_opacity && (self.is_animating || self.opacity == target) {
            return;
        }
        self.target_opacity = target;
        self.tween_opacity = Some(ease::Tween::new(ease::cubic_out, self.opacity, target, SLIDE_FADE_DURATION));
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }

        if let Some(tween) = self.tween_opacity.as_mut() {
            self.opacity = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= SLIDE_FADE_DURATION {
            self.is_animating = false;
            self.opacity = self.target_opacity;
            self.tween_opacity = None;
        }
    }

    /// Draws the slide centered in `area`, scaled to fit while keeping its aspect ratio.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        match &self.content {
            SlideContent::Image(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;

                let scale = (area.width / tex_width).min(area.height / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        area.x + (area.width - scaled_width) * 0.5,
                        area.y + (area.height - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE.fade(self.opacity),
                );
            }
            SlideContent::Placeholder { title, color } => {
                d.draw_rectangle_rounded(area, 0.05, 8, color.fade(self.opacity));
                let text_width = d.measure_text(title, 32);
                d.draw_text(
                    title,
                    (area.x + (area.width - text_width as f32) * 0.5) as i32,
                    (area.y + area.height * 0.5 - 16.0) as i32,
                    32,
                    Color::WHITE.fade(self.opacity),
                );
            }
        }
    }
}

pub struct Indicator {
    pub label: String,
    pub active: bool,
}

/// The rendered side of the carousel: slides and their indicator dots.
pub struct SlideDeck {
    pub slides: Vec<Slide>,
    pub indicators: Vec<Indicator>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, indicators: Vec::new() }
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        // Fading-out slides first so the incoming one ends on top
        for slide in self.slides.iter().filter(|s| s.target_opacity == 0.0) {
            slide.draw(d, area);
        }
        for slide in self.slides.iter().filter(|s| s.target_opacity > 0.0) {
            slide.draw(d, area);
        }
    }
}

impl CarouselView for SlideDeck {
    fn add_indicator(&mut self, index: usize, label: String) {
        debug_assert_eq!(index, self.indicators.len());
        self.indicators.push(Indicator { label, active: false });
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.set_active(active);
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.active = active;
        }
    }
}
