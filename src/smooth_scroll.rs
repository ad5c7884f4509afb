use log::debug;
use raylib::prelude::*;

use crate::constants::*;

/// Page offsets of the in-page anchors (`#about`, `#contact`, ...).
#[derive(Debug, Default, Clone)]
pub struct Anchors {
    targets: Vec<(String, f32)>,
}

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or moves the anchor `id` to page offset `top`.
    pub fn set(&mut self, id: &str, top: f32) {
        match self.targets.iter_mut().find(|(name, _)| name == id) {
            Some(entry) => entry.1 = top,
            None => self.targets.push((id.to_string(), top)),
        }
    }

    /// Scroll offset that brings the target of `href` just below the header.
    ///
    /// Only fragment links (`#id`) resolve; unknown ids give `None`.
    pub fn destination(&self, href: &str, max_scroll: f32) -> Option<f32> {
        let id = href.strip_prefix('#')?;
        let (_, top) = self.targets.iter().find(|(name, _)| name == id)?;
        Some(scroll_destination(*top, max_scroll))
    }
}

/// Clamped scroll offset for an element at page offset `element_top`.
pub fn scroll_destination(element_top: f32, max_scroll: f32) -> f32 {
    (element_top - HEADER_OFFSET).clamp(0.0, max_scroll.max(0.0))
}

struct ScrollAnimation {
    tween: ease::Tween,
    timer: f32,
    target: f32,
}

#[derive(Default)]
pub struct SmoothScroll {
    animation: Option<ScrollAnimation>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.animation.is_some()
    }

    pub fn target(&self) -> Option<f32> {
        self.animation.as_ref().map(|a| a.target)
    }

    pub fn start(&mut self, from: f32, to: f32) {
        debug!("Smooth scroll from {:.0} to {:.0}", from, to);
        self.animation = Some(ScrollAnimation {
            tween: ease::Tween::new(ease::cubic_out, from, to, SMOOTH_SCROLL_DURATION),
            timer: 0.0,
            target: to,
        });
    }

    /// Manual scrolling takes over from any running animation.
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Returns the scroll offset for this frame while animating.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        let animation = self.animation.as_mut()?;

        animation.timer += dt;
        if animation.timer >= SMOOTH_SCROLL_DURATION {
            let target = animation.target;
            self.animation = None;
            return Some(target);
        }
        Some(animation.tween.apply(dt))
    }
}
