//! Certificate carousel controller.
//!
//! The controller owns the rotation index and the auto-advance timer. It
//! never draws anything itself: every transition is projected onto a
//! [`CarouselView`], which is how the window renders it and how tests
//! observe it.

pub mod slide;
pub mod state;

use log::debug;
use raylib::consts::KeyboardKey;

use crate::carousel::state::AutoPlayState;
use crate::timer::IntervalTimer;

/// Side-effecting projection of the carousel state.
pub trait CarouselView {
    /// Called once per slide, in order, while the carousel is built.
    fn add_indicator(&mut self, index: usize, label: String);
    fn set_slide_active(&mut self, index: usize, active: bool);
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// Accessible label of the indicator paired with slide `index`.
pub fn indicator_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// Wraps a navigation target into `[0, len)`. Negative targets count back
/// from the end, so `-1` is the last slide.
pub fn wrap_index(target: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    target.rem_euclid(len as isize) as usize
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current_index: usize,
    autoplay: IntervalTimer,
    state: AutoPlayState,
}

impl Carousel {
    /// Builds the indicators, activates the first slide and starts auto-advance.
    ///
    /// Returns `None` when there are no slides: an empty carousel never
    /// activates.
    pub fn new<V: CarouselView>(len: usize, interval: f32, view: &mut V) -> Option<Self> {
        if len == 0 {
            debug!("Carousel has no slides, not activating");
            return None;
        }

        for index in 0..len {
            view.add_indicator(index, indicator_label(index));
        }
        view.set_slide_active(0, true);
        view.set_indicator_active(0, true);

        let mut autoplay = IntervalTimer::new(interval);
        autoplay.restart();

        Some(Self {
            len,
            current_index: 0,
            autoplay,
            state: AutoPlayState::Playing,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> AutoPlayState {
        self.state
    }

    pub fn autoplay(&self) -> &IntervalTimer {
        &self.autoplay
    }

    pub fn go_to_slide<V: CarouselView>(&mut self, target: isize, view: &mut V) {
        view.set_slide_active(self.current_index, false);
        view.set_indicator_active(self.current_index, false);

        self.current_index = wrap_index(target, self.len);

        view.set_slide_active(self.current_index, true);
        view.set_indicator_active(self.current_index, true);
    }

    pub fn next<V: CarouselView>(&mut self, view: &mut V) {
        self.go_to_slide(self.current_index as isize + 1, view);
    }

    pub fn prev<V: CarouselView>(&mut self, view: &mut V) {
        self.go_to_slide(self.current_index as isize - 1, view);
    }

    pub fn previous_clicked<V: CarouselView>(&mut self, view: &mut V) {
        self.prev(view);
        self.reset_autoplay();
    }

    pub fn next_clicked<V: CarouselView>(&mut self, view: &mut V) {
        self.next(view);
        self.reset_autoplay();
    }

    pub fn indicator_clicked<V: CarouselView>(&mut self, index: usize, view: &mut V) {
        if index >= self.len {
            return;
        }
        self.go_to_slide(index as isize, view);
        self.reset_autoplay();
    }

    /// Left/right arrows navigate regardless of focus. Returns whether the
    /// key was consumed.
    pub fn key_pressed<V: CarouselView>(&mut self, key: KeyboardKey, view: &mut V) -> bool {
        match key {
            KeyboardKey::KEY_LEFT => self.previous_clicked(view),
            KeyboardKey::KEY_RIGHT => self.next_clicked(view),
            _ => return false,
        }
        true
    }

    pub fn pointer_entered(&mut self) {
        if self.state == AutoPlayState::Paused {
            return;
        }
        self.state = AutoPlayState::Paused;
        self.autoplay.cancel();
    }

    pub fn pointer_left(&mut self) {
        if self.state == AutoPlayState::Playing {
            return;
        }
        self.state = AutoPlayState::Playing;
        self.autoplay.restart();
    }

    /// Advances the auto-play timer; every tick moves to the next slide.
    pub fn update<V: CarouselView>(&mut self, dt: f32, view: &mut V) {
        let ticks = self.autoplay.advance(dt) as usize;
        if ticks == 0 {
            return;
        }
        let steps = ticks % self.len;
        self.go_to_slide((self.current_index + steps) as isize, view);
    }

    // A paused carousel stays paused: the pointer is still inside it.
    fn reset_autoplay(&mut self) {
        if self.state == AutoPlayState::Playing {
            self.autoplay.restart();
        }
    }
}
