//! Reveal-on-scroll for page blocks.
//!
//! Every tracked block starts hidden. The first time enough of it enters
//! the viewport it is scheduled to fade in; blocks entering together are
//! staggered. After that the block is no longer observed, so it never
//! hides again.
//!
//! A batch holds every pending block whose intersection changed in that
//! update, entering or leaving. The first update reports every block.
//! Blocks that left still take a slot in the stagger.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    Pending,
    Scheduled { delay: f32 },
    Active { elapsed: f32 },
}

#[derive(Debug, Clone)]
struct Tracked {
    top: f32,
    height: f32,
    state: RevealState,
    intersecting: Option<bool>, // None until first reported
}

/// Visible fraction of `[top, top + height)` inside `[view_top, view_bottom)`.
pub fn intersection_ratio(top: f32, height: f32, view_top: f32, view_bottom: f32) -> f32 {
    if height <= 0.0 {
        return if top >= view_top && top <= view_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug, Default, Clone)]
pub struct ScrollReveal {
    elements: Vec<Tracked>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing a block laid out at page offset `top`. Returns its handle.
    pub fn observe(&mut self, top: f32, height: f32) -> usize {
        self.elements.push(Tracked { top, height, state: RevealState::Pending, intersecting: None });
        self.elements.len() - 1
    }

    /// Updates the page position of a block after a relayout.
    pub fn relayout(&mut self, handle: usize, top: f32, height: f32) {
        if let Some(element) = self.elements.get_mut(handle) {
            element.top = top;
            element.height = height;
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state(&self, handle: usize) -> Option<RevealState> {
        self.elements.get(handle).map(|e| e.state)
    }

    /// Checks pending blocks against the viewport, then advances reveal timers.
    pub fn update(&mut self, dt: f32, scroll_y: f32, viewport_height: f32) {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height - REVEAL_BOTTOM_MARGIN;

        for element in self.elements.iter_mut() {
            element.state = match element.state {
                RevealState::Scheduled { delay } if delay <= dt => RevealState::Active { elapsed: dt - delay },
                RevealState::Scheduled { delay } => RevealState::Scheduled { delay: delay - dt },
                RevealState::Active { elapsed } => RevealState::Active { elapsed: elapsed + dt },
                RevealState::Pending => RevealState::Pending,
            };
        }

        let mut batch_index = 0;
        for element in self.elements.iter_mut() {
            if element.state != RevealState::Pending {
                continue;
            }
            let ratio = intersection_ratio(element.top, element.height, view_top, view_bottom);
            let intersecting = ratio > 0.0 && ratio >= REVEAL_THRESHOLD;
            if element.intersecting == Some(intersecting) {
                continue;
            }
            element.intersecting = Some(intersecting);

            if intersecting {
                let delay = batch_index as f32 * REVEAL_STAGGER;
                element.state = if delay <= 0.0 {
                    RevealState::Active { elapsed: 0.0 }
                } else {
                    RevealState::Scheduled { delay }
                };
            }
            batch_index += 1;
        }
    }

    /// Reveal progress in `[0, 1]`, eased out.
    pub fn progress(&self, handle: usize) -> f32 {
        match self.state(handle) {
            Some(RevealState::Active { elapsed }) => {
                let t = (elapsed / REVEAL_DURATION).min(1.0);
                1.0 - (1.0 - t).powi(3)
            }
            _ => 0.0,
        }
    }

    pub fn opacity(&self, handle: usize) -> f32 {
        self.progress(handle)
    }

    /// Vertical offset to draw the block at; it rises into place as it reveals.
    pub fn rise(&self, handle: usize) -> f32 {
        (1.0 - self.progress(handle)) * REVEAL_RISE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partially_visible_block() {
        assert_eq!(intersection_ratio(0.0, 100.0, 50.0, 500.0), 0.5);
        assert_eq!(intersection_ratio(600.0, 100.0, 0.0, 500.0), 0.0);
        assert_eq!(intersection_ratio(100.0, 100.0, 0.0, 500.0), 1.0);
    }

    #[test]
    fn bottom_margin_shrinks_the_viewport() {
        let mut reveal = ScrollReveal::new();
        // Viewport is 800 tall, so the effective bottom edge is 750.
        let block = reveal.observe(745.0, 100.0);
        reveal.update(0.0, 0.0, 800.0);
        assert_eq!(reveal.state(block), Some(RevealState::Pending));

        reveal.update(0.0, 10.0, 800.0);
        assert_eq!(reveal.state(block), Some(RevealState::Active { elapsed: 0.0 }));
    }

    #[test]
    fn blocks_entering_together_are_staggered() {
        let mut reveal = ScrollReveal::new();
        let first = reveal.observe(100.0, 100.0);
        let second = reveal.observe(250.0, 100.0);
        let third = reveal.observe(400.0, 100.0);
        reveal.update(0.0, 0.0, 800.0);

        assert_eq!(reveal.state(first), Some(RevealState::Active { elapsed: 0.0 }));
        assert!(matches!(reveal.state(second), Some(RevealState::Scheduled { .. })));
        assert!(matches!(reveal.state(third), Some(RevealState::Scheduled { .. })));

        reveal.update(0.125, 0.0, 800.0);
        assert!(matches!(reveal.state(second), Some(RevealState::Active { .. })));
        assert!(matches!(reveal.state(third), Some(RevealState::Scheduled { .. })));

        reveal.update(0.125, 0.0, 800.0);
        assert!(matches!(reveal.state(third), Some(RevealState::Active { .. })));
    }

    #[test]
    fn first_batch_numbers_blocks_outside_the_viewport_too() {
        let mut reveal = ScrollReveal::new();
        let top = reveal.observe(100.0, 100.0);
        reveal.observe(2000.0, 100.0);
        let side = reveal.observe(300.0, 100.0);
        reveal.update(0.0, 0.0, 800.0);

        assert_eq!(reveal.state(top), Some(RevealState::Active { elapsed: 0.0 }));
        assert_eq!(reveal.state(side), Some(RevealState::Scheduled { delay: 2.0 * REVEAL_STAGGER }));
    }

    #[test]
    fn unchanged_blocks_do_not_take_a_stagger_slot() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(5000.0, 100.0);
        let near = reveal.observe(900.0, 100.0);
        reveal.update(0.0, 0.0, 800.0);

        reveal.update(0.0, 200.0, 800.0);
        assert_eq!(reveal.state(near), Some(RevealState::Active { elapsed: 0.0 }));
    }

    #[test]
    fn revealed_blocks_stay_revealed() {
        let mut reveal = ScrollReveal::new();
        let block = reveal.observe(100.0, 100.0);
        reveal.update(0.0, 0.0, 800.0);
        reveal.update(1.0, 5000.0, 800.0);
        assert_eq!(reveal.progress(block), 1.0);
        assert_eq!(reveal.rise(block), 0.0);
    }

    #[test]
    fn pending_blocks_are_invisible() {
        let mut reveal = ScrollReveal::new();
        let block = reveal.observe(2000.0, 100.0);
        reveal.update(1.0, 0.0, 800.0);
        assert_eq!(reveal.opacity(block), 0.0);
        assert_eq!(reveal.rise(block), REVEAL_RISE);
    }

    #[test]
    fn later_batch_restarts_stagger_from_zero() {
        let mut reveal = ScrollReveal::new();
        reveal.observe(100.0, 100.0);
        let far = reveal.observe(3000.0, 100.0);
        reveal.update(0.0, 0.0, 800.0);
        reveal.update(0.0, 2500.0, 800.0);
        assert_eq!(reveal.state(far), Some(RevealState::Active { elapsed: 0.0 }));
    }
}
