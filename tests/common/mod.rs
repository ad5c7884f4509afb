#![allow(dead_code)]

use portfolio_fx::carousel::{Carousel, CarouselView};

/// Records which slides and indicators the carousel marked active.
#[derive(Debug, Default)]
pub struct FlagView {
    pub slides: Vec<bool>,
    pub indicators: Vec<bool>,
    pub labels: Vec<String>,
}

impl FlagView {
    pub fn active_slides(&self) -> Vec<usize> {
        self.slides.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i).collect()
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i).collect()
    }
}

impl CarouselView for FlagView {
    fn add_indicator(&mut self, _index: usize, label: String) {
        self.slides.push(false);
        self.indicators.push(false);
        self.labels.push(label);
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.slides[index] = active;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.indicators[index] = active;
    }
}

pub fn carousel(len: usize, interval: f32) -> (Carousel, FlagView) {
    let mut view = FlagView::default();
    let carousel = Carousel::new(len, interval, &mut view).expect("non-empty carousel");
    (carousel, view)
}
