use crate::state::CarouselState;

/// Which slides and indicators carry the "active" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub slides: Vec<bool>,
    pub indicators: Vec<bool>,
}

impl Frame {
    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|active| *active)
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|active| *active)
    }
}

/// The indicator follows `current` immediately; the slide only once the stagger has elapsed.
pub fn render(total: usize, current: usize, state: CarouselState) -> Frame {
    let slide_shown = match state {
        CarouselState::Idle => true,
        CarouselState::Transitioning { revealed, .. } => revealed,
    };

    Frame {
        slides: (0..total).map(|i| slide_shown && i == current).collect(),
        indicators: (0..total).map(|i| i == current).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_marks_one_slide_and_one_indicator() {
        let frame = render(4, 2, CarouselState::Idle);
        assert_eq!(frame.slides, vec![false, false, true, false]);
        assert_eq!(frame.indicators, vec![false, false, true, false]);
    }

    #[test]
    fn stagger_window_shows_no_slide() {
        let frame = render(3, 1, CarouselState::Transitioning { from: 0, revealed: false });
        assert_eq!(frame.active_slide(), None);
        assert_eq!(frame.active_indicator(), Some(1));

        let frame = render(3, 1, CarouselState::Transitioning { from: 0, revealed: true });
        assert_eq!(frame.active_slide(), Some(1));
    }

    #[test]
    fn empty_carousel_renders_nothing() {
        let frame = render(0, 0, CarouselState::Idle);
        assert!(frame.slides.is_empty());
        assert_eq!(frame.active_indicator(), None);
    }
}
