use std::time::Duration;

use crate::constants::*;

/// Tunables of a carousel. `Default` yields the stock hero slider behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub desktop_interval: Duration,
    pub mobile_interval: Duration,
    pub mobile_breakpoint: u32,

    pub transition_duration: Duration,
    pub reveal_delay: Duration,

    pub min_swipe_distance: f32,
    pub touch_resume_delay: Duration,

    pub message_duration: Duration,
    pub resize_debounce: Duration,
    pub viewport_threshold: f32,

    pub auto_play: bool,
    pub pause_on_hover: bool,
    pub enable_keyboard: bool,
    pub enable_touch: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            desktop_interval: DESKTOP_INTERVAL,
            mobile_interval: MOBILE_INTERVAL,
            mobile_breakpoint: MOBILE_BREAKPOINT,

            transition_duration: TRANSITION_DURATION,
            reveal_delay: REVEAL_DELAY,

            min_swipe_distance: MIN_SWIPE_DISTANCE,
            touch_resume_delay: TOUCH_RESUME_DELAY,

            message_duration: MESSAGE_DURATION,
            resize_debounce: RESIZE_DEBOUNCE,
            viewport_threshold: VIEWPORT_THRESHOLD,

            auto_play: true,
            pause_on_hover: true,
            enable_keyboard: true,
            enable_touch: true,
        }
    }
}

impl CarouselConfig {
    /// Autoplay interval for a viewport of the given width.
    pub fn interval_for_width(&self, width: u32) -> Duration {
        if width < self.mobile_breakpoint {
            self.mobile_interval
        } else {
            self.desktop_interval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_use_the_mobile_interval() {
        let config = CarouselConfig::default();
        assert_eq!(config.interval_for_width(320), Duration::from_millis(6000));
        assert_eq!(config.interval_for_width(767), Duration::from_millis(6000));
    }

    #[test]
    fn breakpoint_and_wider_use_the_desktop_interval() {
        let config = CarouselConfig::default();
        assert_eq!(config.interval_for_width(768), Duration::from_millis(5000));
        assert_eq!(config.interval_for_width(1920), Duration::from_millis(5000));
    }
}
