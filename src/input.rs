use tracing::trace;

use crate::controller::CarouselController;
use crate::state::Suppression;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.code`.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Space" => Some(Key::Space),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }

    /// Maps a legacy numeric `keyCode`.
    pub fn from_key_code(code: u32) -> Option<Key> {
        match code {
            37 => Some(Key::ArrowLeft),
            39 => Some(Key::ArrowRight),
            32 => Some(Key::Space),
            27 => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Raw page-level events, before any carousel semantics are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    NextButton,
    PrevButton,
    IndicatorClick(usize),
    TouchStart(Point),
    TouchMove(Point),
    TouchEnd(Point),
    TouchCancel,
    Key { key: Key, text_input_focused: bool },
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    VisibilityChanged { hidden: bool },
    ViewportIntersection { ratio: f32 },
    Resize { width: u32 },
}

/// Translates [`PageEvent`]s into controller calls, keeping the little state
/// the translation needs (touch origin, last viewport verdict).
#[derive(Debug)]
pub struct InputAdapter {
    touch_start: Option<Point>,
    in_viewport: bool,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputAdapter {
    pub fn new() -> Self {
        Self {
            touch_start: None,
            in_viewport: true,
        }
    }

    pub fn is_touching(&self) -> bool {
        self.touch_start.is_some()
    }

    /// Returns `true` when the host should suppress the event's default action
    /// (page scroll, button activation, key handling).
    pub fn dispatch(&mut self, controller: &mut CarouselController, event: PageEvent) -> bool {
        trace!(?event, "page event");
        let config = controller.config();
        let (pause_on_hover, enable_touch, enable_keyboard, threshold) = (
            config.pause_on_hover,
            config.enable_touch,
            config.enable_keyboard,
            config.viewport_threshold,
        );

        match event {
            PageEvent::NextButton => {
                controller.next();
                true
            }
            PageEvent::PrevButton => {
                controller.previous();
                true
            }
            PageEvent::IndicatorClick(index) => {
                controller.go_to(index);
                true
            }
            PageEvent::TouchStart(point) if enable_touch => {
                self.touch_start = Some(point);
                controller.touch_started();
                false
            }
            PageEvent::TouchMove(point) if enable_touch => match self.touch_start {
                // Horizontal drags belong to the carousel; vertical ones scroll the page.
                Some(start) => (point.x - start.x).abs() > (point.y - start.y).abs(),
                None => false,
            },
            PageEvent::TouchEnd(point) if enable_touch => match self.touch_start.take() {
                Some(start) => {
                    controller.touch_ended(start, point);
                    false
                }
                None => false,
            },
            PageEvent::TouchCancel if enable_touch => {
                if self.touch_start.take().is_some() {
                    controller.touch_cancelled();
                }
                false
            }
            PageEvent::TouchStart(_)
            | PageEvent::TouchMove(_)
            | PageEvent::TouchEnd(_)
            | PageEvent::TouchCancel => false,
            PageEvent::Key { key, text_input_focused } if enable_keyboard => {
                controller.handle_key(key, text_input_focused)
            }
            PageEvent::Key { .. } => false,
            PageEvent::PointerEnter if pause_on_hover => {
                controller.suppress(Suppression::Hover);
                false
            }
            PageEvent::PointerLeave if pause_on_hover => {
                controller.release(Suppression::Hover);
                false
            }
            PageEvent::PointerEnter | PageEvent::PointerLeave => false,
            PageEvent::FocusIn => {
                controller.suppress(Suppression::Focus);
                false
            }
            PageEvent::FocusOut => {
                controller.release(Suppression::Focus);
                false
            }
            PageEvent::VisibilityChanged { hidden } => {
                if hidden {
                    controller.suppress(Suppression::Hidden);
                } else {
                    controller.release(Suppression::Hidden);
                }
                false
            }
            PageEvent::ViewportIntersection { ratio } => {
                let intersecting = ratio >= threshold;
                if intersecting != self.in_viewport {
                    self.in_viewport = intersecting;
                    if intersecting {
                        controller.release(Suppression::OutOfView);
                    } else {
                        controller.suppress(Suppression::OutOfView);
                    }
                }
                false
            }
            PageEvent::Resize { width } => {
                controller.viewport_resized(width);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::CarouselConfig;
    use crate::controller::CarouselEvent;
    use crate::slide::SlideInfo;

    fn carousel_with(total: usize, config: CarouselConfig) -> CarouselController {
        let slides = (0..total).map(|i| SlideInfo::new(format!("Slide {i}"))).collect();
        let mut controller = CarouselController::new(slides, config);
        controller.drain_events();
        controller
    }

    fn carousel(total: usize) -> CarouselController {
        carousel_with(total, CarouselConfig::default())
    }

    fn swipe(
        adapter: &mut InputAdapter,
        controller: &mut CarouselController,
        from_x: f32,
        to_x: f32,
    ) {
        adapter.dispatch(controller, PageEvent::TouchStart(Point::new(from_x, 100.0)));
        adapter.dispatch(controller, PageEvent::TouchEnd(Point::new(to_x, 100.0)));
    }

    fn announcements(controller: &mut CarouselController) -> usize {
        controller
            .drain_events()
            .iter()
            .filter(|event| matches!(event, CarouselEvent::Announced(_)))
            .count()
    }

    #[test]
    fn maps_dom_key_codes() {
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_code("KeyA"), None);
        assert_eq!(Key::from_key_code(37), Some(Key::ArrowLeft));
        assert_eq!(Key::from_key_code(27), Some(Key::Escape));
        assert_eq!(Key::from_key_code(13), None);
    }

    #[test]
    fn buttons_and_indicators_navigate() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(5);

        assert!(adapter.dispatch(&mut controller, PageEvent::IndicatorClick(3)));
        assert_eq!(controller.current_slide(), 3);
        controller.update(Duration::from_millis(600));

        adapter.dispatch(&mut controller, PageEvent::NextButton);
        assert_eq!(controller.current_slide(), 4);
        controller.update(Duration::from_millis(600));

        adapter.dispatch(&mut controller, PageEvent::PrevButton);
        assert_eq!(controller.current_slide(), 3);
    }

    #[test]
    fn swipe_scenario() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(5);

        swipe(&mut adapter, &mut controller, 300.0, 200.0);
        assert_eq!(controller.current_slide(), 1);
        assert_eq!(announcements(&mut controller), 1);
        controller.update(Duration::from_millis(600));

        swipe(&mut adapter, &mut controller, 200.0, 300.0);
        assert_eq!(controller.current_slide(), 0);
        assert_eq!(announcements(&mut controller), 1);
        controller.update(Duration::from_millis(600));

        swipe(&mut adapter, &mut controller, 200.0, 230.0);
        assert_eq!(controller.current_slide(), 0);
        assert_eq!(announcements(&mut controller), 0);
        assert!(!adapter.is_touching());
    }

    #[test]
    fn touch_move_claims_only_horizontal_drags() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(3);

        assert!(!adapter.dispatch(&mut controller, PageEvent::TouchMove(Point::new(10.0, 0.0))));

        adapter.dispatch(&mut controller, PageEvent::TouchStart(Point::new(100.0, 100.0)));
        assert!(adapter.dispatch(&mut controller, PageEvent::TouchMove(Point::new(60.0, 110.0))));
        assert!(!adapter.dispatch(&mut controller, PageEvent::TouchMove(Point::new(95.0, 160.0))));
    }

    #[test]
    fn cancelled_touch_lets_autoplay_resume() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(5);

        adapter.dispatch(&mut controller, PageEvent::TouchStart(Point::new(300.0, 100.0)));
        assert!(!controller.is_auto_play_armed());

        adapter.dispatch(&mut controller, PageEvent::TouchCancel);
        assert!(!adapter.is_touching());
        assert!(controller.is_auto_play_armed());
        assert!(!controller.is_suppressed_by(Suppression::Touch));

        controller.update(Duration::from_millis(5000));
        assert_eq!(controller.current_slide(), 1);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(3);

        adapter.dispatch(&mut controller, PageEvent::TouchEnd(Point::new(0.0, 0.0)));
        assert_eq!(controller.current_slide(), 0);
        assert!(controller.is_auto_play_armed());
    }

    #[test]
    fn disabled_touch_ignores_gestures() {
        let config = CarouselConfig {
            enable_touch: false,
            ..CarouselConfig::default()
        };
        let mut adapter = InputAdapter::new();
        let mut controller = carousel_with(3, config);

        swipe(&mut adapter, &mut controller, 300.0, 100.0);
        assert_eq!(controller.current_slide(), 0);
        assert!(controller.is_auto_play_armed());
    }

    #[test]
    fn keyboard_scenario() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(5);
        let key = |key| PageEvent::Key { key, text_input_focused: false };

        assert!(adapter.dispatch(&mut controller, key(Key::ArrowRight)));
        controller.update(Duration::from_millis(600));
        assert!(adapter.dispatch(&mut controller, key(Key::ArrowLeft)));
        controller.update(Duration::from_millis(600));

        assert_eq!(controller.current_slide(), 0);
        assert_eq!(announcements(&mut controller), 2);
    }

    #[test]
    fn keyboard_respects_focused_text_inputs_and_config() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(5);
        let focused = PageEvent::Key { key: Key::ArrowRight, text_input_focused: true };
        assert!(!adapter.dispatch(&mut controller, focused));
        assert_eq!(controller.current_slide(), 0);

        let config = CarouselConfig {
            enable_keyboard: false,
            ..CarouselConfig::default()
        };
        let mut controller = carousel_with(5, config);
        let key = PageEvent::Key { key: Key::ArrowRight, text_input_focused: false };
        assert!(!adapter.dispatch(&mut controller, key));
        assert_eq!(controller.current_slide(), 0);
    }

    #[test]
    fn visibility_scenario() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(3);

        adapter.dispatch(&mut controller, PageEvent::VisibilityChanged { hidden: true });
        assert!(!controller.is_auto_play_armed());
        adapter.dispatch(&mut controller, PageEvent::VisibilityChanged { hidden: false });
        assert!(controller.is_auto_play_armed());

        controller.toggle_auto_play();
        adapter.dispatch(&mut controller, PageEvent::VisibilityChanged { hidden: true });
        adapter.dispatch(&mut controller, PageEvent::VisibilityChanged { hidden: false });
        assert!(!controller.is_auto_play_enabled());
        assert!(!controller.is_auto_play_armed());
    }

    #[test]
    fn hover_and_focus_pause_until_left() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(3);

        adapter.dispatch(&mut controller, PageEvent::PointerEnter);
        assert!(!controller.is_auto_play_armed());
        adapter.dispatch(&mut controller, PageEvent::PointerLeave);
        assert!(controller.is_auto_play_armed());

        adapter.dispatch(&mut controller, PageEvent::FocusIn);
        assert!(!controller.is_auto_play_armed());
        adapter.dispatch(&mut controller, PageEvent::FocusOut);
        assert!(controller.is_auto_play_armed());
    }

    #[test]
    fn hover_is_ignored_when_pause_on_hover_is_off() {
        let config = CarouselConfig {
            pause_on_hover: false,
            ..CarouselConfig::default()
        };
        let mut adapter = InputAdapter::new();
        let mut controller = carousel_with(3, config);

        adapter.dispatch(&mut controller, PageEvent::PointerEnter);
        assert!(controller.is_auto_play_armed());
    }

    #[test]
    fn viewport_threshold_pauses_and_resumes() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(3);

        adapter.dispatch(&mut controller, PageEvent::ViewportIntersection { ratio: 0.8 });
        assert!(controller.is_auto_play_armed());

        adapter.dispatch(&mut controller, PageEvent::ViewportIntersection { ratio: 0.3 });
        assert!(!controller.is_auto_play_armed());

        adapter.dispatch(&mut controller, PageEvent::ViewportIntersection { ratio: 0.5 });
        assert!(controller.is_auto_play_armed());
    }

    #[test]
    fn resize_reaches_the_interval_after_the_debounce() {
        let mut adapter = InputAdapter::new();
        let mut controller = carousel(3);

        adapter.dispatch(&mut controller, PageEvent::Resize { width: 600 });
        controller.update(Duration::from_millis(250));
        assert_eq!(controller.auto_play_interval(), Duration::from_millis(6000));
    }
}
