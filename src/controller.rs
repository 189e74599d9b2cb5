use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::CarouselConfig;
use crate::constants::{PAUSED_MESSAGE, RESUMED_MESSAGE};
use crate::input::{Key, Point};
use crate::scheduler::{Scheduler, TaskId};
use crate::slide::SlideInfo;
use crate::state::{CarouselState, Suppression, Suppressions};
use crate::view::{self, Frame};

/// Visual and accessibility effects, in the order the page should apply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    SlideDeactivated(usize),
    SlideActivated(usize),
    IndicatorDeactivated(usize),
    IndicatorActivated(usize),
    Announced(String),
    StatusShown(String),
    StatusDismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    AutoPlayTick,
    Reveal,
    Settle,
    DismissMessage,
    TouchResume,
    ApplyResize(u32),
}

/// Owns the active slide, the transition lock and every timer of the hero carousel.
///
/// All requests that cannot be honoured (out of range, already current, a swap still in
/// flight) are dropped silently. A carousel built without slides never transitions.
#[derive(Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    slides: Vec<SlideInfo>,

    current_slide: usize,
    state: CarouselState,

    auto_play_enabled: bool,
    auto_play_interval: Duration,
    suppressions: Suppressions,

    scheduler: Scheduler<Task>,
    auto_play_timer: Option<TaskId>,
    reveal_timer: Option<TaskId>,
    message_timer: Option<TaskId>,
    touch_timer: Option<TaskId>,
    resize_timer: Option<TaskId>,

    announcement: String,
    status_message: Option<String>,
    events: Vec<CarouselEvent>,
}

impl CarouselController {
    pub fn new(slides: Vec<SlideInfo>, config: CarouselConfig) -> Self {
        let mut controller = Self {
            auto_play_enabled: config.auto_play,
            auto_play_interval: config.desktop_interval,
            config,
            slides,
            current_slide: 0,
            state: CarouselState::Idle,
            suppressions: Suppressions::default(),
            scheduler: Scheduler::new(),
            auto_play_timer: None,
            reveal_timer: None,
            message_timer: None,
            touch_timer: None,
            resize_timer: None,
            announcement: String::new(),
            status_message: None,
            events: Vec::new(),
        };

        if controller.slides.is_empty() {
            debug!("no slides found, carousel stays idle");
            return controller;
        }

        controller.events.push(CarouselEvent::SlideActivated(0));
        controller.events.push(CarouselEvent::IndicatorActivated(0));
        if controller.auto_play_enabled {
            controller.start_auto_play();
        }

        info!(
            total_slides = controller.slides.len(),
            auto_play = controller.auto_play_enabled,
            "carousel initialized"
        );
        controller
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_data(&self, index: usize) -> Option<&SlideInfo> {
        self.slides.get(index)
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_auto_play_enabled(&self) -> bool {
        self.auto_play_enabled
    }

    /// Whether the autoplay timer is currently counting down.
    pub fn is_auto_play_armed(&self) -> bool {
        self.auto_play_timer.is_some()
    }

    pub fn auto_play_interval(&self) -> Duration {
        self.auto_play_interval
    }

    pub fn is_suppressed_by(&self, source: Suppression) -> bool {
        self.suppressions.contains(source)
    }

    /// Live-region text naming the most recently committed slide.
    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn frame(&self) -> Frame {
        view::render(self.slides.len(), self.current_slide, self.state)
    }

    /// Effects produced since the previous call.
    pub fn drain_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances the clock by `dt`, running every task that falls due in deadline order.
    pub fn update(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run(task);
        }
        self.scheduler.set_now(until);
    }

    pub fn next(&mut self) {
        if self.is_transitioning() || self.slides.is_empty() {
            return;
        }
        let total = self.slides.len();
        self.go_to((self.current_slide + 1) % total);
    }

    pub fn previous(&mut self) {
        if self.is_transitioning() || self.slides.is_empty() {
            return;
        }
        let total = self.slides.len();
        self.go_to((self.current_slide + total - 1) % total);
    }

    pub fn go_to(&mut self, index: usize) {
        if self.is_transitioning() {
            trace!(index, "transition in flight, request dropped");
            return;
        }
        if index >= self.slides.len() {
            debug!(index, total = self.slides.len(), "slide index out of range");
            return;
        }
        if index == self.current_slide {
            return;
        }

        let from = self.current_slide;
        self.current_slide = index;
        self.state = CarouselState::Transitioning { from, revealed: false };

        self.events.push(CarouselEvent::SlideDeactivated(from));
        self.events.push(CarouselEvent::IndicatorDeactivated(from));
        self.reveal_timer = Some(
            self.scheduler
                .schedule_once(self.config.reveal_delay, Task::Reveal),
        );
        self.events.push(CarouselEvent::IndicatorActivated(index));
        self.scheduler.schedule_once(self.config.transition_duration, Task::Settle);

        self.rearm_auto_play();
        self.announce();
    }

    /// Restarts the autoplay countdown. Replaces, never stacks, an armed timer.
    pub fn start_auto_play(&mut self) {
        self.cancel_auto_play_timer();
        if self.slides.is_empty() {
            return;
        }
        self.auto_play_timer = Some(
            self.scheduler
                .schedule_repeating(self.auto_play_interval, Task::AutoPlayTick),
        );
        trace!(interval_ms = self.auto_play_interval.as_millis() as u64, "autoplay armed");
    }

    /// Stops the countdown without touching the enabled flag.
    pub fn pause_auto_play(&mut self) {
        if self.cancel_auto_play_timer() {
            trace!("autoplay paused");
        }
    }

    pub fn toggle_auto_play(&mut self) {
        self.auto_play_enabled = !self.auto_play_enabled;
        if self.auto_play_enabled {
            self.rearm_auto_play();
            self.show_message(RESUMED_MESSAGE);
        } else {
            self.pause_auto_play();
            self.show_message(PAUSED_MESSAGE);
        }
        info!(enabled = self.auto_play_enabled, "autoplay toggled");
    }

    /// A leftward swipe advances, a rightward one goes back. Short or mostly vertical
    /// gestures are ignored. Returns whether navigation was requested.
    pub fn handle_swipe(&mut self, start: Point, end: Point, min_distance: f32) -> bool {
        let diff_x = start.x - end.x;
        let diff_y = (start.y - end.y).abs();

        if diff_x.abs() <= min_distance || diff_x.abs() <= diff_y {
            return false;
        }

        if diff_x > 0.0 {
            self.next();
        } else {
            self.previous();
        }
        true
    }

    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key, text_input_focused: bool) -> bool {
        if text_input_focused {
            return false;
        }

        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Space => self.toggle_auto_play(),
            Key::Escape => self.pause_auto_play(),
        }
        true
    }

    /// Holds the timer back while `source` is active.
    pub fn suppress(&mut self, source: Suppression) {
        self.suppressions.insert(source);
        self.pause_auto_play();
    }

    /// Lifts `source`. Autoplay resumes only if still enabled and nothing else holds it back.
    pub fn release(&mut self, source: Suppression) {
        self.suppressions.remove(source);
        self.rearm_auto_play();
    }

    pub fn touch_started(&mut self) {
        if let Some(id) = self.touch_timer.take() {
            self.scheduler.cancel(id);
        }
        self.suppress(Suppression::Touch);
    }

    /// Evaluates the swipe, then lets autoplay resume after the touch grace period.
    pub fn touch_ended(&mut self, start: Point, end: Point) -> bool {
        let navigated = self.handle_swipe(start, end, self.config.min_swipe_distance);

        if self.auto_play_enabled {
            self.touch_timer = Some(
                self.scheduler
                    .schedule_once(self.config.touch_resume_delay, Task::TouchResume),
            );
        } else {
            self.suppressions.remove(Suppression::Touch);
        }
        navigated
    }

    /// A gesture abandoned without an end (e.g. `touchcancel`) lifts the touch hold at once.
    pub fn touch_cancelled(&mut self) {
        if let Some(id) = self.touch_timer.take() {
            self.scheduler.cancel(id);
        }
        self.release(Suppression::Touch);
    }

    /// Debounced: only the last width of a burst is applied.
    pub fn viewport_resized(&mut self, width: u32) {
        if let Some(id) = self.resize_timer.take() {
            self.scheduler.cancel(id);
        }
        self.resize_timer = Some(
            self.scheduler
                .schedule_once(self.config.resize_debounce, Task::ApplyResize(width)),
        );
    }

    /// Recomputes the interval. An armed timer keeps its deadline; the new interval
    /// applies from the next rearm.
    pub fn apply_viewport_width(&mut self, width: u32) {
        let interval = self.config.interval_for_width(width);
        if interval != self.auto_play_interval {
            debug!(width, interval_ms = interval.as_millis() as u64, "autoplay interval changed");
            self.auto_play_interval = interval;
        }
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::AutoPlayTick => {
                trace!("autoplay tick");
                self.next();
            }
            Task::Reveal => {
                self.reveal_timer = None;
                self.reveal();
            }
            Task::Settle => self.settle(),
            Task::DismissMessage => {
                self.message_timer = None;
                if self.status_message.take().is_some() {
                    self.events.push(CarouselEvent::StatusDismissed);
                }
            }
            Task::TouchResume => {
                self.touch_timer = None;
                self.release(Suppression::Touch);
            }
            Task::ApplyResize(width) => {
                self.resize_timer = None;
                self.apply_viewport_width(width);
            }
        }
    }

    fn reveal(&mut self) {
        if let CarouselState::Transitioning { from, revealed: false } = self.state {
            self.state = CarouselState::Transitioning { from, revealed: true };
            self.events.push(CarouselEvent::SlideActivated(self.current_slide));
        }
    }

    fn settle(&mut self) {
        if let Some(id) = self.reveal_timer.take() {
            self.scheduler.cancel(id);
        }
        self.reveal();
        self.state = CarouselState::Idle;
    }

    fn rearm_auto_play(&mut self) {
        if self.auto_play_enabled && self.suppressions.is_empty() {
            self.start_auto_play();
        }
    }

    fn cancel_auto_play_timer(&mut self) -> bool {
        match self.auto_play_timer.take() {
            Some(id) => self.scheduler.cancel(id),
            None => false,
        }
    }

    fn show_message(&mut self, message: &str) {
        if let Some(id) = self.message_timer.take() {
            self.scheduler.cancel(id);
        }
        self.status_message = Some(message.to_string());
        self.events.push(CarouselEvent::StatusShown(message.to_string()));
        self.message_timer = Some(
            self.scheduler
                .schedule_once(self.config.message_duration, Task::DismissMessage),
        );
    }

    fn announce(&mut self) {
        let title = self
            .slides
            .get(self.current_slide)
            .map(|slide| slide.title.as_str())
            .unwrap_or_default();
        let announcement = format!(
            "Slide {} of {}: {}",
            self.current_slide + 1,
            self.slides.len(),
            title
        );
        debug!(%announcement, "slide changed");
        self.announcement = announcement.clone();
        self.events.push(CarouselEvent::Announced(announcement));
    }
}
