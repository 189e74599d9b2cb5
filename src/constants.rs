use std::time::Duration;

pub const DESKTOP_INTERVAL: Duration = Duration::from_millis(5000); // Autoplay interval at or above the breakpoint
pub const MOBILE_INTERVAL: Duration = Duration::from_millis(6000);  // Autoplay interval below the breakpoint
pub const MOBILE_BREAKPOINT: u32 = 768;                             // Viewport width separating mobile from desktop

pub const TRANSITION_DURATION: Duration = Duration::from_millis(500); // Lock held while slides cross-fade
pub const REVEAL_DELAY: Duration = Duration::from_millis(50);         // Stagger between fade-out and fade-in

pub const MIN_SWIPE_DISTANCE: f32 = 50.0;                             // Horizontal travel needed for a swipe
pub const TOUCH_RESUME_DELAY: Duration = Duration::from_millis(1000); // Autoplay resumes this long after a touch ends

pub const MESSAGE_DURATION: Duration = Duration::from_millis(2000); // Lifetime of the transient status message
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);   // Quiet period before a resize is applied
pub const VIEWPORT_THRESHOLD: f32 = 0.5;                            // Visible fraction counted as "in view"

pub const PAUSED_MESSAGE: &str = "Slideshow paused";
pub const RESUMED_MESSAGE: &str = "Slideshow resumed";
