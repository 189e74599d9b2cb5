pub mod layout;
pub mod sprite;

use std::time::Duration;

use hero_carousel::{CarouselController, CarouselEvent, InputAdapter, Key, PageEvent, Point};
use raylib::prelude::*;
use tracing::{debug, info};

use crate::viewer::layout::{Control, Layout};
use crate::viewer::sprite::SlideSprite;

pub const FPS: u32 = 60;
const SCROLL_STEP: f32 = 60.0;

const KEY_MAP: [(KeyboardKey, Key); 4] = [
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
];

/// Window adapter: raylib input in, carousel effects out.
pub struct Viewer {
    controller: CarouselController,
    adapter: InputAdapter,
    sprites: Vec<SlideSprite>,

    scroll: f32,
    hovering: bool,
    hidden: bool,
    focus: Option<Control>,
    pressed: Option<Control>,
}

impl Viewer {
    pub fn new(controller: CarouselController, sprites: Vec<SlideSprite>) -> Self {
        Self {
            controller,
            adapter: InputAdapter::new(),
            sprites,
            scroll: 0.0,
            hovering: false,
            hidden: false,
            focus: None,
            pressed: None,
        }
    }

    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.controller.apply_viewport_width(rl.get_screen_width().max(0) as u32);

        while !rl.window_should_close() {
            let dt = rl.get_frame_time();

            self.handle_input(rl);
            self.controller.update(Duration::from_secs_f32(dt.max(0.0)));
            self.apply_events();

            for sprite in self.sprites.iter_mut() {
                sprite.update(dt);
            }

            self.draw(rl, thread);
        }
    }

    fn dispatch(&mut self, event: PageEvent) -> bool {
        self.adapter.dispatch(&mut self.controller, event)
    }

    fn layout(&self, rl: &RaylibHandle) -> Layout {
        Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            self.scroll,
            self.controller.total_slides(),
        )
    }

    fn handle_input(&mut self, rl: &mut RaylibHandle) {
        let screen_height = rl.get_screen_height() as f32;

        if rl.is_window_resized() {
            self.dispatch(PageEvent::Resize { width: rl.get_screen_width().max(0) as u32 });
        }

        let hidden = rl.is_window_minimized() || rl.is_window_hidden();
        if hidden != self.hidden {
            self.hidden = hidden;
            self.dispatch(PageEvent::VisibilityChanged { hidden });
        }

        // The page below the hero is one screen tall.
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.scroll = (self.scroll - wheel * SCROLL_STEP).clamp(0.0, screen_height);
        }

        let layout = self.layout(rl);
        let ratio = layout.visible_ratio(screen_height);
        self.dispatch(PageEvent::ViewportIntersection { ratio });

        let mouse = rl.get_mouse_position();
        let hovering = rl.is_cursor_on_screen() && layout.hero_contains(mouse);
        if hovering != self.hovering {
            self.hovering = hovering;
            self.dispatch(if hovering { PageEvent::PointerEnter } else { PageEvent::PointerLeave });
        }

        self.handle_pointer(rl, &layout, mouse);
        self.handle_keys(rl);
    }

    fn handle_pointer(&mut self, rl: &RaylibHandle, layout: &Layout, mouse: Vector2) {
        let point = Point::new(mouse.x, mouse.y);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match layout.hit(mouse) {
                Some(control) => self.pressed = Some(control),
                None => {
                    self.set_focus(None);
                    if layout.hero_contains(mouse) {
                        self.dispatch(PageEvent::TouchStart(point));
                    }
                }
            }
        }

        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) && self.adapter.is_touching() {
            self.dispatch(PageEvent::TouchMove(point));
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.pressed.take() {
                Some(control) if layout.hit(mouse) == Some(control) => self.activate(control),
                Some(_) => {}
                None if self.adapter.is_touching() => {
                    self.dispatch(PageEvent::TouchEnd(point));
                }
                None => {}
            }
        }

        // Release happened off-window or was otherwise missed.
        if self.adapter.is_touching() && !rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            self.dispatch(PageEvent::TouchCancel);
        }
    }

    fn handle_keys(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            let backwards = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
                || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
            self.move_focus(backwards);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            if let Some(control) = self.focus {
                self.activate(control);
            }
        }

        for (raylib_key, key) in KEY_MAP {
            if rl.is_key_pressed(raylib_key) {
                self.dispatch(PageEvent::Key { key, text_input_focused: false });
            }
        }
    }

    fn activate(&mut self, control: Control) {
        let event = match control {
            Control::Prev => PageEvent::PrevButton,
            Control::Next => PageEvent::NextButton,
            Control::Indicator(i) => PageEvent::IndicatorClick(i),
        };
        self.dispatch(event);
    }

    /// Tabbing past either end of the controls leaves the carousel.
    fn move_focus(&mut self, backwards: bool) {
        let order = Control::tab_order(self.controller.total_slides());
        let position = self.focus.and_then(|c| order.iter().position(|o| *o == c));

        let next = match (position, backwards) {
            (None, false) => order.first().copied(),
            (None, true) => order.last().copied(),
            (Some(p), false) => order.get(p + 1).copied(),
            (Some(p), true) => p.checked_sub(1).and_then(|p| order.get(p).copied()),
        };
        self.set_focus(next);
    }

    fn set_focus(&mut self, focus: Option<Control>) {
        match (self.focus, focus) {
            (None, Some(_)) => {
                self.dispatch(PageEvent::FocusIn);
            }
            (Some(_), None) => {
                self.dispatch(PageEvent::FocusOut);
            }
            _ => {}
        }
        self.focus = focus;
    }

    fn apply_events(&mut self) {
        let fade = self.controller.config().transition_duration.as_secs_f32();

        for event in self.controller.drain_events() {
            match event {
                CarouselEvent::SlideActivated(i) => {
                    if let Some(sprite) = self.sprites.get_mut(i) {
                        sprite.set_active(true, fade);
                    }
                }
                CarouselEvent::SlideDeactivated(i) => {
                    if let Some(sprite) = self.sprites.get_mut(i) {
                        sprite.set_active(false, fade);
                    }
                }
                CarouselEvent::Announced(text) => info!(announcement = %text, "live region"),
                CarouselEvent::StatusShown(text) => debug!(message = %text, "status shown"),
                CarouselEvent::IndicatorActivated(_)
                | CarouselEvent::IndicatorDeactivated(_)
                | CarouselEvent::StatusDismissed => {}
            }
        }
    }

    fn draw(&self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let layout = self.layout(rl);
        let frame = self.controller.frame();
        let screen_width = rl.get_screen_width();
        let screen_height = rl.get_screen_height();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        for sprite in self.sprites.iter() {
            sprite.draw(&mut d, layout.hero);
        }

        let hero_x = layout.hero.x as i32;
        let hero_y = layout.hero.y as i32;
        let hero_height = layout.hero.height as i32;

        if let Some(info) = self.controller.slide_data(self.controller.current_slide()) {
            let text_x = hero_x + 110;
            let text_y = hero_y + hero_height / 2 - 60;
            if let Some(badge) = &info.badge {
                d.draw_text(badge, text_x, text_y - 36, 20, Color::GOLD);
            }
            d.draw_text(&info.title, text_x, text_y, 48, Color::WHITE);
            if let Some(subtitle) = &info.subtitle {
                d.draw_text(subtitle, text_x, text_y + 60, 24, Color::LIGHTGRAY);
            }
        }

        if self.controller.total_slides() > 0 {
            for (control, label) in [(Control::Prev, "<"), (Control::Next, ">")] {
                if let Some(rect) = layout.rect(control) {
                    d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 140));
                    d.draw_text(label, rect.x as i32 + 20, rect.y as i32 + 14, 28, Color::WHITE);
                }
            }
        } else {
            d.draw_text("No slides loaded.", hero_x + 20, hero_y + 20, 20, Color::RED);
        }

        for (i, active) in frame.indicators.iter().enumerate() {
            if let Some(rect) = layout.rect(Control::Indicator(i)) {
                let center_x = (rect.x + rect.width * 0.5) as i32;
                let center_y = (rect.y + rect.height * 0.5) as i32;
                if *active {
                    d.draw_circle(center_x, center_y, rect.width * 0.5, Color::WHITE);
                } else {
                    d.draw_circle_lines(center_x, center_y, rect.width * 0.5, Color::WHITE);
                }
            }
        }

        if let Some(rect) = self.focus.and_then(|control| layout.rect(control)) {
            d.draw_rectangle_lines(
                rect.x as i32 - 3,
                rect.y as i32 - 3,
                rect.width as i32 + 6,
                rect.height as i32 + 6,
                Color::GOLD,
            );
        }

        // Below the fold.
        let fold_y = hero_y + hero_height;
        if fold_y < screen_height {
            d.draw_rectangle(0, fold_y, screen_width, screen_height - fold_y, Color::RAYWHITE);
            let hint = "Scroll up to return to the slideshow";
            d.draw_text(hint, 24, fold_y + 24, 20, Color::DARKGRAY);
        }

        d.draw_text(self.controller.announcement(), 12, screen_height - 24, 16, Color::GRAY);

        if let Some(message) = self.controller.status_message() {
            d.draw_rectangle(screen_width - 240, 20, 220, 40, Color::new(0, 0, 0, 204));
            d.draw_text(message, screen_width - 224, 30, 18, Color::WHITE);
        }
    }
}
