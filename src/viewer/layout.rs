use raylib::prelude::*;

const BUTTON_SIZE: f32 = 56.0;
const BUTTON_MARGIN: f32 = 24.0;
const INDICATOR_SIZE: f32 = 18.0;
const INDICATOR_GAP: f32 = 14.0;
const INDICATOR_BOTTOM: f32 = 48.0;

/// Focusable carousel controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Indicator(usize),
}

impl Control {
    pub fn tab_order(total: usize) -> Vec<Control> {
        let mut order = vec![Control::Prev, Control::Next];
        order.extend((0..total).map(Control::Indicator));
        order
    }
}

/// Screen geometry of the hero section, scrolled `scroll` pixels up the page.
pub struct Layout {
    pub hero: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Rectangle>,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, scroll: f32, total: usize) -> Self {
        let hero = Rectangle::new(0.0, -scroll, screen_width, screen_height);
        let button_y = hero.y + (hero.height - BUTTON_SIZE) * 0.5;

        let gaps = total.saturating_sub(1) as f32;
        let row_width = total as f32 * INDICATOR_SIZE + gaps * INDICATOR_GAP;
        let row_x = hero.x + (hero.width - row_width) * 0.5;
        let row_y = hero.y + hero.height - INDICATOR_BOTTOM;
        let indicators = (0..total)
            .map(|i| {
                let x = row_x + i as f32 * (INDICATOR_SIZE + INDICATOR_GAP);
                Rectangle::new(x, row_y, INDICATOR_SIZE, INDICATOR_SIZE)
            })
            .collect();

        Self {
            hero,
            prev: Rectangle::new(BUTTON_MARGIN, button_y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(
                screen_width - BUTTON_MARGIN - BUTTON_SIZE,
                button_y,
                BUTTON_SIZE,
                BUTTON_SIZE,
            ),
            indicators,
        }
    }

    pub fn rect(&self, control: Control) -> Option<Rectangle> {
        match control {
            Control::Prev => Some(self.prev),
            Control::Next => Some(self.next),
            Control::Indicator(i) => self.indicators.get(i).copied(),
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<Control> {
        if contains(&self.prev, point) {
            return Some(Control::Prev);
        }
        if contains(&self.next, point) {
            return Some(Control::Next);
        }
        self.indicators
            .iter()
            .position(|rect| contains(rect, point))
            .map(Control::Indicator)
    }

    pub fn hero_contains(&self, point: Vector2) -> bool {
        contains(&self.hero, point)
    }

    /// Fraction of the hero section inside the window.
    pub fn visible_ratio(&self, screen_height: f32) -> f32 {
        if self.hero.height <= 0.0 {
            return 0.0;
        }
        let top = self.hero.y.max(0.0);
        let bottom = (self.hero.y + self.hero.height).min(screen_height);
        ((bottom - top) / self.hero.height).clamp(0.0, 1.0)
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}
