use raylib::prelude::*;

struct Fade {
    tween: ease::Tween,
    elapsed: f32,
    duration: f32,
}

/// A slide texture and its cross-fade opacity.
pub struct SlideSprite {
    texture: Texture2D,
    opacity: f32,
    target: f32,
    fade: Option<Fade>,
}

impl SlideSprite {
    pub fn new(texture: Texture2D) -> Self {
        Self {
            texture,
            opacity: 0.0,
            target: 0.0,
            fade: None,
        }
    }

    pub fn set_active(&mut self, active: bool, duration: f32) {
        let target = if active { 1.0 } else { 0.0 };
        if target == self.target {
            return;
        }
        self.target = target;

        if duration <= 0.0 {
            self.opacity = target;
            self.fade = None;
            return;
        }
        self.fade = Some(Fade {
            tween: ease::Tween::new(ease::cubic_in_out, self.opacity, target, duration),
            elapsed: 0.0,
            duration,
        });
    }

    pub fn update(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };

        self.opacity = fade.tween.apply(dt);
        fade.elapsed += dt;
        if fade.elapsed >= fade.duration {
            self.opacity = self.target;
            self.fade = None;
        }
    }

    /// Fills `area` keeping the aspect ratio, cropping whatever overflows.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        let area_aspect = area.width / area.height;

        let source_rec = if tex_width / tex_height > area_aspect {
            let crop_width = tex_height * area_aspect;
            Rectangle::new((tex_width - crop_width) * 0.5, 0.0, crop_width, tex_height)
        } else {
            let crop_height = tex_width / area_aspect;
            Rectangle::new(0.0, (tex_height - crop_height) * 0.5, tex_width, crop_height)
        };

        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        d.draw_texture_pro(
            &self.texture,
            source_rec,
            area,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
