use crate::Config;

/// Two-layer scrolling backdrop. Cosmetic only; gameplay never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxBackground {
    pub background_x: f32,
    pub ground_x: f32,
    width: f32,
    speed: f32,
    parallax: f32,
}

impl ParallaxBackground {
    pub fn new(config: &Config) -> Self {
        Self {
            background_x: 0.0,
            ground_x: 0.0,
            width: config.viewport_width,
            speed: config.scroll_speed,
            parallax: config.background_parallax,
        }
    }

    pub fn update(&mut self) {
        self.background_x = wrap(self.background_x - self.speed * self.parallax, self.width);
        self.ground_x = wrap(self.ground_x - self.speed, self.width);
    }

    pub fn reset(&mut self) {
        self.background_x = 0.0;
        self.ground_x = 0.0;
    }
}

/// Keep an offset within (-width, 0]
fn wrap(offset: f32, width: f32) -> f32 {
    if offset <= -width {
        offset + width
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_scroll_at_different_speeds() {
        let config = Config::new();
        let mut bg = ParallaxBackground::new(&config);

        bg.update();

        assert_eq!(bg.ground_x, -config.scroll_speed);
        assert_eq!(bg.background_x, -config.scroll_speed * config.background_parallax);
    }

    #[test]
    fn test_offsets_wrap_at_viewport_width() {
        let config = Config::new();
        let mut bg = ParallaxBackground::new(&config);
        let ticks_per_wrap = (config.viewport_width / config.scroll_speed) as usize;

        for _ in 0..ticks_per_wrap {
            bg.update();
            assert!(bg.ground_x > -config.viewport_width);
        }
        assert_eq!(bg.ground_x, 0.0, "Ground layer wrapped after one full width");
        assert_eq!(bg.background_x, -config.viewport_width / 2.0);
    }

    #[test]
    fn test_reset() {
        let config = Config::new();
        let mut bg = ParallaxBackground::new(&config);
        for _ in 0..17 {
            bg.update();
        }
        bg.reset();
        assert_eq!(bg, ParallaxBackground::new(&config));
    }
}
