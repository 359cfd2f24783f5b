use bevy::prelude::*;

// Button components
#[derive(Component)]
pub struct UIButton;

#[derive(Component)]
pub struct ButtonConfig {
    pub normal_color: Color,
    pub hover_color: Color,
    pub pressed_color: Color,
}

/// A button that points somewhere outside the app. There is no browser to
/// hand the URL to, so pressing it logs the target.
#[derive(Component)]
pub struct LinkButton {
    pub url: String,
}

/// Fade-and-rise enter animation, the native re-expression of the original
/// page's motion `initial`/`animate` pairs. Attached to text and card nodes;
/// `init_fade_ins` captures the spawn-time alphas before the first frame.
#[derive(Component)]
pub struct FadeIn {
    pub delay: f32,
    pub duration: f32,
    /// Starting offset below the resting position, in logical pixels.
    pub rise: f32,
    pub elapsed: f32,
    pub base_text_alpha: f32,
    pub base_background_alpha: f32,
    pub base_border_alpha: f32,
}

impl FadeIn {
    pub fn new(delay: f32, duration: f32, rise: f32) -> Self {
        Self {
            delay,
            duration,
            rise,
            elapsed: 0.0,
            base_text_alpha: 1.0,
            base_background_alpha: 0.0,
            base_border_alpha: 0.0,
        }
    }

    /// Animation progress in [0, 1], still 0 while the delay runs down.
    pub fn progress(&self) -> f32 {
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_waits_for_delay_and_clamps() {
        let mut fade = FadeIn::new(0.2, 0.8, 20.0);
        assert_eq!(fade.progress(), 0.0);

        fade.elapsed = 0.2;
        assert_eq!(fade.progress(), 0.0);

        fade.elapsed = 0.6;
        assert!((fade.progress() - 0.5).abs() < 1e-6);

        fade.elapsed = 5.0;
        assert_eq!(fade.progress(), 1.0);
        assert!(fade.finished());
    }
}
