//! Volume control with a mute flag that preserves the stored level.
//!
//! The level is linear 0.0-1.0, the same scale as `HTMLMediaElement.volume`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeControl {
    /// Stored level (0.0-1.0)
    level: f64,

    /// Mute state (preserves level)
    muted: bool,
}

impl VolumeControl {
    pub fn new(level: f64) -> Self {
        Self {
            level: normalize_level(level),
            muted: false,
        }
    }

    /// Set the level. Moving the slider always unmutes.
    pub fn set_level(&mut self, level: f64) {
        self.level = normalize_level(level);
        self.muted = false;
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level actually sent to the media element.
    pub fn effective(&self) -> f64 {
        if self.is_muted() {
            0.0
        } else {
            self.level()
        }
    }

    /// Nothing audible, either muted or turned all the way down.
    pub fn is_silent(&self) -> bool {
        self.effective() == 0.0
    }
}

fn normalize_level(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
