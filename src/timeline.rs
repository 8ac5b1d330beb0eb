//! Elapsed time and duration of the loaded movement, as reported by the media element.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timeline {
    current_time: f64,
    duration: f64,
}

impl Timeline {
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// `timeupdate` from the element.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn on_time_update(&mut self, position: f64) {
        if position.is_finite() {
            self.current_time = position.max(0.0);
        }
    }

    /// `loadedmetadata` from the element. Streams report `NaN` or infinity until known.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn on_loaded_metadata(&mut self, duration: f64) {
        if duration.is_finite() && duration >= 0.0 {
            self.duration = duration;
        }
    }

    /// Clamp a requested seek target and apply it optimistically. Returns the
    /// position the element should jump to.
    pub fn seek(&mut self, target: f64) -> f64 {
        let mut position = if target.is_finite() { target.max(0.0) } else { 0.0 };
        if self.duration > 0.0 {
            position = position.min(self.duration);
        }
        self.current_time = position;
        position
    }

    /// A new source was assigned; its duration is unknown until metadata loads.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Upper bound for the progress slider; 100 while the duration is unknown.
    pub fn slider_max(&self) -> f64 {
        if self.duration > 0.0 {
            self.duration
        } else {
            100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_element_events() {
        let mut timeline = Timeline::default();
        timeline.on_loaded_metadata(182.5);
        timeline.on_time_update(12.25);
        assert_eq!(timeline.duration(), 182.5);
        assert_eq!(timeline.current_time(), 12.25);
    }

    #[test]
    fn ignores_unknown_duration() {
        let mut timeline = Timeline::default();
        timeline.on_loaded_metadata(f64::NAN);
        timeline.on_loaded_metadata(f64::INFINITY);
        assert_eq!(timeline.duration(), 0.0);
        assert_eq!(timeline.slider_max(), 100.0);
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let mut timeline = Timeline::default();
        timeline.on_loaded_metadata(90.0);
        assert_eq!(timeline.seek(45.0), 45.0);
        assert_eq!(timeline.current_time(), 45.0);
        assert_eq!(timeline.seek(120.0), 90.0);
        assert_eq!(timeline.seek(-1.0), 0.0);
    }

    #[test]
    fn seek_before_metadata_is_unbounded_above() {
        let mut timeline = Timeline::default();
        assert_eq!(timeline.seek(30.0), 30.0);
    }

    #[test]
    fn reset_clears_both_values() {
        let mut timeline = Timeline::default();
        timeline.on_loaded_metadata(60.0);
        timeline.on_time_update(59.0);
        timeline.reset();
        assert_eq!(timeline, Timeline::default());
    }
}
