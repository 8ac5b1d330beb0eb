//! Page-level playback state: which movement is loaded and whether it plays.
//!
//! Every transport action is a plain state transition on [`PlaybackState`];
//! components hold it in a `Signal` and the audio controller mirrors it onto
//! the media element.

use crate::error::Result;
use crate::playlist::{self, Track};
use dioxus::logger::tracing::info;

/// What the media element has to do to catch up with a [`PlaybackState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct SyncPlan {
    /// Asset to assign as the element's source
    pub load_src: Option<&'static str>,
    pub play: bool,
    pub pause: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    current: &'static Track,
    is_playing: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackState {
    /// First track, paused.
    pub fn new() -> Self {
        Self {
            current: playlist::first(),
            is_playing: false,
        }
    }

    pub fn current(&self) -> &'static Track {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn select_track(&mut self, track: &'static Track) {
        if track.id != self.current.id {
            info!("Switching to {} - {}", track.title, track.movement);
        }
        self.current = track;
        self.is_playing = true;
    }

    pub fn select_by_id(&mut self, id: u32) -> Result<()> {
        let track = playlist::find(id)?;
        self.select_track(track);
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Returns `true` if a neighbour was selected.
    pub fn skip_next(&mut self) -> bool {
        match playlist::next_after(self.current.id) {
            Some(next) => {
                self.select_track(next);
                true
            }
            None => false,
        }
    }

    pub fn skip_previous(&mut self) -> bool {
        match playlist::previous_before(self.current.id) {
            Some(previous) => {
                self.select_track(previous);
                true
            }
            None => false,
        }
    }

    /// Continue with the next movement when one ends. Stops advancing at the
    /// last track and leaves the playing flag untouched there.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn advance_on_ended(&mut self) -> bool {
        self.skip_next()
    }

    /// Drop back to paused after the browser refused to play `track_id`.
    /// A later selection wins over a stale rejection.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn recover_from_rejected_play(&mut self, track_id: u32) -> bool {
        if self.current.id == track_id && self.is_playing {
            self.is_playing = false;
            true
        } else {
            false
        }
    }

    /// Plan the element update given the track id last loaded into it and
    /// whether it is paused. Assigning a new source leaves the element paused.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn plan_sync(&self, loaded: Option<u32>, element_paused: bool) -> SyncPlan {
        let load_src = (loaded != Some(self.current.id)).then_some(self.current.file);
        let paused = element_paused || load_src.is_some();
        SyncPlan {
            load_src,
            play: self.is_playing && paused,
            pause: !self.is_playing && !paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;
    use crate::playlist::TRACKS;
    use proptest::prelude::*;

    fn at(id: u32, playing: bool) -> PlaybackState {
        let mut state = PlaybackState::new();
        state.select_by_id(id).unwrap();
        state.is_playing = playing;
        state
    }

    #[test]
    fn starts_on_first_track_paused() {
        let state = PlaybackState::new();
        assert_eq!(state.current().id, 1);
        assert_eq!(state.current().title, "Spring");
        assert_eq!(state.current().movement, "I. Allegro");
        assert!(!state.is_playing());
    }

    #[test]
    fn play_then_select_row() {
        let mut state = PlaybackState::new();
        state.toggle_play_pause();
        assert!(state.is_playing());
        assert_eq!(state.current().file, "/music/spring-allegro.mp3");

        state.toggle_play_pause();
        state.select_by_id(7).unwrap();
        assert_eq!(state.current().id, 7);
        assert!(state.is_playing());
    }

    #[test]
    fn select_unknown_id_leaves_state_alone() {
        let mut state = PlaybackState::new();
        let err = state.select_by_id(99).unwrap_err();
        assert!(matches!(err, PlayerError::UnknownTrack(99)));
        assert_eq!(state, PlaybackState::new());
    }

    #[test]
    fn skip_is_noop_at_boundaries() {
        let mut first = at(1, false);
        assert!(!first.skip_previous());
        assert_eq!(first, at(1, false));

        let mut last = at(10, true);
        assert!(!last.skip_next());
        assert_eq!(last, at(10, true));
    }

    #[test]
    fn skip_moves_one_step_and_plays() {
        let mut state = at(4, false);
        assert!(state.skip_next());
        assert_eq!(state.current().id, 5);
        assert!(state.is_playing());

        assert!(state.skip_previous());
        assert!(state.skip_previous());
        assert_eq!(state.current().id, 3);
    }

    #[test]
    fn ended_on_last_track_keeps_state() {
        let mut state = at(10, true);
        assert!(!state.advance_on_ended());
        assert_eq!(state.current().id, 10);
        assert!(state.is_playing());
    }

    #[test]
    fn ended_advances_to_next() {
        let mut state = at(6, true);
        assert!(state.advance_on_ended());
        assert_eq!(state.current().id, 7);
        assert!(state.is_playing());
    }

    #[test]
    fn rejected_play_pauses_current_track() {
        let mut state = at(2, true);
        assert!(state.recover_from_rejected_play(2));
        assert!(!state.is_playing());
        assert!(!state.recover_from_rejected_play(2));
    }

    #[test]
    fn stale_rejection_is_ignored() {
        let mut state = at(2, true);
        state.select_by_id(3).unwrap();
        assert!(!state.recover_from_rejected_play(2));
        assert!(state.is_playing());
        assert_eq!(state.current().id, 3);
    }

    #[test]
    fn first_play_loads_spring_allegro() {
        let mut state = PlaybackState::new();
        let idle = state.plan_sync(None, true);
        assert_eq!(idle.load_src, Some("/music/spring-allegro.mp3"));
        assert!(!idle.play && !idle.pause);

        state.toggle_play_pause();
        let plan = state.plan_sync(Some(1), true);
        assert_eq!(
            plan,
            SyncPlan {
                load_src: None,
                play: true,
                pause: false,
            }
        );
    }

    #[test]
    fn play_on_fresh_page_loads_and_plays() {
        let mut state = PlaybackState::new();
        state.toggle_play_pause();
        let plan = state.plan_sync(None, true);
        assert_eq!(plan.load_src, Some("/music/spring-allegro.mp3"));
        assert!(plan.play);
        assert!(!plan.pause);
    }

    #[test]
    fn ended_while_playing_loads_and_plays_next() {
        let mut state = at(6, true);
        state.advance_on_ended();
        // The element is still pointing at the finished movement
        let plan = state.plan_sync(Some(6), false);
        assert_eq!(plan.load_src, Some("/music/autumn-violin-concerto.mp3"));
        assert!(plan.play);
        assert!(!plan.pause);
    }

    #[test]
    fn pausing_a_playing_element() {
        let mut state = at(3, true);
        state.toggle_play_pause();
        let plan = state.plan_sync(Some(3), false);
        assert_eq!(
            plan,
            SyncPlan {
                load_src: None,
                play: false,
                pause: true,
            }
        );
    }

    #[test]
    fn nothing_to_do_when_in_step() {
        assert_eq!(at(4, true).plan_sync(Some(4), false), SyncPlan::default());
        assert_eq!(at(4, false).plan_sync(Some(4), true), SyncPlan::default());
    }

    #[test]
    fn selecting_while_paused_loads_without_pause_call() {
        let mut state = at(2, false);
        state.select_by_id(9).unwrap();
        state.toggle_play_pause();
        let plan = state.plan_sync(Some(2), true);
        assert_eq!(plan.load_src, Some("/music/winter-allegro.mp3"));
        assert!(!plan.play && !plan.pause);
    }

    proptest! {
        #[test]
        fn selecting_any_track_plays_it(idx in 0..TRACKS.len(), playing in any::<bool>()) {
            let mut state = at(5, playing);
            state.select_track(&TRACKS[idx]);
            prop_assert_eq!(state.current().id, TRACKS[idx].id);
            prop_assert!(state.is_playing());
        }

        #[test]
        fn double_toggle_is_identity(idx in 0..TRACKS.len(), playing in any::<bool>()) {
            let original = at(TRACKS[idx].id, playing);
            let mut state = original.clone();
            state.toggle_play_pause();
            state.toggle_play_pause();
            prop_assert_eq!(state, original);
        }

        #[test]
        fn current_track_stays_in_playlist(ops in prop::collection::vec(0u8..5, 0..40)) {
            let mut state = PlaybackState::new();
            for op in ops {
                match op {
                    0 => { state.skip_next(); }
                    1 => { state.skip_previous(); }
                    2 => { state.advance_on_ended(); }
                    3 => state.toggle_play_pause(),
                    _ => { state.recover_from_rejected_play(state.current().id); }
                }
                prop_assert!(TRACKS.iter().any(|t| std::ptr::eq(t, state.current())));
            }
        }
    }
}
