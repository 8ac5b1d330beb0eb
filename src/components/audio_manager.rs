//! Audio Manager - drives the page-wide audio element outside of the render cycle
//! so re-renders of the player never restart the current movement.

use crate::timeline::Timeline;
use crate::volume::VolumeControl;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::error::{PlayerError, Result};
#[cfg(target_arch = "wasm32")]
use crate::playback::PlaybackState;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, warn};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "on-repeat-audio";

/// Find the global audio element, creating it on first use
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Result<HtmlAudioElement> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(PlayerError::AudioElementUnavailable)?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing
            .dyn_into::<HtmlAudioElement>()
            .map_err(|_| PlayerError::AudioElementUnavailable);
    }

    let audio: HtmlAudioElement = document
        .create_element("audio")
        .ok()
        .and_then(|el| el.dyn_into().ok())
        .ok_or(PlayerError::AudioElementUnavailable)?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Only fetch enough to learn the duration until playback starts
    let _ = audio.set_attribute("preload", "metadata");

    document
        .body()
        .ok_or(PlayerError::AudioElementUnavailable)?
        .append_child(&audio)
        .map_err(|_| PlayerError::AudioElementUnavailable)?;

    debug!("Created audio element #{AUDIO_ELEMENT_ID}");
    Ok(audio)
}

#[cfg(target_arch = "wasm32")]
fn reject_play(mut playback: Signal<PlaybackState>, track_id: u32, err: PlayerError) {
    warn!("{err}");
    playback.with_mut(|state| state.recover_from_rejected_play(track_id));
}

/// Ask the element to play and pause the controller again if the browser refuses.
#[cfg(target_arch = "wasm32")]
fn request_play(audio: &HtmlAudioElement, track_id: u32, playback: Signal<PlaybackState>) {
    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                if let Err(reason) = JsFuture::from(promise).await {
                    let err = PlayerError::PlaybackRejected(format!("{reason:?}"));
                    reject_play(playback, track_id, err);
                }
            });
        }
        Err(reason) => {
            let err = PlayerError::PlaybackRejected(format!("{reason:?}"));
            reject_play(playback, track_id, err);
        }
    }
}

/// Audio controller - mirrors playback state onto the media element imperatively
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController(timeline: Signal<Timeline>, volume: Signal<VolumeControl>) -> Element {
    let _ = (timeline, volume);
    rsx! {}
}

/// Audio controller - mirrors playback state onto the media element imperatively
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController(timeline: Signal<Timeline>, volume: Signal<VolumeControl>) -> Element {
    let playback = use_context::<Signal<PlaybackState>>();
    let mut loaded_track = use_signal(|| None::<u32>);

    // Install element listeners once
    use_hook(move || {
        let audio = match get_or_create_audio_element() {
            Ok(audio) => audio,
            Err(err) => {
                warn!("{err}");
                return;
            }
        };

        let mut time_signal = timeline;
        let time_closure = Closure::wrap(Box::new(move || {
            if let Ok(audio) = get_or_create_audio_element() {
                time_signal.with_mut(|t| t.on_time_update(audio.current_time()));
            }
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let mut duration_signal = timeline;
        let dur_closure = Closure::wrap(Box::new(move || {
            if let Ok(audio) = get_or_create_audio_element() {
                duration_signal.with_mut(|t| t.on_loaded_metadata(audio.duration()));
            }
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(dur_closure.as_ref().unchecked_ref()));
        dur_closure.forget();

        // Continue with the next movement; stops after the last one
        let mut ended_playback = playback;
        let end_closure = Closure::wrap(Box::new(move || {
            if !ended_playback.with_mut(|state| state.advance_on_ended()) {
                debug!("Reached the end of the playlist");
            }
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(end_closure.as_ref().unchecked_ref()));
        end_closure.forget();
    });

    // Source, then play/pause, whenever the track or the playing flag changes
    use_effect(move || {
        let state = playback();
        let track = state.current();
        let audio = match get_or_create_audio_element() {
            Ok(audio) => audio,
            Err(err) => {
                warn!("{err}");
                return;
            }
        };

        let plan = state.plan_sync(*loaded_track.peek(), audio.paused());

        if let Some(src) = plan.load_src {
            loaded_track.set(Some(track.id));
            debug!("Loading {src}");
            audio.set_src(src);
            audio.set_volume(volume.peek().effective());
            let mut timeline = timeline;
            timeline.with_mut(|t| t.reset());
        }

        if plan.play {
            request_play(&audio, track.id, playback);
        }
        if plan.pause {
            if let Err(reason) = audio.pause() {
                warn!("Failed to pause {}: {reason:?}", track.file);
            }
        }
    });

    // Volume and mute
    use_effect(move || {
        let effective = volume().effective();
        if let Ok(audio) = get_or_create_audio_element() {
            audio.set_volume(effective);
        }
    });

    // Return empty element - this component just manages the element
    rsx! {}
}

/// Move the element to `position` seconds
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    match get_or_create_audio_element() {
        Ok(audio) => audio.set_current_time(position),
        Err(err) => warn!("{err}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}
