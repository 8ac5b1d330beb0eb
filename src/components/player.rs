use crate::components::{seek_to, AudioController, Icon};
use crate::playlist::Track;
use crate::settings::settings;
use crate::timeline::Timeline;
use crate::utils::format_time;
use crate::volume::VolumeControl;
use dioxus::prelude::*;

/// Now-playing card with transport, progress and volume controls
#[component]
pub fn PlayerPanel(
    current: &'static Track,
    is_playing: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_play_pause: EventHandler<()>,
) -> Element {
    let mut timeline = use_signal(Timeline::default);
    let mut volume = use_signal(|| VolumeControl::new(settings().default_volume));

    let current_time = timeline().current_time();
    let duration = timeline().duration();
    let slider_max = timeline().slider_max();
    let vol = volume();
    let effective_volume = vol.effective();
    let season = current.season.label();

    let on_seek = move |e: Event<FormData>| {
        if let Ok(target) = e.value().parse::<f64>() {
            let position = timeline.with_mut(|t| t.seek(target));
            seek_to(position);
        }
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            volume.with_mut(|v| v.set_level(val));
        }
    };

    rsx! {
        AudioController { timeline, volume }
        div { class: "player-card season-{season}",
            // Track info
            div { class: "player-info",
                p { class: "player-season", "{season}" }
                h2 { class: "player-title", "{current.title}" }
                p { class: "player-movement", "{current.movement}" }
            }

            // Progress
            div { class: "player-progress",
                input {
                    r#type: "range",
                    min: "0",
                    max: "{slider_max}",
                    step: "0.1",
                    value: "{current_time}",
                    class: "range-input",
                    oninput: on_seek,
                }
                div { class: "player-times",
                    span { {format_time(current_time)} }
                    span { {format_time(duration)} }
                }
            }

            // Transport
            div { class: "player-controls",
                button {
                    r#type: "button",
                    class: "control-button",
                    onclick: move |_| on_previous.call(()),
                    Icon { name: "skip-back".to_string(), class: "icon-24".to_string() }
                }
                button {
                    id: "play-pause-btn",
                    r#type: "button",
                    class: "control-button control-primary",
                    onclick: move |_| on_play_pause.call(()),
                    if is_playing {
                        Icon { name: "pause".to_string(), class: "icon-28".to_string() }
                    } else {
                        Icon { name: "play".to_string(), class: "icon-28 icon-nudge".to_string() }
                    }
                }
                button {
                    r#type: "button",
                    class: "control-button",
                    onclick: move |_| on_next.call(()),
                    Icon { name: "skip-forward".to_string(), class: "icon-24".to_string() }
                }
            }

            // Volume
            div { class: "player-volume",
                button {
                    r#type: "button",
                    class: "mute-button",
                    title: if vol.is_muted() { "Unmute" } else { "Mute" },
                    onclick: move |_| volume.with_mut(|v| v.toggle_mute()),
                    Icon {
                        name: if vol.is_silent() { "volume-x".to_string() } else { "volume".to_string() },
                        class: "icon-18".to_string(),
                    }
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{effective_volume}",
                    class: "range-input range-volume",
                    oninput: on_volume_change,
                }
            }
        }
    }
}
