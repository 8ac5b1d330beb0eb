use crate::components::Icon;
use crate::playlist::{Track, TRACKS};
use dioxus::prelude::*;

/// "The Collection" - every movement as a selectable row
#[component]
pub fn TrackList(
    current: &'static Track,
    is_playing: bool,
    on_track_select: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "track-list",
            h3 { class: "track-list-heading", "The Collection" }
            div { class: "track-list-rows",
                for (index, track) in TRACKS.iter().enumerate() {
                    TrackRow {
                        key: "{track.id}",
                        track,
                        index,
                        active: track.id == current.id,
                        is_playing,
                        on_select: on_track_select,
                    }
                }
            }
        }
    }
}

#[component]
fn TrackRow(
    track: &'static Track,
    index: usize,
    active: bool,
    is_playing: bool,
    on_select: EventHandler<u32>,
) -> Element {
    let season = track.season.label();
    let show_playing = active && is_playing;
    let delay = index as f64 * 0.1;
    let track_id = track.id;
    let badge_class = if show_playing {
        format!("season-badge season-{season} animate-pulse-soft")
    } else {
        format!("season-badge season-{season}")
    };

    rsx! {
        button {
            r#type: "button",
            class: if active { "track-row track-row-active" } else { "track-row" },
            style: "animation-delay: {delay}s;",
            onclick: move |_| on_select.call(track_id),
            // Season badge
            div { class: "{badge_class}",
                Icon {
                    name: track.season.icon_name().to_string(),
                    class: "icon-18".to_string(),
                }
            }
            div { class: "track-row-info",
                h4 { class: "track-row-title", "{track.title}" }
                p { class: "track-row-movement", "{track.movement}" }
            }
            if show_playing {
                div { class: "playing-indicator",
                    span { class: "playing-bar bar-short", style: "animation-delay: 0s;" }
                    span { class: "playing-bar bar-tall", style: "animation-delay: 0.15s;" }
                    span { class: "playing-bar bar-tiny", style: "animation-delay: 0.3s;" }
                }
            }
        }
    }
}
