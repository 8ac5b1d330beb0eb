use crate::components::{FallingLeaves, PlayerPanel, TrackList};
use crate::playback::PlaybackState;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// The single page: hero, player, track list. Owns the playback state.
#[component]
pub fn SeasonsPage() -> Element {
    let mut playback = use_signal(PlaybackState::new);
    use_context_provider(|| playback);

    let state = playback();
    let current = state.current();
    let is_playing = state.is_playing();

    let on_previous = move |_: ()| {
        playback.with_mut(|p| p.skip_previous());
    };

    let on_next = move |_: ()| {
        playback.with_mut(|p| p.skip_next());
    };

    let on_track_select = move |id: u32| {
        if let Err(err) = playback.with_mut(|p| p.select_by_id(id)) {
            warn!("{err}");
        }
    };

    let on_play_pause = move |_: ()| playback.with_mut(|p| p.toggle_play_pause());

    rsx! {
        div { class: "page",
            FallingLeaves {}
            div { class: "page-gradient" }

            main { class: "page-content",
                section { class: "hero",
                    div { class: "animate-fade-in-up",
                        p { class: "hero-kicker", "A Personal Collection" }
                        h1 { class: "hero-title", "On Repeat" }
                        p { class: "hero-tagline",
                            "The timeless beauty of Vivaldi's Four Seasons, celebrating nature's eternal cycle."
                        }
                    }
                }

                section { class: "player-section",
                    div {
                        class: "animate-fade-in-up",
                        style: "animation-delay: 0.2s;",
                        PlayerPanel {
                            current,
                            is_playing,
                            on_previous,
                            on_next,
                            on_play_pause,
                        }
                    }
                }

                section { class: "track-list-section",
                    div {
                        class: "animate-fade-in-up",
                        style: "animation-delay: 0.4s;",
                        TrackList { current, is_playing, on_track_select }
                    }
                }

                footer { class: "page-footer",
                    p { "Antonio Vivaldi • Le quattro stagioni" }
                }
            }
        }
    }
}
