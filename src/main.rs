use dioxus::prelude::*;

mod components;
mod error;
mod leaves;
mod playback;
mod playlist;
mod settings;
mod timeline;
mod utils;
mod volume;

use components::SeasonsPage;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "On Repeat | Vivaldi's Four Seasons" }
        document::Meta {
            name: "description",
            content: "A serene listening experience celebrating Vivaldi's Four Seasons - the classical music that plays on repeat.",
        }
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#c2703d" }

        document::Stylesheet { href: APP_CSS }

        SeasonsPage {}
    }
}
