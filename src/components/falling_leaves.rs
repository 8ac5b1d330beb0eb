use crate::leaves::generate_leaves;
use crate::settings::settings;
use dioxus::prelude::*;

/// Decorative leaves drifting down behind the page. Parameters are rolled once per mount.
#[component]
pub fn FallingLeaves() -> Element {
    let leaves = use_hook(|| generate_leaves(&mut rand::thread_rng(), &settings().leaves));

    rsx! {
        div { class: "falling-leaves",
            for leaf in leaves {
                div {
                    key: "{leaf.id}",
                    class: format!("leaf animate-fall {}", leaf.shape.color_class()),
                    style: "left: {leaf.x}%; animation-delay: {leaf.delay}s; animation-duration: {leaf.duration}s;",
                    svg {
                        width: "{leaf.size}",
                        height: "{leaf.size}",
                        view_box: "0 0 24 24",
                        fill: "currentColor",
                        class: "animate-sway leaf-shape",
                        style: "animation-duration: {leaf.sway_duration}s; animation-delay: {leaf.sway_delay}s;",
                        path { d: leaf.shape.path() }
                    }
                }
            }
        }
    }
}
