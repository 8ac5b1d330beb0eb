//! Random parameters for the falling-leaves background.

use crate::settings::{LeafSettings, Range};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafShape {
    Maple,
    Oak,
    Simple,
    Round,
}

impl LeafShape {
    pub const ALL: [LeafShape; 4] = [
        LeafShape::Maple,
        LeafShape::Oak,
        LeafShape::Simple,
        LeafShape::Round,
    ];

    /// SVG path in a 24x24 viewbox.
    pub fn path(self) -> &'static str {
        match self {
            LeafShape::Maple => {
                "M12 2C12 2 8 6 8 10C8 12 10 14 12 14C14 14 16 12 16 10C16 6 12 2 12 2ZM12 14V22M8 18L12 14L16 18"
            }
            LeafShape::Oak => {
                "M12 2C9 5 7 8 7 11C7 14 9 16 12 16C15 16 17 14 17 11C17 8 15 5 12 2ZM12 16V22"
            }
            LeafShape::Simple => {
                "M12 2C8 6 6 10 6 14C6 18 9 20 12 20C15 20 18 18 18 14C18 10 16 6 12 2Z"
            }
            LeafShape::Round => {
                "M12 4C8 4 4 8 4 12C4 16 8 20 12 20C16 20 20 16 20 12C20 8 16 4 12 4Z"
            }
        }
    }

    /// Palette class from app.css.
    pub fn color_class(self) -> &'static str {
        match self {
            LeafShape::Maple => "leaf-amber",
            LeafShape::Oak => "leaf-orange",
            LeafShape::Simple => "leaf-rust",
            LeafShape::Round => "leaf-gold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub id: usize,
    /// Horizontal offset, percent of viewport width
    pub x: f64,
    pub delay: f64,
    pub duration: f64,
    /// Width and height in px
    pub size: f64,
    pub shape: LeafShape,
    pub sway_duration: f64,
    pub sway_delay: f64,
}

fn sample<R: Rng>(rng: &mut R, range: Range) -> f64 {
    let (min, max) = (range.min(), range.max());
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

pub fn generate_leaves<R: Rng>(rng: &mut R, settings: &LeafSettings) -> Vec<Leaf> {
    (0..settings.count)
        .map(|id| Leaf {
            id,
            x: sample(rng, settings.offset_percent),
            delay: sample(rng, settings.delay_secs),
            duration: sample(rng, settings.duration_secs),
            size: sample(rng, settings.size_px),
            shape: LeafShape::ALL[rng.gen_range(0..LeafShape::ALL.len())],
            sway_duration: sample(rng, settings.sway_duration_secs),
            sway_delay: sample(rng, settings.sway_delay_secs),
        })
        .collect()
}
