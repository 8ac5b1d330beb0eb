//! The fixed Four Seasons playlist.

use crate::error::{PlayerError, Result};

/// Season a movement belongs to; drives icons and colors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Name of the icon drawn in the track list badge.
    pub fn icon_name(self) -> &'static str {
        match self {
            Season::Spring => "flower",
            Season::Summer => "sun",
            Season::Autumn => "leaf",
            Season::Winter => "snowflake",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub movement: &'static str,
    pub season: Season,
    pub file: &'static str,
}

pub static TRACKS: [Track; 10] = [
    Track {
        id: 1,
        title: "Spring",
        movement: "I. Allegro",
        season: Season::Spring,
        file: "/music/spring-allegro.mp3",
    },
    Track {
        id: 2,
        title: "Spring",
        movement: "II. Largo",
        season: Season::Spring,
        file: "/music/spring-largo.mp3",
    },
    Track {
        id: 3,
        title: "Spring",
        movement: "III. Allegro Pastorale",
        season: Season::Spring,
        file: "/music/spring-allegro-pastorale.mp3",
    },
    Track {
        id: 4,
        title: "Spring",
        movement: "II. Largo (Guitar)",
        season: Season::Spring,
        file: "/music/spring-largo-guitar.mp3",
    },
    Track {
        id: 5,
        title: "Summer",
        movement: "I. Allegro non molto",
        season: Season::Summer,
        file: "/music/summer-allegro.mp3",
    },
    Track {
        id: 6,
        title: "Summer",
        movement: "III. Presto",
        season: Season::Summer,
        file: "/music/summer-presto.mp3",
    },
    Track {
        id: 7,
        title: "Autumn",
        movement: "Violin Concerto in F major",
        season: Season::Autumn,
        file: "/music/autumn-violin-concerto.mp3",
    },
    Track {
        id: 8,
        title: "Autumn",
        movement: "II. Adagio molto",
        season: Season::Autumn,
        file: "/music/autumn-adagio.mp3",
    },
    Track {
        id: 9,
        title: "Winter",
        movement: "III. Allegro",
        season: Season::Winter,
        file: "/music/winter-allegro.mp3",
    },
    Track {
        id: 10,
        title: "Winter",
        movement: "Solo Piano",
        season: Season::Winter,
        file: "/music/winter-piano.mp3",
    },
];

pub fn first() -> &'static Track {
    &TRACKS[0]
}

pub fn position_of(id: u32) -> Option<usize> {
    TRACKS.iter().position(|t| t.id == id)
}

pub fn find(id: u32) -> Result<&'static Track> {
    TRACKS
        .iter()
        .find(|t| t.id == id)
        .ok_or(PlayerError::UnknownTrack(id))
}

/// Track after `id` in playlist order, `None` at the end.
pub fn next_after(id: u32) -> Option<&'static Track> {
    position_of(id).and_then(|idx| TRACKS.get(idx + 1))
}

/// Track before `id` in playlist order, `None` at the start.
pub fn previous_before(id: u32) -> Option<&'static Track> {
    position_of(id)
        .and_then(|idx| idx.checked_sub(1))
        .and_then(|idx| TRACKS.get(idx))
}
