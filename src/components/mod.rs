//! The components module contains all UI components for the page.

mod app;
mod audio_manager;
mod falling_leaves;
mod icons;
mod player;
mod track_list;

pub use app::*;
pub use audio_manager::*;
pub use falling_leaves::*;
pub use icons::*;
pub use player::*;
pub use track_list::*;
