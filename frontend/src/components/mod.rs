pub mod icons;
pub mod layout;
pub mod stat_card;
pub mod status_modal;

pub use layout::{page_shell, Layout};
pub use stat_card::{StatCard, Tone};
pub use status_modal::{status_overlay, Status};
