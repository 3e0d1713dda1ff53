mod footer_bar;
mod header_bar;
mod input;
mod multiline;
mod stat_card;

pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use multiline::{edit_textarea, render_textarea, textarea_text};
pub use stat_card::{StatCard, StatCardRow};
