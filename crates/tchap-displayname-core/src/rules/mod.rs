pub mod displayname;

pub use displayname::{derive_display_name, display_name_for_address};
