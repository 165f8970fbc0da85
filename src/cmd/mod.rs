/// Declaration export command.
pub mod export;
/// File-level information command.
pub mod info;
/// Registered export actions listing.
pub mod menu;
/// Classified scene preview command.
pub mod scene;

pub(crate) mod util;
