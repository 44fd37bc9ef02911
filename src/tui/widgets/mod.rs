pub mod adjust;
pub mod header;
pub mod location;
pub mod prayers;
pub mod statusbar;
