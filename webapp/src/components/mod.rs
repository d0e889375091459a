pub mod cursor;
pub mod footer;
pub mod icons;
pub mod navigation;
pub mod parallax;
pub mod reveal;
pub mod toast;
