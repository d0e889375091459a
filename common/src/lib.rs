pub mod config;
pub mod contact;
pub mod cursor;
pub mod gallery;
pub mod i18n;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod toast;
