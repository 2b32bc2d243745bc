pub mod app;
pub mod avatar;
pub mod carousel;
pub mod components;
pub mod guestbook;
pub mod theme;
