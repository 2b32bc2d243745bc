pub mod carousel;
pub mod form;
pub mod header;
pub mod popup;
pub mod status;
pub mod thanks;
