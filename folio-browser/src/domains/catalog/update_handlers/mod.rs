pub mod fetch;
pub mod page_loaded;
pub mod parameters;
pub mod scroll;
