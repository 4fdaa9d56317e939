mod walk_handler;

pub use walk_handler::*;
