mod category_handler;

pub use category_handler::{list_categories, seed_categories};
