mod brand_handler;

pub use brand_handler::{create_brand, get_brand, list_brands};
