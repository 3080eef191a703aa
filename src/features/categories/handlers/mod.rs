mod category_handler;

pub use category_handler::{
    create_category, get_category, list_categories, list_category_product_counts,
};
