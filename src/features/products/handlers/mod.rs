mod product_handler;

pub use product_handler::{
    create_product, delete_product, get_product, list_above_average_products,
    list_active_products, list_products, list_top_expensive_products, search_products,
    update_product,
};
