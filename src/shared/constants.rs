/// Default number of products returned by the top-expensive listing
pub const DEFAULT_TOP_PRODUCTS_COUNT: i64 = 3;
