mod category;

pub use category::{Category, CategoryProductCount};
