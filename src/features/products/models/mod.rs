mod product;

pub use product::{Product, ProductWithNames};
