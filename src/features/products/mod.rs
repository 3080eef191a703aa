//! Product catalog feature.
//!
//! Products belong to one category and one brand, carry a decimal price and
//! the shared lifecycle flags. Delete is a soft delete: the row is flagged,
//! never removed, and there is no undelete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/products` | List non-deleted products with category/brand names |
//! | GET | `/products/{id}` | Get product by id |
//! | GET | `/products/active` | Active products ordered by price ascending |
//! | GET | `/products/search?q=` | Case-insensitive name/description search |
//! | GET | `/products/top?count=` | Top-N most expensive products |
//! | GET | `/products/above-average` | Products priced above the mean |
//! | POST | `/products` | Create product |
//! | PUT | `/products/{id}` | Full field replace |
//! | DELETE | `/products/{id}` | Soft delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
