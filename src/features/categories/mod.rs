//! Category catalog feature.
//!
//! Categories group products. Only create and read paths exist; there is no
//! update or delete endpoint for categories in this API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | List non-deleted categories |
//! | GET | `/categories/{id}` | Get category by id |
//! | GET | `/categories/product-counts` | Categories with their non-deleted product counts |
//! | POST | `/categories` | Create category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
