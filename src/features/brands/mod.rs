//! Brand catalog feature.
//!
//! Brands carry a logo uploaded as multipart form data. The logo extension
//! is validated and the file stored before the brand row is inserted, so a
//! rejected upload never leaves an orphaned brand behind. Only create and
//! read paths exist; there is no update or delete endpoint for brands.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/brands` | List non-deleted brands |
//! | GET | `/brands/{id}` | Get brand by id |
//! | POST | `/brands` | Create brand (multipart: `name`, `file`) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BrandService;
