use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::features::brands::handlers;
use crate::features::brands::services::BrandService;

/// Create routes for the brands feature
///
/// `max_file_size` comes from the upload configuration and bounds the
/// multipart body on the create route (plus headroom for form overhead).
pub fn routes(service: Arc<BrandService>, max_file_size: usize) -> Router {
    Router::new()
        .route(
            "/brands",
            get(handlers::list_brands)
                .post(handlers::create_brand)
                .layer(DefaultBodyLimit::max(max_file_size + 1024 * 1024)),
        )
        .route("/brands/{id}", get(handlers::get_brand))
        .with_state(service)
}
