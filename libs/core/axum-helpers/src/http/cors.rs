use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. Responses are readable from
/// browser clients on any host.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
