//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use backend::server_extra::query_routes;
        use dioxus::{logger::tracing, server::axum};

        Ok(dioxus::server::router(App)
            .route("/query", axum::routing::get(query_routes::query))
            .route("/query/topn", axum::routing::get(query_routes::query_topn))
            .route("/predefined/{id}", axum::routing::get(query_routes::predefined))
            .route("/version", axum::routing::get(query_routes::version))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::debug!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}
