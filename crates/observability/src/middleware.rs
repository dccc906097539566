//! Request-Timing Middleware fuer Axum
//!
//! Misst die Antwortzeit jeder HTTP-Anfrage, protokolliert sie als
//! strukturiertes Log-Event und traegt sie in die Prometheus-Metriken ein.

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;

use crate::metrics::CampusMetrics;

/// Tower-HTTP TraceLayer fuer Request-Spans
pub fn request_timing_layer() -> tower_http::trace::TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
> {
    tower_http::trace::TraceLayer::new_for_http()
}

/// Axum-Middleware-Funktion: misst Antwortzeit, loggt und zaehlt.
///
/// Verwendung:
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn_with_state(metriken, timing_middleware))
/// ```
pub async fn timing_middleware(
    State(metriken): State<CampusMetrics>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let methode = req.method().to_string();
    let pfad = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let dauer = start.elapsed();
    let status = response.status().as_u16();

    metriken
        .http_requests_total
        .with_label_values(&[methode.as_str(), &status.to_string()])
        .inc();
    metriken
        .http_request_duration_seconds
        .with_label_values(&[methode.as_str()])
        .observe(dauer.as_secs_f64());

    tracing::info!(
        method = %methode,
        path = %pfad,
        status = status,
        duration_ms = dauer.as_millis(),
        "HTTP-Anfrage abgeschlossen"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn middleware_zaehlt_anfragen() {
        let metriken = CampusMetrics::neu().unwrap();
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(axum::middleware::from_fn_with_state(
                metriken.clone(),
                timing_middleware,
            ));

        let antwort = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(antwort.status(), 200);

        let wert = metriken
            .http_requests_total
            .with_label_values(&["GET", "200"])
            .get();
        assert_eq!(wert, 1);
    }
}
