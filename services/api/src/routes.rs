use crate::infra::AppState;
use aqar_catalog::catalog::{
    catalog_router, CatalogService, CatalogStore, InvestmentInput, InvestmentProjection,
};
use aqar_catalog::error::AppError;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_catalog_routes<S>(service: Arc<CatalogService<S>>) -> axum::Router
where
    S: CatalogStore + 'static,
{
    catalog_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/investment/projection",
            axum::routing::post(investment_projection_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn investment_projection_endpoint(
    Json(input): Json<InvestmentInput>,
) -> Result<Json<InvestmentProjection>, AppError> {
    Ok(Json(input.project()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_snapshot;
    use crate::infra::InMemoryCatalog;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let store = Arc::new(InMemoryCatalog::new(demo_snapshot()));
        with_catalog_routes(Arc::new(CatalogService::new(store, 12)))
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    #[tokio::test]
    async fn investment_endpoint_projects_compound_growth() {
        let input = InvestmentInput {
            principal: 500_000,
            annual_roi_percent: 10.0,
            years: 5,
        };

        let Json(body) = investment_projection_endpoint(Json(input))
            .await
            .expect("projection builds");

        assert_eq!(body.total_return, 805_255);
        assert_eq!(body.profit, 305_255);
    }

    #[tokio::test]
    async fn investment_endpoint_rejects_out_of_range_years() {
        let input = InvestmentInput {
            principal: 500_000,
            annual_roi_percent: 10.0,
            years: 40,
        };

        let error = investment_projection_endpoint(Json(input))
            .await
            .expect_err("years out of range");

        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn health_route_is_served_next_to_catalog_routes() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn project_route_filters_built_in_catalog_by_city() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/projects?city=%D8%AC%D8%AF%D8%A9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["total"], 2);
        assert_eq!(payload["filtered"], true);
    }

    #[tokio::test]
    async fn projection_route_accepts_json_payloads() {
        let response = router()
            .oneshot(
                Request::post("/api/v1/investment/projection")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"principal":1000000,"annual_roi_percent":12,"years":1}"#,
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["total_return"], 1_120_000);
        assert_eq!(payload["profit"], 120_000);
    }
}
