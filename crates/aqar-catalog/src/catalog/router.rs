use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::criteria::{
    BlogCriteria, CityCriteria, CriteriaError, CustomerCriteria, DistrictCriteria, FaqCriteria,
    FinancingCriteria, LeadCriteria, ProjectCriteria, PropertyCriteria, UnitCriteria,
    UserCriteria,
};
use super::query::{
    BlogQuery, CityQuery, CustomerQuery, DistrictQuery, FaqQuery, FinancingQuery, LeadQuery,
    PageParams, ProjectQuery, PropertyQuery, UnitQuery, UserQuery,
};
use super::service::{CatalogService, CatalogServiceError};
use super::store::{CatalogStore, RepositoryError};

type Shared<S> = State<Arc<CatalogService<S>>>;

/// Router builder exposing the storefront listings and dashboard tables.
pub fn catalog_router<S>(service: Arc<CatalogService<S>>) -> Router
where
    S: CatalogStore + 'static,
{
    Router::new()
        .route("/api/v1/properties", get(properties_handler::<S>))
        .route("/api/v1/projects", get(projects_handler::<S>))
        .route("/api/v1/units", get(units_handler::<S>))
        .route("/api/v1/blog", get(blog_handler::<S>))
        .route("/api/v1/admin/customers", get(customers_handler::<S>))
        .route("/api/v1/admin/leads", get(leads_handler::<S>))
        .route(
            "/api/v1/admin/leads/status-counts",
            get(lead_counts_handler::<S>),
        )
        .route("/api/v1/admin/financing", get(financing_handler::<S>))
        .route(
            "/api/v1/admin/financing/status-counts",
            get(financing_counts_handler::<S>),
        )
        .route("/api/v1/admin/faqs", get(faqs_handler::<S>))
        .route("/api/v1/admin/cities", get(cities_handler::<S>))
        .route("/api/v1/admin/districts", get(districts_handler::<S>))
        .route("/api/v1/admin/users", get(users_handler::<S>))
        .route(
            "/api/v1/admin/properties/import",
            post(import_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn properties_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<PropertyQuery>,
) -> Response {
    match PropertyCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.properties(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn projects_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<ProjectQuery>,
) -> Response {
    match ProjectCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.projects(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn units_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<UnitQuery>,
) -> Response {
    match UnitCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.units(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn blog_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<BlogQuery>,
) -> Response {
    match BlogCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.blog_posts(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn customers_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<CustomerQuery>,
) -> Response {
    match CustomerCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.customers(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn leads_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<LeadQuery>,
) -> Response {
    match LeadCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.leads(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn lead_counts_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
) -> Response {
    respond(service.lead_status_counts())
}

pub(crate) async fn financing_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<FinancingQuery>,
) -> Response {
    match FinancingCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.financing_requests(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn financing_counts_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
) -> Response {
    respond(service.financing_status_counts())
}

pub(crate) async fn faqs_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<FaqQuery>,
) -> Response {
    let criteria = FaqCriteria::from(query);
    let page = service.page_request(paging.page, paging.per_page);
    respond(service.faqs(&criteria, page))
}

pub(crate) async fn cities_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<CityQuery>,
) -> Response {
    match CityCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.cities(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn districts_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<DistrictQuery>,
) -> Response {
    match DistrictCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.districts(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn users_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(paging): Query<PageParams>,
    Query(query): Query<UserQuery>,
) -> Response {
    match UserCriteria::try_from(query) {
        Ok(criteria) => {
            let page = service.page_request(paging.page, paging.per_page);
            respond(service.users(&criteria, page))
        }
        Err(error) => criteria_rejection(error),
    }
}

pub(crate) async fn import_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    body: String,
) -> Response {
    match service.import_properties(Cursor::new(body.into_bytes())) {
        Ok(imported) => (StatusCode::OK, axum::Json(json!({ "imported": imported }))).into_response(),
        Err(error) => service_failure(error),
    }
}

fn respond<T: Serialize>(result: Result<T, CatalogServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, axum::Json(body)).into_response(),
        Err(error) => service_failure(error),
    }
}

fn criteria_rejection(error: CriteriaError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

fn service_failure(error: CatalogServiceError) -> Response {
    let status = match &error {
        CatalogServiceError::Import(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CatalogServiceError::Repository(RepositoryError::Forbidden) => StatusCode::FORBIDDEN,
        CatalogServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        tracing::error!(%error, "catalog request failed");
    }

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
