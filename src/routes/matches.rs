use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    truncate_package_reasons, AssemblePackagesRequest, CatalogItem, ErrorResponse, HealthResponse,
    PackagesResponse, RankServicesRequest, RankServicesResponse, RankedServiceView,
};
use crate::services::{CatalogError, CatalogSupplier};
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSupplier>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
    pub reason_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(category_graph))
        .route("/matches/rank", web::post().to(rank_services))
        .route("/packages", web::post().to(assemble_packages));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Active category relationship graph
///
/// GET /api/v1/categories
async fn category_graph(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.matcher.graph())
}

/// Rank services endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "coupleId": "string",
///   "preferences": { "requiredCategories": ["venue"], "budget": { "tier": "moderate" } },
///   "catalog": [ ... ],
///   "limit": 20
/// }
/// ```
async fn rank_services(
    state: web::Data<AppState>,
    req: web::Json<RankServicesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;

    let catalog = match resolve_catalog(&state, req.catalog).await {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let mut results = state.matcher.rank(&req.preferences, &catalog);
    results.truncate(limit);

    tracing::info!(
        "Returning {} ranked services for couple {} (from {} candidates)",
        results.len(),
        req.couple_id,
        catalog.len()
    );

    HttpResponse::Ok().json(RankServicesResponse {
        couple_id: req.couple_id,
        results: results
            .into_iter()
            .map(|r| RankedServiceView::from_result(r, state.reason_limit))
            .collect(),
        total_candidates: catalog.len(),
    })
}

/// Assemble packages endpoint
///
/// POST /api/v1/packages
async fn assemble_packages(
    state: web::Data<AppState>,
    req: web::Json<AssemblePackagesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for packages request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();

    let catalog = match resolve_catalog(&state, req.catalog).await {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let outcome = state.matcher.find_matches(&req.preferences, &catalog);
    let mut packages = outcome.packages;
    truncate_package_reasons(&mut packages, state.reason_limit);

    tracing::info!(
        "Built {} packages for couple {} from {} ranked services",
        packages.len(),
        req.couple_id,
        outcome.results.len()
    );

    HttpResponse::Ok().json(PackagesResponse {
        couple_id: req.couple_id,
        packages,
        ranked_services: outcome.results.len(),
        total_candidates: outcome.total_candidates,
    })
}

/// Use the inline catalog if one was sent, otherwise ask the supplier
async fn resolve_catalog(
    state: &web::Data<AppState>,
    inline: Option<Vec<CatalogItem>>,
) -> Result<Vec<CatalogItem>, HttpResponse> {
    if let Some(catalog) = inline {
        return Ok(catalog);
    }

    let supplier = Arc::clone(&state.catalog);
    let snapshot = web::block(move || supplier.snapshot()).await.map_err(|e| {
        tracing::error!("Catalog worker failed: {}", e);
        HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to load catalog".to_string(),
            message: e.to_string(),
            status_code: 500,
        })
    })?;

    snapshot.map_err(|e| {
        let status = match e {
            CatalogError::Unavailable(_) => 503,
            _ => 500,
        };
        tracing::warn!("Catalog snapshot failed: {}", e);
        let body = ErrorResponse {
            error: "Failed to load catalog".to_string(),
            message: e.to_string(),
            status_code: status,
        };
        if status == 503 {
            HttpResponse::ServiceUnavailable().json(body)
        } else {
            HttpResponse::InternalServerError().json(body)
        }
    })
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
