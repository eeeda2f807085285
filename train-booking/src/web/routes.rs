//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::admission::{BookingRequest, PriorityClass};
use crate::domain::{Station, TrainId};
use crate::graph::GraphError;
use crate::listing::trains_between;
use crate::planner::{PlanError, RouteQuery, Strategy, plan_route};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan_route", post(plan_route_handler))
        .route("/book_ticket", post(book_ticket))
        .route("/admission/drain", post(drain_admissions))
        .route("/trains", get(list_trains))
        .route("/routes", post(add_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn parse_station(field: &str, raw: &str) -> Result<Station, AppError> {
    Station::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("{field}: {e}"),
    })
}

/// Plan a route between two stations.
async fn plan_route_handler(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let source = parse_station("source", &req.source)?;
    let destination = parse_station("destination", &req.destination)?;
    let strategy = match req.strategy.as_deref() {
        Some(raw) => raw.parse::<Strategy>()?,
        None => Strategy::default(),
    };

    let query = RouteQuery::new(source, destination, strategy);
    let graph = state.graph.snapshot();

    // Searches are CPU-bound; keep them off the async workers.
    let answer = tokio::task::spawn_blocking(move || plan_route(&graph, &query))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("route search failed: {e}"),
        })?;

    Ok(Json(PlanRouteResponse::from(answer)))
}

/// Queue a booking request and return the current admission order.
async fn book_ticket(
    State(state): State<AppState>,
    Json(req): Json<BookTicketRequest>,
) -> Result<Json<BookingOrderResponse>, AppError> {
    let requester = req.user_id.to_string();
    if requester.is_empty() {
        return Err(AppError::BadRequest {
            message: "user_id cannot be empty".to_string(),
        });
    }

    let request = BookingRequest::new(requester, PriorityClass::from(req.is_vip), Utc::now());
    let order = state.admissions.submit_and_snapshot(request);

    Ok(Json(BookingOrderResponse {
        booking_order: order.iter().map(QueueEntryView::from).collect(),
    }))
}

/// Remove every pending request and return them in admission order.
async fn drain_admissions(State(state): State<AppState>) -> Json<AdmittedResponse> {
    let admitted = state.admissions.drain_admission_order();
    info!(count = admitted.len(), "admitting booking requests");

    Json(AdmittedResponse {
        admitted: admitted.iter().map(QueueEntryView::from).collect(),
    })
}

/// List trains between two stations, earliest departure first.
async fn list_trains(
    State(state): State<AppState>,
    Query(req): Query<TrainSearchQuery>,
) -> Result<Json<TrainsResponse>, AppError> {
    let source = parse_station("source", &req.source)?;
    let destination = parse_station("destination", &req.destination)?;

    let trains = trains_between(&state.catalogue, &source, &destination);
    Ok(Json(TrainsResponse { trains }))
}

/// Add a route to the network.
async fn add_route(
    State(state): State<AppState>,
    Json(req): Json<AddRouteRequest>,
) -> Result<(StatusCode, Json<AddRouteResponse>), AppError> {
    let origin = parse_station("origin", &req.origin)?;
    let destination = parse_station("destination", &req.destination)?;
    let train = TrainId::new(req.train_id).map_err(|e| AppError::BadRequest {
        message: format!("train_id: {e}"),
    })?;

    state
        .graph
        .add_route(origin, destination, req.cost, train)?;

    let graph = state.graph.snapshot();
    Ok((
        StatusCode::CREATED,
        Json(AddRouteResponse {
            stations: graph.station_count(),
            routes: graph.edge_count(),
        }),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::InvalidEdge { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
