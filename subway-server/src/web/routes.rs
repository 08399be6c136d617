//! HTTP route handlers.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::StationId;
use crate::network::{NetworkError, NetworkSource};
use crate::path::PathError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/paths", get(get_paths))
        .route("/stations", get(list_stations))
        .route("/lines/detail", get(whole_subway))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Shortest path between two stations.
async fn get_paths(
    State(state): State<AppState>,
    query: Result<Query<PathRequest>, QueryRejection>,
) -> Result<Json<PathResponse>, AppError> {
    let Query(req) = query?;
    let result = state.paths.get_path_str(
        StationId::new(req.source),
        StationId::new(req.target),
        &req.path_type,
    )?;

    Ok(Json(PathResponse::from(result)))
}

/// All registered stations, ordered by id.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let stations = state.paths.source().stations()?;
    Ok(Json(stations.iter().map(StationResponse::from).collect()))
}

/// Every line with its stations in order.
async fn whole_subway(
    State(state): State<AppState>,
) -> Result<Json<WholeSubwayResponse>, AppError> {
    let network = state.paths.source();
    let registry: HashMap<_, _> = network
        .stations()?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let lines = network
        .lines_with_sections()?
        .iter()
        .map(|line| LineDetailResponse::from_line(line, &registry))
        .collect();

    Ok(Json(WholeSubwayResponse { lines }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::InvalidRequest(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PathError::StationNotFound(_) | PathError::PathNotFound(..) => AppError::NotFound {
                message: e.to_string(),
            },
            PathError::DataIntegrity { .. } | PathError::Source(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, Section};
    use crate::network::InMemoryNetwork;
    use crate::path::FareTable;

    fn id(n: u64) -> StationId {
        StationId::new(n)
    }

    fn state() -> AppState {
        let network = InMemoryNetwork::builder()
            .station(1, "강남역")
            .station(2, "역삼역")
            .station(7, "양재역")
            .station(8, "교대역")
            .line(
                Line::new(LineId::new(1), "2호선")
                    .with_section(Section::head(id(1)))
                    .with_section(Section::new(id(1), id(2), 5, 10)),
            )
            .line(
                Line::new(LineId::new(4), "신분당선")
                    .with_section(Section::head(id(1)))
                    .with_section(Section::new(id(1), id(7), 40, 3)),
            )
            .build()
            .unwrap();
        AppState::new(network, FareTable::default())
    }

    fn request(
        source: u64,
        target: u64,
        path_type: &str,
    ) -> Result<Query<PathRequest>, QueryRejection> {
        Ok(Query(PathRequest {
            source,
            target,
            path_type: path_type.to_string(),
        }))
    }

    fn raw_request(query: &str) -> Result<Query<PathRequest>, QueryRejection> {
        let uri: axum::http::Uri = format!("/paths?{query}").parse().unwrap();
        Query::try_from_uri(&uri)
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn path_query_succeeds() {
        let Json(response) = get_paths(State(state()), request(2, 7, "DISTANCE"))
            .await
            .unwrap();

        let ids: Vec<u64> = response.stations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 7]);
        assert_eq!(response.distance, 45);
        assert_eq!(response.duration, 13);
        assert_eq!(response.fare, 1950);
    }

    #[tokio::test]
    async fn same_station_is_bad_request() {
        let err = get_paths(State(state()), request(1, 1, "DISTANCE"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn unsupported_type_is_bad_request() {
        let err = get_paths(State(state()), request(1, 7, "FASTEST"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        for query in ["source=abc&target=7&type=DISTANCE", "source=1&target=7"] {
            let err = get_paths(State(state()), raw_request(query))
                .await
                .unwrap_err();
            let AppError::BadRequest { message } = &err else {
                panic!("expected BadRequest for {query}, got {err:?}");
            };
            assert!(message.starts_with("Failed to deserialize query string"));

            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[axum::http::header::CONTENT_TYPE],
                "application/json"
            );
        }
    }

    #[tokio::test]
    async fn raw_query_parses_like_typed_request() {
        let query = raw_request("source=2&target=7&type=duration");
        let Json(response) = get_paths(State(state()), query).await.unwrap();
        let ids: Vec<u64> = response.stations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 7]);
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = get_paths(State(state()), request(1, 99, "DURATION"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        // Registered, but on no line
        let err = get_paths(State(state()), request(1, 8, "DURATION"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn stations_are_listed_by_id() {
        let Json(stations) = list_stations(State(state())).await.unwrap();
        let ids: Vec<u64> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 7, 8]);
    }

    #[tokio::test]
    async fn whole_subway_lists_lines() {
        let Json(subway) = whole_subway(State(state())).await.unwrap();

        assert_eq!(subway.lines.len(), 2);
        assert_eq!(subway.lines[0].name, "2호선");
        let names: Vec<&str> = subway.lines[1]
            .stations
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["강남역", "양재역"]);
    }

    #[test]
    fn path_errors_map_to_status() {
        let cases = [
            (
                PathError::InvalidRequest("same station".into()),
                StatusCode::BAD_REQUEST,
            ),
            (PathError::StationNotFound(id(9)), StatusCode::NOT_FOUND),
            (PathError::PathNotFound(id(1), id(9)), StatusCode::NOT_FOUND),
            (
                PathError::DataIntegrity {
                    line: LineId::new(1),
                    message: "negative distance".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PathError::Source(NetworkError::Unavailable("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
