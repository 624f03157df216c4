//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::{ClockTime, PassengerId, Station, TrainId};
use crate::ledger::{BookingRequest, LedgerError, NewTrain};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/passengers", post(add_passenger))
        .route("/passengers/:passenger_id/tickets", get(passenger_tickets))
        .route("/trains", post(add_train))
        .route("/trains/:train_id", get(get_train))
        .route("/trains/:train_id/seats", get(available_seats))
        .route("/trains/:train_id/boarding/:station", get(boarding_count))
        .route("/trains/:train_id/oldest", get(oldest_age))
        .route("/tickets", post(book_ticket))
        .route("/stations/:station/trains", get(trains_through))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, reporting failures as bad requests.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(body), "JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_station(field: &str, value: &str) -> Result<Station, AppError> {
    Station::parse_normalized(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field} station: {value}"),
    })
}

fn parse_time(field: &str, value: &str) -> Result<ClockTime, AppError> {
    ClockTime::parse_hhmm(value).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {field} time {value:?}: {e}"),
    })
}

/// Register a passenger.
async fn add_passenger(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddPassengerResponse>), AppError> {
    let req: AddPassengerRequest = parse_body(&body)?;
    let passenger_id = state.ledger.add_passenger(&req.name, req.age);
    Ok((StatusCode::CREATED, Json(AddPassengerResponse { passenger_id })))
}

/// Tickets a passenger travels on.
async fn passenger_tickets(
    State(state): State<AppState>,
    Path(passenger_id): Path<u32>,
) -> Result<Json<PassengerTicketsResponse>, AppError> {
    let passenger_id = PassengerId(passenger_id);
    let tickets = state.ledger.tickets_for_passenger(passenger_id)?;
    Ok(Json(PassengerTicketsResponse {
        passenger_id,
        tickets: tickets.iter().map(TicketView::from_ticket).collect(),
    }))
}

/// Add a train.
async fn add_train(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddTrainResponse>), AppError> {
    let req: AddTrainRequest = parse_body(&body)?;
    let departure = parse_time("departure", &req.departure)?;
    let train_id = state.ledger.add_train(NewTrain {
        route: req.route,
        seats: req.seats,
        departure,
    })?;
    Ok((StatusCode::CREATED, Json(AddTrainResponse { train_id })))
}

/// Show a train and its bookings.
async fn get_train(
    State(state): State<AppState>,
    Path(train_id): Path<u32>,
) -> Result<Json<TrainView>, AppError> {
    let train = state.ledger.find_train(TrainId(train_id))?;
    Ok(Json(TrainView::from_train(&train)))
}

/// Book a ticket.
async fn book_ticket(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<BookTicketResponse>), AppError> {
    let req: BookTicketRequest = parse_body(&body)?;
    let ticket_id = state.ledger.book_ticket(BookingRequest {
        train_id: req.train_id,
        passenger_ids: req.passenger_ids,
        from: req.from,
        to: req.to,
    })?;
    Ok((StatusCode::CREATED, Json(BookTicketResponse { ticket_id })))
}

/// Seats free for an exact segment.
async fn available_seats(
    State(state): State<AppState>,
    Path(train_id): Path<u32>,
    Query(req): Query<SeatsQuery>,
) -> Result<Json<SeatsResponse>, AppError> {
    let train_id = TrainId(train_id);
    let from = parse_station("from", &req.from)?;
    let to = parse_station("to", &req.to)?;
    let available_seats = state.ledger.available_seats(train_id, from, to)?;
    Ok(Json(SeatsResponse {
        train_id,
        from,
        to,
        available_seats,
    }))
}

/// Passengers boarding at a station.
async fn boarding_count(
    State(state): State<AppState>,
    Path((train_id, station)): Path<(u32, String)>,
) -> Result<Json<BoardingResponse>, AppError> {
    let train_id = TrainId(train_id);
    let station = parse_station("boarding", &station)?;
    let boarding = state.ledger.boarding_count(train_id, station)?;
    Ok(Json(BoardingResponse {
        train_id,
        station,
        boarding,
    }))
}

/// Oldest passenger on a train.
async fn oldest_age(
    State(state): State<AppState>,
    Path(train_id): Path<u32>,
) -> Result<Json<OldestResponse>, AppError> {
    let train_id = TrainId(train_id);
    let oldest_age = state.ledger.oldest_age(train_id)?;
    Ok(Json(OldestResponse {
        train_id,
        oldest_age,
    }))
}

/// Trains arriving at a station inside a time window.
async fn trains_through(
    State(state): State<AppState>,
    Path(station): Path<String>,
    Query(req): Query<WindowQuery>,
) -> Result<Json<TrainsThroughResponse>, AppError> {
    let station = parse_station("arrival", &station)?;
    let start = parse_time("start", &req.start)?;
    let end = parse_time("end", &req.end)?;
    let train_ids = state.ledger.trains_through(station, start, end);
    Ok(Json(TrainsThroughResponse { station, train_ids }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unprocessable { message: String },
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        let message = e.to_string();
        match e {
            LedgerError::TrainNotFound(_) | LedgerError::PassengerNotFound(_) => {
                AppError::NotFound { message }
            }
            LedgerError::NoBoarding => AppError::Unprocessable { message },
            LedgerError::InsufficientSeats { .. } => AppError::Conflict { message },
            LedgerError::InvalidRoute(_)
            | LedgerError::InvalidSeats
            | LedgerError::EmptyTicket
            | LedgerError::InvalidSegment { .. } => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
