use crate::application::engine::BalanceEngine;
use crate::domain::operation::{Operation, OperationKind};
use crate::domain::wallet::Amount;
use crate::error::WalletError;
use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    engine: Arc<BalanceEngine>,
}

/// Builds the service router. All request validation and error-to-status
/// translation lives here; the engine only ever sees well-formed
/// operations.
pub fn router(engine: Arc<BalanceEngine>) -> Router {
    Router::new()
        .route("/api/v1/wallet", post(operation))
        .route("/api/v1/wallets/:wallet_id", get(current_balance))
        .with_state(AppState { engine })
}

#[derive(Debug, Deserialize)]
struct WalletRequest {
    #[serde(rename = "walletId")]
    wallet_id: Uuid,
    #[serde(rename = "operationType")]
    operation_type: String,
    amount: Decimal,
}

/// POST /api/v1/wallet - apply a deposit or withdrawal
async fn operation(
    State(state): State<AppState>,
    payload: Result<Json<WalletRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return (StatusCode::BAD_REQUEST, "Invalid request body!").into_response();
    };

    if request.amount < Decimal::ZERO {
        return (StatusCode::BAD_REQUEST, "Amount can't be negative!").into_response();
    }
    let Ok(amount) = Amount::new(request.amount) else {
        return (StatusCode::BAD_REQUEST, "Amount can't be zero!").into_response();
    };
    let Ok(kind) = request.operation_type.parse::<OperationKind>() else {
        return (StatusCode::BAD_REQUEST, "Incorrect operation type!").into_response();
    };

    let op = Operation {
        wallet_id: request.wallet_id,
        kind,
        amount,
    };
    match state.engine.apply(op).await {
        Ok(()) => {
            tracing::info!(wallet_id = %request.wallet_id, %kind, "operation applied");
            (
                StatusCode::OK,
                format!("The operation {kind} is successful!"),
            )
                .into_response()
        }
        Err(err) => domain_error_response(err, request.wallet_id),
    }
}

/// GET /api/v1/wallets/{walletId} - read the current balance
async fn current_balance(
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Response {
    let Ok(wallet_id) = Uuid::parse_str(&wallet_id) else {
        return (StatusCode::BAD_REQUEST, "Invalid UUID format!").into_response();
    };

    match state.engine.balance(wallet_id).await {
        Ok(balance) => (StatusCode::OK, format!("Your current balance: {balance}")).into_response(),
        Err(err) => domain_error_response(err, wallet_id),
    }
}

fn domain_error_response(err: WalletError, wallet_id: Uuid) -> Response {
    match err {
        WalletError::InsufficientBalance | WalletError::NonPositiveAmount => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        WalletError::WalletNotFound => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
        WalletError::Storage(source) => {
            tracing::error!(%wallet_id, error = %source, "storage failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
