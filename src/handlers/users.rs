use crate::dtos::UserResponse;
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};

/// Strict lower bound on `age`; a record at exactly 21 is filtered out.
const AGE_FLOOR: i64 = 21;

/// GET /users/:id
///
/// Looks up one user by ObjectId, returning it only when `age > 21`.
/// An id that exists but fails the age filter is indistinguishable from an
/// id that does not exist: both resolve to `{"user": null}` with a 200.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let oid = ObjectId::parse_str(&id).map_err(|e| {
        tracing::warn!(id = %id, "Rejected malformed user id: {}", e);
        AppError::BadRequest(anyhow::anyhow!("Invalid Params"))
    })?;

    let filter = doc! { "_id": oid, "age": { "$gt": AGE_FLOOR } };
    let users = state.db.users();
    let lookup = users.find_one(filter, None);

    let user = tokio::time::timeout(state.config.query_timeout, lookup)
        .await
        .map_err(|_| {
            tracing::error!(
                id = %id,
                timeout_ms = state.config.query_timeout.as_millis() as u64,
                "User lookup exceeded query timeout"
            );
            AppError::QueryTimeout
        })?
        .map_err(|e| {
            tracing::error!(id = %id, "Mongo query error: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(UserResponse { user }))
}
