use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::AuthSession, state::AppState};


const APP_URL: &str = "http://testserver";

fn app_state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), APP_URL.to_string())
}

/// Makes `user_id` the acting user of the session.
async fn login(session: &Session, user_id: i32) -> Result<(), AppError> {
    AuthSession::new(session).set_user_id(user_id).await
}

async fn logout(session: &Session) {
    AuthSession::new(session).clear().await;
}

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&body_bytes).unwrap()
}
