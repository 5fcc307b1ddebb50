use axum::{extract::State, Json};
use serde::Serialize;

use crate::database::activity_directory_repo::ActivityMap;
use crate::services::signup_service;
use crate::web::error::ApiResult;
use crate::web::extract::{ActivityName, EmailParam};
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(signup_service::list_activities(state.activities.as_ref()))
}

pub async fn signup_handler(
    ActivityName(activity_name): ActivityName,
    EmailParam(email): EmailParam,
    State(state): State<AppState>,
) -> ApiResult<Json<MessageBody>> {
    let message = signup_service::sign_up(state.activities.as_ref(), &activity_name, &email)?;
    Ok(Json(MessageBody { message }))
}

pub async fn unregister_handler(
    ActivityName(activity_name): ActivityName,
    EmailParam(email): EmailParam,
    State(state): State<AppState>,
) -> ApiResult<Json<MessageBody>> {
    let message = signup_service::unregister(state.activities.as_ref(), &activity_name, &email)?;
    Ok(Json(MessageBody { message }))
}
