use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::MemberResponse;
use crate::AppState;

#[tracing::instrument(name = "Get member list route handler", skip_all)]
pub async fn get_members(
    State(state): State<AppState>,
) -> Json<MemberListResponse> {
    let members = state.member_service.find_members().await;
    tracing::debug!("member count: {}", members.len());

    Json(MemberListResponse {
        members: members.into_iter().map(MemberResponse::from).collect(),
    })
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}
