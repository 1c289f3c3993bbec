use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Member, MemberAPIError, MemberId, MemberName},
    AppState,
};

#[tracing::instrument(name = "Join member route handler", skip_all)]
pub async fn join_member(
    State(state): State<AppState>,
    Json(request): Json<JoinMemberRequest>,
) -> Result<(StatusCode, Json<JoinMemberResponse>), MemberAPIError> {
    let member = Member::new(MemberName::new(request.name));

    let id = state.member_service.join(member).await?;

    Ok((StatusCode::CREATED, Json(JoinMemberResponse { id })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinMemberRequest {
    pub name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinMemberResponse {
    pub id: MemberId,
}
