use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Member, MemberAPIError, MemberId},
    AppState,
};

#[tracing::instrument(name = "Get member route handler", skip_all)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<MemberResponse>, MemberAPIError> {
    let member_id = MemberId::parse(&member_id)?;
    tracing::debug!("member_id: {}", member_id);

    let member = state
        .member_service
        .find_one(&member_id)
        .await
        .ok_or(MemberAPIError::MemberNotFound(member_id))?;

    Ok(Json(member.into()))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name.as_ref().to_owned(),
        }
    }
}
