use crate::{
    app_state::MemberStoreType,
    domain::{Member, MemberId, MemberServiceError},
};

/// Registers members and looks them up. Holds the single business rule:
/// no two members share a name.
#[derive(Clone)]
pub struct MemberService {
    member_store: MemberStoreType,
}

impl MemberService {
    pub fn new(member_store: MemberStoreType) -> Self {
        Self { member_store }
    }

    /// Saves `member` unless its name is taken and returns the assigned id.
    ///
    /// The write guard is held across the duplicate check and the save, so
    /// concurrent joins with the same name cannot both succeed.
    #[tracing::instrument(name = "Join member", skip_all)]
    pub async fn join(
        &self,
        member: Member,
    ) -> Result<MemberId, MemberServiceError> {
        let mut member_store = self.member_store.write().await;

        if let Some(existing) = member_store.find_by_name(&member.name).await {
            tracing::debug!("name already taken by member {}", existing.id);
            return Err(MemberServiceError::DuplicateMember(member.name));
        }

        let saved = member_store.save(member).await;
        tracing::debug!("member_id: {}", saved.id);

        Ok(saved.id)
    }

    #[tracing::instrument(name = "Find members", skip_all)]
    pub async fn find_members(&self) -> Vec<Member> {
        self.member_store.read().await.find_all().await
    }

    #[tracing::instrument(name = "Find member", skip(self))]
    pub async fn find_one(&self, member_id: &MemberId) -> Option<Member> {
        self.member_store.read().await.find_by_id(member_id).await
    }
}
