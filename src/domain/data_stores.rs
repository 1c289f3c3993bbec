use super::{Member, MemberId, MemberName};

/// In-memory keeper of member records. Lookups report absence with `None`.
#[async_trait::async_trait]
pub trait MemberStore {
    /// Assigns the next sequential id to `member`, stores it and returns the
    /// identified member.
    async fn save(&mut self, member: Member) -> Member;
    async fn find_by_id(&self, id: &MemberId) -> Option<Member>;
    async fn find_by_name(&self, name: &MemberName) -> Option<Member>;
    async fn find_all(&self) -> Vec<Member>;
    /// Removes every member. The id sequence is left untouched.
    async fn clear(&mut self);
}
