use crate::domain::{Member, MemberId, MemberName, MemberStore};
use std::collections::HashMap;

#[derive(Default)]
pub struct HashmapMemberStore {
    members: HashMap<MemberId, Member>,
    sequence: u64,
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    async fn save(&mut self, mut member: Member) -> Member {
        self.sequence += 1;
        member.id = MemberId::new(self.sequence);

        self.members.insert(member.id, member.clone());
        member
    }

    async fn find_by_id(&self, id: &MemberId) -> Option<Member> {
        self.members.get(id).cloned()
    }

    async fn find_by_name(&self, name: &MemberName) -> Option<Member> {
        self.members
            .values()
            .find(|member| &member.name == name)
            .cloned()
    }

    async fn find_all(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self.members.values().cloned().collect();
        members.sort_by_key(|member| member.id);
        members
    }

    async fn clear(&mut self) {
        self.members.clear();
    }
}
