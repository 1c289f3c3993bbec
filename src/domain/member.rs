use super::{MemberId, MemberName};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
}

impl Member {
    /// Builds an unsaved member. Its id stays at the default `0` until a
    /// store assigns one on save.
    pub fn new(name: MemberName) -> Self {
        Self {
            id: MemberId::default(),
            name,
        }
    }
}
