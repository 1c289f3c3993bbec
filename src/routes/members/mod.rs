mod get_member;
mod get_members;
mod join_member;

pub use get_member::{get_member, MemberResponse};
pub use get_members::{get_members, MemberListResponse};
pub use join_member::{join_member, JoinMemberRequest, JoinMemberResponse};
