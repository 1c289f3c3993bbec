use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{domain::MemberStore, services::member_service::MemberService};

pub type MemberStoreType = Arc<RwLock<dyn MemberStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub member_service: MemberService,
}

impl AppState {
    pub fn new(member_store: MemberStoreType) -> Self {
        Self {
            member_service: MemberService::new(member_store),
        }
    }
}
