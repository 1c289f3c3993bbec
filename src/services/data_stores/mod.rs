mod hashmap_member_store;

pub use hashmap_member_store::*;
