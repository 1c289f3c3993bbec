use serde::{Deserialize, Serialize};

/// Display name of a member. Any string is accepted; uniqueness is the only
/// rule and it is enforced by the member service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberName(String);

impl MemberName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_names_are_kept_verbatim() {
    let names = vec![
        "spring".to_string(),
        "Spring".to_string(),
        "".to_string(),
        " padded ".to_string(),
        "a".repeat(1024),
    ];
    for name in names.iter() {
        assert_eq!(MemberName::new(name.as_str()).as_ref(), name);
    }
}
