use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(u64);

impl MemberId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.parse::<u64>().map_err(|e| {
            ValidationError::new(format!("Invalid member ID: {e}"))
        })?;
        Ok(Self(parsed))
    }

    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl AsRef<u64> for MemberId {
    fn as_ref(&self) -> &u64 {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_valid_ids() {
    for valid_id in ["1", "42", "18446744073709551615"] {
        let parsed = MemberId::parse(valid_id).expect(valid_id);
        assert_eq!(
            parsed.to_string(),
            valid_id,
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    let invalid_id = "spring";
    let result = MemberId::parse(invalid_id);
    let error = result.expect_err(invalid_id);
    assert_eq!(
        error.as_ref(),
        "Invalid member ID: invalid digit found in string"
    );

    assert!(MemberId::parse("-1").is_err());
    assert!(MemberId::parse("").is_err());
}
