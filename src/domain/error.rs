use color_eyre::eyre::Report;
use thiserror::Error;

use super::{MemberId, MemberName};

#[derive(Debug, Error)]
pub enum HelloAPIError {
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

#[derive(Debug, Error)]
pub enum MemberAPIError {
    #[error("Member already exists: {0:?}")]
    DuplicateMember(MemberName),
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum MemberServiceError {
    #[error("Member already exists")]
    DuplicateMember(MemberName),
}

impl PartialEq for MemberServiceError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DuplicateMember(_), Self::DuplicateMember(_))
        )
    }
}

impl From<MemberServiceError> for MemberAPIError {
    fn from(error: MemberServiceError) -> Self {
        match error {
            MemberServiceError::DuplicateMember(name) => {
                Self::DuplicateMember(name)
            }
        }
    }
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
