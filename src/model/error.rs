use thiserror::Error;

/// Validation failures reported through [`ResultModel::errors`](super::ResultModel).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityError {
    #[error("User handle is blank")]
    BlankUserHandle,
}

impl ActivityError {
    /// Wire code as it appears in the `errors` array.
    pub fn code(&self) -> &'static str {
        match self {
            ActivityError::BlankUserHandle => "blank_user_handle",
        }
    }
}
