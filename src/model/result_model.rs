use super::{ActivityError, ActivityResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Envelope carries both errors and data")]
    Both,

    #[error("Envelope carries neither errors nor data")]
    Neither,

    #[error("Envelope carries an empty error list")]
    EmptyErrors,
}

/// Response envelope of an activity lookup.
///
/// Exactly one of `errors` and `data` is populated. Both are serialized as
/// `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResultModel")]
pub struct ResultModel {
    errors: Option<Vec<String>>,
    data: Option<Vec<ActivityResult>>,
}

#[derive(Deserialize)]
struct RawResultModel {
    #[serde(default)]
    errors: Option<Vec<String>>,
    #[serde(default)]
    data: Option<Vec<ActivityResult>>,
}

impl TryFrom<RawResultModel> for ResultModel {
    type Error = EnvelopeError;

    fn try_from(raw: RawResultModel) -> Result<Self, Self::Error> {
        match (raw.errors, raw.data) {
            (Some(_), Some(_)) => Err(EnvelopeError::Both),
            (None, None) => Err(EnvelopeError::Neither),
            (Some(errors), None) if errors.is_empty() => Err(EnvelopeError::EmptyErrors),
            (errors, data) => Ok(Self { errors, data }),
        }
    }
}

impl ResultModel {
    pub fn success(data: Vec<ActivityResult>) -> Self {
        Self {
            errors: None,
            data: Some(data),
        }
    }

    pub fn failure(error: ActivityError) -> Self {
        Self {
            errors: Some(vec![error.code().to_string()]),
            data: None,
        }
    }

    pub fn errors(&self) -> Option<&[String]> {
        self.errors.as_deref()
    }

    pub fn data(&self) -> Option<&[ActivityResult]> {
        self.data.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_none()
    }

    /// Splits the envelope into the payload a caller answers with.
    pub fn into_result(self) -> Result<Vec<ActivityResult>, Vec<String>> {
        match (self.errors, self.data) {
            (Some(errors), _) => Err(errors),
            (None, data) => Ok(data.unwrap_or_default()),
        }
    }
}
