use crate::error::ValidationError;

/// The project whose latest release is being asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub owner: String,
    pub repo: String,
}

impl ReleaseQuery {
    /// Reads `owner` and `repo` from a raw (still percent-encoded) query string.
    ///
    /// Only the first occurrence of each key counts. Both must be present and
    /// non-empty; their contents are otherwise taken as-is.
    pub fn from_query(raw: Option<&str>) -> Result<Self, ValidationError> {
        let mut owner = None;
        let mut repo = None;

        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "owner" if owner.is_none() => owner = Some(value.into_owned()),
                "repo" if repo.is_none() => repo = Some(value.into_owned()),
                _ => {}
            }
        }

        match (owner, repo) {
            (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok(ReleaseQuery { owner, repo })
            }
            _ => Err(ValidationError::MissingOwnerOrRepo),
        }
    }
}
