#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    /// Rejection for a method the favorites resource does not implement.
    ///
    /// `path` is the request path relative to the API root, e.g.
    /// `/favorites/7`.
    pub fn unsupported(method: &str, path: &str) -> Self {
        CoreError::Forbidden(format!("{method} operation not supported on {path}"))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn unsupported_is_forbidden_with_method_and_path() {
        let err = CoreError::unsupported("PUT", "/favorites/3");
        assert_matches!(
            &err,
            CoreError::Forbidden(msg) if msg == "PUT operation not supported on /favorites/3"
        );
    }
}
