use axum::extract::{rejection::QueryRejection, Query};

use crate::error::{AppError, RouteError};

/// Raw query pairs in request order
///
/// Repeated keys are allowed; lookups return the first occurrence.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Unwraps the extractor result, turning a rejection into an enveloped error
    pub fn extract(
        query: Result<Query<Vec<(String, String)>>, QueryRejection>,
        endpoint: &'static str,
    ) -> Result<Self, RouteError> {
        match query {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(rejection) => Err(AppError::MissingParameter(format!(
                "Invalid query string: {}",
                rejection.body_text()
            ))
            .at(endpoint)),
        }
    }

    /// First value of `key`; absent and empty values are both `None`
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_first_value_wins() {
        let params = params(&[("q", "a"), ("q", "b")]);
        assert_eq!(params.first("q").as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_is_missing_but_whitespace_is_kept() {
        let params = params(&[("q", ""), ("id", " ")]);
        assert_eq!(params.first("q"), None);
        assert_eq!(params.first("id").as_deref(), Some(" "));
        assert_eq!(params.first("format"), None);
    }
}
