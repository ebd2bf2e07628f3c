//! Outbound request description and resource URL building.

use reqwest::Method;

/// One outbound API call, captured before dispatch.
///
/// A pending request is created per call, consumed by the pipeline, and
/// executed at most once; it has no existence beyond a single call.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    method: Method,
    path: String,
    params: Vec<(String, String)>,
}

impl PendingRequest {
    /// Describe a GET call. Parameters become a percent-encoded query string.
    #[must_use]
    pub fn get(path: impl Into<String>, params: &[(&str, &str)]) -> Self {
        Self { method: Method::GET, path: path.into(), params: owned_params(params) }
    }

    /// Describe a POST call. Parameters are sent as form-encoded body fields.
    #[must_use]
    pub fn post(path: impl Into<String>, params: &[(&str, &str)]) -> Self {
        Self { method: Method::POST, path: path.into(), params: owned_params(params) }
    }

    /// HTTP method of this call.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Resource path, as supplied by the caller.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Call parameters.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

fn owned_params(params: &[(&str, &str)]) -> Vec<(String, String)> {
    params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

/// Join a resource path onto the API base, appending a percent-encoded
/// query string when parameters are given. A leading slash on the path is
/// stripped first so it resolves under the base rather than replacing it.
pub(crate) fn resource_url(base: &str, path: &str, params: &[(String, String)]) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut url = if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };

    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_slash_is_stripped() {
        let url = resource_url("https://api.example/rest/v1/", "/me/notifications", &[]);

        assert_eq!(url, "https://api.example/rest/v1/me/notifications");
    }

    #[test]
    fn test_base_without_trailing_slash_still_joins() {
        let url = resource_url("http://127.0.0.1:3999", "me", &[]);

        assert_eq!(url, "http://127.0.0.1:3999/me");
    }

    #[test]
    fn test_query_params_are_percent_encoded() {
        let params =
            vec![("fields".to_string(), "id,type".to_string()), ("q".to_string(), "a b".to_string())];
        let url = resource_url("https://api.example/rest/v1/", "notifications", &params);

        assert_eq!(
            url,
            "https://api.example/rest/v1/notifications?fields=id%2Ctype&q=a%20b"
        );
    }

    #[test]
    fn test_get_request_captures_params() {
        let request = PendingRequest::get("/me", &[("fields", "username")]);

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/me");
        assert_eq!(request.params(), &[("fields".to_string(), "username".to_string())]);
    }

    #[test]
    fn test_post_request_method() {
        let request = PendingRequest::post("posts/new", &[("title", "x")]);

        assert_eq!(request.method(), &Method::POST);
    }
}
