//! Wire types for the LearnHub API
//!
//! Only the fields the client itself relies on are typed. Everything else the
//! API returns is passed through as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /admin/refresh-token`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Response of `POST /admin/refresh-token`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

/// Credentials for admin and user login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /admin/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Value>,
}

/// Response of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
}

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Filters for the public course listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl CourseQuery {
    /// Non-empty filters as query pairs
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category_id) = &self.category_id {
            pairs.push(("categoryId", category_id.clone()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Body of `POST /lessons/{id}/comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Body of `POST /courses/{id}/ratings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl RatingRequest {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
}

/// Body of `POST /lessons/{id}/progress`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub completed: bool,
}

/// Body of `POST /lessons/{id}/notes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_wire_names() {
        let body = serde_json::to_value(RefreshTokenRequest {
            refresh_token: "r1".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "refreshToken": "r1" }));

        let response: RefreshTokenResponse =
            serde_json::from_value(json!({ "accessToken": "T2" })).unwrap();
        assert_eq!(response.access_token, "T2");
    }

    #[test]
    fn test_admin_login_response_extra_fields() {
        let response: AdminLoginResponse = serde_json::from_value(json!({
            "accessToken": "a",
            "refreshToken": "r",
            "admin": { "id": "1", "email": "root@learnhub.test" },
            "message": "ok"
        }))
        .unwrap();
        assert_eq!(response.refresh_token, "r");
        assert!(response.admin.is_some());
    }

    #[test]
    fn test_course_query_pairs_skip_empty() {
        let query = CourseQuery {
            category_id: Some("c1".into()),
            search: Some(String::new()),
            page: Some(2),
            limit: None,
        };
        assert_eq!(
            query.to_pairs(),
            vec![("categoryId", "c1".to_string()), ("page", "2".to_string())]
        );
    }
}
