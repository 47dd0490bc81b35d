//! Admin CRUD client methods
//!
//! Every admin resource follows the same REST layout under `/admin`, so the
//! methods take the resource as a parameter instead of repeating five times.

use super::request::ApiRequest;
use super::{ApiClient, ClientError};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Resources managed from the admin screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminResource {
    Users,
    Categories,
    Courses,
    Chapters,
    Lessons,
}

impl AdminResource {
    pub const ALL: [AdminResource; 5] = [
        Self::Users,
        Self::Categories,
        Self::Courses,
        Self::Chapters,
        Self::Lessons,
    ];

    /// Collection path, e.g. `/admin/courses`
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Users => "/admin/users",
            Self::Categories => "/admin/categories",
            Self::Courses => "/admin/courses",
            Self::Chapters => "/admin/chapters",
            Self::Lessons => "/admin/lessons",
        }
    }

    /// Item path, e.g. `/admin/courses/42`
    pub fn item_path(self, id: &str) -> String {
        format!("{}/{id}", self.collection_path())
    }
}

impl fmt::Display for AdminResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_path().trim_start_matches("/admin/"))
    }
}

impl ApiClient {
    /// List a resource, optionally filtered by query pairs
    pub async fn admin_list(
        &self,
        resource: AdminResource,
        query: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let request = query
            .iter()
            .fold(ApiRequest::get(resource.collection_path()), |req, (k, v)| {
                req.query(*k, v)
            });
        self.execute(request).await
    }

    pub async fn admin_get(&self, resource: AdminResource, id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(resource.item_path(id))).await
    }

    pub async fn admin_create<B: Serialize + ?Sized>(
        &self,
        resource: AdminResource,
        body: &B,
    ) -> Result<Value, ClientError> {
        let request = ApiRequest::post(resource.collection_path()).json(body)?;
        self.execute(request).await
    }

    pub async fn admin_update<B: Serialize + ?Sized>(
        &self,
        resource: AdminResource,
        id: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        let request = ApiRequest::put(resource.item_path(id)).json(body)?;
        self.execute(request).await
    }

    pub async fn admin_delete(&self, resource: AdminResource, id: &str) -> Result<(), ClientError> {
        self.execute_empty(ApiRequest::delete(resource.item_path(id)))
            .await
    }

    /// Chapters belonging to one course, in display order
    pub async fn admin_course_chapters(&self, course_id: &str) -> Result<Value, ClientError> {
        let path = format!("{}/chapters", AdminResource::Courses.item_path(course_id));
        self.execute(ApiRequest::get(path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_core::Namespace;

    #[test]
    fn test_every_resource_is_admin_namespace() {
        for resource in AdminResource::ALL {
            assert_eq!(
                Namespace::from_path(resource.collection_path()),
                Namespace::Admin
            );
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(AdminResource::Lessons.item_path("9"), "/admin/lessons/9");
        assert_eq!(AdminResource::Categories.to_string(), "categories");
    }
}
