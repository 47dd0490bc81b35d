//! Student-facing client methods: catalog, lessons, comments, ratings,
//! progress and notes

use super::request::ApiRequest;
use super::{ApiClient, ClientError};
use crate::types::{CommentRequest, CourseQuery, NoteRequest, ProgressRequest, RatingRequest};
use serde_json::Value;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get("/categories")).await
    }

    pub async fn list_courses(&self, query: &CourseQuery) -> Result<Value, ClientError> {
        let request = query
            .to_pairs()
            .into_iter()
            .fold(ApiRequest::get("/courses"), |req, (k, v)| req.query(k, v));
        self.execute(request).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(format!("/courses/{course_id}")))
            .await
    }

    /// Chapters of a course with their lessons
    pub async fn list_chapters(&self, course_id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(format!("/courses/{course_id}/chapters")))
            .await
    }

    pub async fn get_lesson(&self, lesson_id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(format!("/lessons/{lesson_id}")))
            .await
    }

    pub async fn list_comments(&self, lesson_id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(format!("/lessons/{lesson_id}/comments")))
            .await
    }

    pub async fn add_comment(
        &self,
        lesson_id: &str,
        content: impl Into<String>,
    ) -> Result<Value, ClientError> {
        let request = ApiRequest::post(format!("/lessons/{lesson_id}/comments")).json(
            &CommentRequest {
                content: content.into(),
            },
        )?;
        self.execute(request).await
    }

    /// Rate a course from 1 to 5 stars
    pub async fn rate_course(
        &self,
        course_id: &str,
        rating: u8,
        review: Option<String>,
    ) -> Result<Value, ClientError> {
        if !(RatingRequest::MIN..=RatingRequest::MAX).contains(&rating) {
            return Err(ClientError::BadRequest(format!(
                "rating must be between {} and {}, got {rating}",
                RatingRequest::MIN,
                RatingRequest::MAX
            )));
        }

        let request = ApiRequest::post(format!("/courses/{course_id}/ratings"))
            .json(&RatingRequest { rating, review })?;
        self.execute(request).await
    }

    /// Completion state of every lesson in a course
    pub async fn get_progress(&self, course_id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(format!("/courses/{course_id}/progress")))
            .await
    }

    pub async fn set_lesson_completed(
        &self,
        lesson_id: &str,
        completed: bool,
    ) -> Result<Value, ClientError> {
        let request = ApiRequest::post(format!("/lessons/{lesson_id}/progress"))
            .json(&ProgressRequest { completed })?;
        self.execute(request).await
    }

    pub async fn list_notes(&self, lesson_id: &str) -> Result<Value, ClientError> {
        self.execute(ApiRequest::get(format!("/lessons/{lesson_id}/notes")))
            .await
    }

    pub async fn add_note(
        &self,
        lesson_id: &str,
        content: impl Into<String>,
    ) -> Result<Value, ClientError> {
        let request = ApiRequest::post(format!("/lessons/{lesson_id}/notes")).json(
            &NoteRequest {
                content: content.into(),
            },
        )?;
        self.execute(request).await
    }

    pub async fn delete_note(&self, note_id: &str) -> Result<(), ClientError> {
        self.execute_empty(ApiRequest::delete(format!("/notes/{note_id}")))
            .await
    }
}
