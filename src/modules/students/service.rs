use tracing::instrument;

use crate::modules::students::model::{Student, StudentPayload};
use crate::modules::students::repository::StudentRepository;
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(repo, payload))]
    pub async fn create(
        repo: &dyn StudentRepository,
        payload: StudentPayload,
    ) -> Result<Student, AppError> {
        repo.save(None, &payload.name, &payload.email).await
    }

    #[instrument(skip(repo))]
    pub async fn get_all(repo: &dyn StudentRepository) -> Result<Vec<Student>, AppError> {
        repo.find_all().await
    }

    #[instrument(skip(repo))]
    pub async fn get_by_id(repo: &dyn StudentRepository, id: i64) -> Result<Student, AppError> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))
    }

    /// Overwrites `name` and `email` of an existing row; the payload's own
    /// `id` is ignored. Fails with NotFound before touching the store when
    /// the row does not exist.
    #[instrument(skip(repo, payload))]
    pub async fn update(
        repo: &dyn StudentRepository,
        id: i64,
        payload: StudentPayload,
    ) -> Result<Student, AppError> {
        let existing = Self::get_by_id(repo, id).await?;

        repo.save(Some(existing.id), &payload.name, &payload.email)
            .await
    }

    /// Idempotent: deleting an absent id is a no-op, not an error.
    #[instrument(skip(repo))]
    pub async fn delete(repo: &dyn StudentRepository, id: i64) -> Result<(), AppError> {
        repo.delete_by_id(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::students::repository::in_memory::InMemoryStudentRepository;

    fn payload(name: &str, email: &str) -> StudentPayload {
        StudentPayload {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id_round_trips() {
        let repo = InMemoryStudentRepository::default();

        let created = StudentService::create(&repo, payload("John Doe", "john.doe@example.com"))
            .await
            .unwrap();
        let fetched = StudentService::get_by_id(&repo, created.id).await.unwrap();

        assert_eq!(fetched.name, "John Doe");
        assert_eq!(fetched.email, "john.doe@example.com");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_create_ignores_payload_id() {
        let repo = InMemoryStudentRepository::default();

        let mut dto = payload("Jane", "jane@example.com");
        dto.id = Some(9999);
        let created = StudentService::create(&repo, dto).await.unwrap();

        assert_ne!(created.id, 9999);
        assert!(StudentService::get_by_id(&repo, 9999).await.is_err());
    }

    #[tokio::test]
    async fn test_get_all_returns_every_created_student() {
        let repo = InMemoryStudentRepository::default();

        for i in 0..3 {
            StudentService::create(&repo, payload(&format!("s{i}"), &format!("s{i}@x.com")))
                .await
                .unwrap();
        }

        let all = StudentService::get_all(&repo).await.unwrap();
        assert_eq!(all.len(), 3);
        for i in 0..3 {
            assert!(all.iter().any(|s| s.name == format!("s{i}")));
        }
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let repo = InMemoryStudentRepository::default();

        let err = StudentService::get_by_id(&repo, 42).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Student not found");
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let repo = InMemoryStudentRepository::default();

        let created = StudentService::create(&repo, payload("Old Name", "old@example.com"))
            .await
            .unwrap();
        let updated =
            StudentService::update(&repo, created.id, payload("New Name", "new@example.com"))
                .await
                .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.email, "new@example.com");

        let fetched = StudentService::get_by_id(&repo, created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_mutates_nothing() {
        let repo = InMemoryStudentRepository::default();

        let err = StudentService::update(&repo, 42, payload("x", "x@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryStudentRepository::default();

        let created = StudentService::create(&repo, payload("a", "a@x.com"))
            .await
            .unwrap();
        assert!(repo.exists(created.id).await.unwrap());

        StudentService::delete(&repo, created.id).await.unwrap();
        assert!(!repo.exists(created.id).await.unwrap());
        assert!(StudentService::get_by_id(&repo, created.id).await.is_err());

        // Second delete of the same id is a no-op
        StudentService::delete(&repo, created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryStudentRepository::default();

        let first = StudentService::create(&repo, payload("a", "a@x.com"))
            .await
            .unwrap();
        StudentService::delete(&repo, first.id).await.unwrap();

        let second = StudentService::create(&repo, payload("b", "b@x.com"))
            .await
            .unwrap();
        assert!(second.id > first.id);
    }
}
