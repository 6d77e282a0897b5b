//! Persistence gateway for students.
//!
//! The service talks to storage through the [`StudentRepository`] trait so
//! the concrete store stays swappable; production uses
//! [`PgStudentRepository`], tests use the in-memory implementation behind
//! the `test-utils` feature.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::modules::students::model::Student;
use crate::utils::errors::AppError;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persists a student. `id: None` inserts a new row and returns it with
    /// its assigned id; `id: Some` overwrites `name` and `email` of that row.
    async fn save(&self, id: Option<i64>, name: &str, email: &str) -> Result<Student, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// All rows, in store order.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    /// Removes the row if present; returns the number of rows affected.
    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError>;

    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn save(&self, id: Option<i64>, name: &str, email: &str) -> Result<Student, AppError> {
        let student = match id {
            None => {
                sqlx::query_as::<_, Student>(
                    r#"
                    INSERT INTO students (name, email)
                    VALUES ($1, $2)
                    RETURNING id, name, email
                    "#,
                )
                .bind(name)
                .bind(email)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, Student>(
                    r#"
                    UPDATE students
                    SET name = $1, email = $2
                    WHERE id = $3
                    RETURNING id, name, email
                    "#,
                )
                .bind(name)
                .bind(email)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
        }
        .context("Failed to save student")
        .map_err(AppError::database)?;

        Ok(student)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check student existence")
            .map_err(AppError::database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count students")
            .map_err(AppError::database)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory {
    //! In-memory gateway used by tests in place of PostgreSQL. Ids are
    //! assigned from a monotonic counter and never reused after deletion.

    use std::collections::BTreeMap;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::StudentRepository;
    use crate::modules::students::model::Student;
    use crate::utils::errors::AppError;

    #[derive(Debug, Default)]
    pub struct InMemoryStudentRepository {
        inner: Mutex<Inner>,
    }

    #[derive(Debug, Default)]
    struct Inner {
        rows: BTreeMap<i64, Student>,
        next_id: i64,
    }

    #[async_trait]
    impl StudentRepository for InMemoryStudentRepository {
        async fn save(
            &self,
            id: Option<i64>,
            name: &str,
            email: &str,
        ) -> Result<Student, AppError> {
            let mut inner = self.inner.lock().await;

            match id {
                None => {
                    inner.next_id += 1;
                    let student = Student {
                        id: inner.next_id,
                        name: name.to_string(),
                        email: email.to_string(),
                    };
                    inner.rows.insert(student.id, student.clone());
                    Ok(student)
                }
                Some(id) => {
                    let row = inner.rows.get_mut(&id).ok_or_else(|| {
                        AppError::database(anyhow::anyhow!("no student row with id {}", id))
                    })?;
                    row.name = name.to_string();
                    row.email = email.to_string();
                    Ok(row.clone())
                }
            }
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
            Ok(self.inner.lock().await.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Student>, AppError> {
            Ok(self.inner.lock().await.rows.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
            Ok(self.inner.lock().await.rows.remove(&id).map_or(0, |_| 1))
        }

        async fn exists(&self, id: i64) -> Result<bool, AppError> {
            Ok(self.inner.lock().await.rows.contains_key(&id))
        }

        async fn count(&self) -> Result<i64, AppError> {
            Ok(self.inner.lock().await.rows.len() as i64)
        }
    }
}
