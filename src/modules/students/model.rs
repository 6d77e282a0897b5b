use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted student row. The id is server-assigned and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Inbound request body for create and update.
///
/// A payload is the transient form of a student: its `id` is accepted for
/// wire compatibility but always ignored (the server assigns ids on create,
/// and the path parameter names the row on update). Neither field is
/// validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}
