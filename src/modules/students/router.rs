//! Route table for the student endpoints.
//!
//! Mounted under `/api/students` by the top-level router, which also attaches
//! the admin authority requirement as a route layer, so nothing here runs for
//! unauthenticated or non-admin requests.

use axum::Router;
use axum::routing::{get, post};

use crate::modules::students::controller;
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    // Collection routes: create and list
    let collection = post(controller::create_student).get(controller::get_students);

    // Member routes: read, overwrite, remove a single row by id
    let member = get(controller::get_student)
        .put(controller::update_student)
        .delete(controller::delete_student);

    Router::new().route("/", collection).route("/{id}", member)
}
