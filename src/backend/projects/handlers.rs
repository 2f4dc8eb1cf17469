/**
 * Project Handlers
 *
 * HTTP handlers for the `projects` collection.
 *
 * # Endpoints
 *
 * - `GET    /projects`       - public list with search and optional paging
 * - `POST   /projects`       - admin; prepends a new project (201)
 * - `PUT    /projects/{id}`  - admin; replaces the mutable fields
 * - `DELETE /projects/{id}`  - admin; removes the project
 *
 * # List Contract
 *
 * Without `page`/`limit` the response is the bare filtered array, matching
 * what older deployments returned. With either parameter present the
 * response is the `{projects, total, page, totalPages}` envelope.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::collections::{
    delete_by_id, filter_substring, insert_front, paginate, update_by_id, ListQuery,
};
use crate::backend::error::ApiError;
use crate::backend::projects::types::{
    ProjectActionResponse, ProjectDeleteResponse, ProjectListResponse, ProjectPayload,
};
use crate::backend::server::state::AppState;
use crate::backend::store::document::Project;

/// List projects (public)
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let filtered = state
        .coordinator
        .read(|doc| filter_substring(&doc.projects, query.needle()))
        .await?;

    if query.is_paged() {
        let (page, limit) = query.page_params();
        let page = paginate(&filtered, page, limit);
        Ok(Json(ProjectListResponse {
            projects: page.items,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        })
        .into_response())
    } else {
        Ok(Json(filtered).into_response())
    }
}

/// Create a project (admin)
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<ProjectActionResponse>), ApiError> {
    payload.validate()?;
    tracing::info!("Creating project: {}", payload.title);

    let project = state
        .coordinator
        .mutate(move |doc| {
            let project = Project::new(
                payload.title.trim().to_string(),
                payload.description.trim().to_string(),
                payload.image_url,
                payload.live_url,
                payload.github_url,
                payload.tags,
            );
            insert_front(&mut doc.projects, project.clone());
            Ok(project)
        })
        .await?;

    tracing::info!("Project created: {}", project.id);

    Ok((
        StatusCode::CREATED,
        Json(ProjectActionResponse {
            success: true,
            project,
        }),
    ))
}

/// Update a project (admin)
///
/// Replaces the mutable fields, preserves `id` and `createdAt`, and stamps
/// `updatedAt`.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<ProjectActionResponse>, ApiError> {
    payload.validate()?;
    tracing::info!("Updating project: {}", id);

    let project = state
        .coordinator
        .mutate(move |doc| {
            update_by_id(&mut doc.projects, &id, |project| {
                project.title = payload.title.trim().to_string();
                project.description = payload.description.trim().to_string();
                project.image_url = payload.image_url;
                project.live_url = payload.live_url;
                project.github_url = payload.github_url;
                project.tags = payload.tags;
            })
            .ok_or_else(|| ApiError::not_found(format!("Project {id} not found")))
        })
        .await?;

    Ok(Json(ProjectActionResponse {
        success: true,
        project,
    }))
}

/// Delete a project (admin)
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectDeleteResponse>, ApiError> {
    tracing::info!("Deleting project: {}", id);

    state
        .coordinator
        .mutate(move |doc| {
            delete_by_id(&mut doc.projects, &id)
                .ok_or_else(|| ApiError::not_found(format!("Project {id} not found")))
        })
        .await?;

    Ok(Json(ProjectDeleteResponse {
        success: true,
        message: "Project deleted".to_string(),
    }))
}
