/**
 * Code Snippet Handlers
 *
 * HTTP handlers for the `codes` collection.
 *
 * # Endpoints
 *
 * - `GET    /codes`      - public list with search and optional paging
 * - `POST   /codes`      - policy-gated; prepends and returns the whole collection
 * - `PUT    /codes/{id}` - admin; replaces the mutable fields
 * - `DELETE /codes/{id}` - admin; removes the snippet
 *
 * # Creation Policy
 *
 * Deployments disagree on whether snippet creation is public or
 * admin-only, so the check is a runtime policy flag rather than a route
 * layer: when `protect_code_posts` is set, the handler itself consults the
 * gate before touching the store.
 */

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::gate::ADMIN_KEY_HEADER;
use crate::backend::codes::types::{
    CodeActionResponse, CodeDeleteResponse, CodeListResponse, CodePayload,
    CodesCollectionResponse,
};
use crate::backend::collections::{
    delete_by_id, filter_substring, insert_front, paginate, update_by_id, ListQuery,
};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::document::CodeSnippet;

/// List snippets (public)
pub async fn list_codes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let filtered = state
        .coordinator
        .read(|doc| filter_substring(&doc.codes, query.needle()))
        .await?;

    if query.is_paged() {
        let (page, limit) = query.page_params();
        let page = paginate(&filtered, page, limit);
        Ok(Json(CodeListResponse {
            codes: page.items,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        })
        .into_response())
    } else {
        Ok(Json(filtered).into_response())
    }
}

/// Create a snippet (public or admin, per deployment policy)
///
/// Returns 200 with the entire mutated collection rather than the single
/// created record.
pub async fn create_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CodePayload>,
) -> Result<Json<CodesCollectionResponse>, ApiError> {
    if state.protect_code_posts {
        let header_value = headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if !state.gate.is_authorized(header_value) {
            tracing::warn!("Snippet creation denied by admin gate");
            return Err(ApiError::unauthorized("Admin access required"));
        }
    }

    payload.validate()?;
    tracing::info!("Creating code snippet: {}", payload.title);

    let codes = state
        .coordinator
        .mutate(move |doc| {
            let snippet = CodeSnippet::new(
                payload.title.trim().to_string(),
                payload.code.trim().to_string(),
            );
            insert_front(&mut doc.codes, snippet);
            Ok(doc.codes.clone())
        })
        .await?;

    Ok(Json(CodesCollectionResponse {
        success: true,
        codes,
    }))
}

/// Update a snippet (admin)
pub async fn update_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CodePayload>,
) -> Result<Json<CodeActionResponse>, ApiError> {
    payload.validate()?;
    tracing::info!("Updating code snippet: {}", id);

    let code = state
        .coordinator
        .mutate(move |doc| {
            update_by_id(&mut doc.codes, &id, |snippet| {
                snippet.title = payload.title.trim().to_string();
                snippet.code = payload.code.trim().to_string();
            })
            .ok_or_else(|| ApiError::not_found(format!("Code snippet {id} not found")))
        })
        .await?;

    Ok(Json(CodeActionResponse {
        success: true,
        code,
    }))
}

/// Delete a snippet (admin)
pub async fn delete_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CodeDeleteResponse>, ApiError> {
    tracing::info!("Deleting code snippet: {}", id);

    state
        .coordinator
        .mutate(move |doc| {
            delete_by_id(&mut doc.codes, &id)
                .ok_or_else(|| ApiError::not_found(format!("Code snippet {id} not found")))
        })
        .await?;

    Ok(Json(CodeDeleteResponse {
        success: true,
        message: "Code snippet deleted".to_string(),
    }))
}
