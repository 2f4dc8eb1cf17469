/**
 * API Route Registration
 *
 * This module registers the JSON API endpoints, split into a public group
 * and an admin group wrapped by the gate middleware.
 *
 * # Routes
 *
 * ## Public
 * - `GET  /projects` - List projects (search/page/limit)
 * - `GET  /codes` - List code snippets
 * - `POST /codes` - Create a snippet (the handler consults the gate when
 *   the deployment sets `CODES_REQUIRE_ADMIN`)
 * - `POST /signup` - User registration
 * - `POST /login` - User login
 *
 * ## Admin (gate-checked before the handler runs)
 * - `POST   /projects` / `PUT|DELETE /projects/{id}`
 * - `PUT|DELETE /codes/{id}`
 * - `GET /users` / `PUT|DELETE /users/{id}`
 * - `GET /api/admin/stats`
 *
 * The login and signup paths are registered in the public group so the
 * gate can never block the credential exchange itself.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::codes::{create_code, delete_code, list_codes, update_code};
use crate::backend::middleware::admin_middleware;
use crate::backend::projects::{create_project, delete_project, list_projects, update_project};
use crate::backend::server::state::AppState;
use crate::backend::stats::admin_stats;
use crate::backend::users::{delete_user, list_users, update_user};

/// Register all API routes on the given router
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/projects", get(list_projects))
        .route("/codes", get(list_codes).post(create_code))
        .route("/signup", post(signup))
        .route("/login", post(login));

    let admin_routes = Router::new()
        .route("/projects", post(create_project))
        .route(
            "/projects/{id}",
            put(update_project).delete(delete_project),
        )
        .route("/codes/{id}", put(update_code).delete(delete_code))
        .route("/users", get(list_users))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/api/admin/stats", get(admin_stats))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            admin_middleware,
        ));

    router.merge(public_routes).merge(admin_routes)
}
