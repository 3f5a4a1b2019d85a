/**
 * API Route Table
 *
 * This module wires every API endpoint to its handler:
 *
 * ## Authentication
 * - `POST /verify-token` - Decode the session cookie
 * - `POST /register` - Account registration
 * - `POST /login` - Account login
 * - `POST /logout` - Clear the session cookie
 *
 * ## Posts
 * - `POST /post` - Create a post (requires a session)
 * - `GET /post` - List posts (title filter + pagination)
 * - `GET /numPost` - Count posts matching the filter
 * - `GET /post/{id}` - Fetch one post
 * - `PUT /post/{id}` - Replace a post (requires a session)
 * - `DELETE /delete/{id}` - Delete a post (requires the author's session)
 *
 * Protected handlers enforce the session themselves through the
 * `AuthUser` extractor, so no route-level auth layer is applied here.
 */

use axum::Router;

use crate::auth::handlers::{login, logout, register, verify_session};
use crate::posts::handlers::{
    count_posts, create_post, delete_post, get_post, list_posts, update_post,
};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with all API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/verify-token", axum::routing::post(verify_session))
        .route("/register", axum::routing::post(register))
        .route("/login", axum::routing::post(login))
        .route("/logout", axum::routing::post(logout))
        // Post endpoints
        .route(
            "/post",
            axum::routing::post(create_post).get(list_posts),
        )
        .route("/numPost", axum::routing::get(count_posts))
        .route(
            "/post/{id}",
            axum::routing::get(get_post).put(update_post),
        )
        .route("/delete/{id}", axum::routing::delete(delete_post))
}
