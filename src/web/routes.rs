// src/web/routes.rs
use crate::{
    state::AppState,
    web::{auth_handlers, mw_auth, student_handlers},
};
use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route(
            "/login",
            get(auth_handlers::show_login_form).post(auth_handlers::handle_login),
        )
        .route("/logout", get(auth_handlers::handle_logout))
        // A landing por omissão é a lista; o guard manda os anónimos para /login
        .route("/", get(|| async { Redirect::permanent("/dashboard") }));

    // --- Rotas Protegidas ---
    // O guard corre antes de qualquer handler: navegação rejeitada nunca
    // dispara fetch de dados
    let protected_routes = Router::new()
        .route("/dashboard", get(student_handlers::dashboard_handler))
        .route(
            "/student/{id}",
            get(student_handlers::show_student_form).post(student_handlers::handle_student_form),
        )
        .route(
            "/student/{id}/delete",
            post(student_handlers::handle_delete_student),
        )
        .route_layer(middleware::from_fn(mw_auth::require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
}
