// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::auth::LoginForm,
    services::auth_service,
    session_store,
    state::AppState,
    templates::LoginPage,
    web::mw_auth::{DASHBOARD_ROUTE, LOGIN_ROUTE},
};
use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

// GET /login — quem já está autenticado não volta a ver o formulário
pub async fn show_login_form(session: Session) -> impl IntoResponse {
    if session_store::is_authenticated(&session).await {
        tracing::debug!("GET /login: já autenticado, redirecionando para o dashboard");
        return Redirect::to(DASHBOARD_ROUTE).into_response();
    }

    render_login(LoginPage { error: None })
}

// POST /login — delega a autenticação ao backend remoto
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("Tentativa de login para: {}", form.username);

    match auth_service::login(&state.api, &form.username, &form.password).await {
        Ok(resposta) => {
            // Novo ID de sessão antes de guardar credenciais (anti session-fixation)
            session
                .cycle_id()
                .await
                .map_err(|e| AppError::SessionError(format!("Falha ao rodar ID: {}", e)))?;

            // Tokens + perfil gravados como uma unidade
            session_store::save_session(
                &session,
                &resposta.access_token,
                &resposta.refresh_token,
                &resposta.user,
            )
            .await?;

            tracing::info!("✅ Login bem-sucedido para: {}", form.username);
            Ok(Redirect::to(DASHBOARD_ROUTE).into_response())
        }
        Err(e) => {
            // Credenciais erradas e backend em baixo chegam aqui pela mesma
            // via: uma mensagem para mostrar no formulário
            tracing::warn!("Login falhou para {}: {}", form.username, e.message);
            Ok(render_login(LoginPage {
                error: Some(e.message),
            }))
        }
    }
}

// GET /logout — avisa o backend (melhor esforço) e apaga a sessão local
pub async fn handle_logout(State(state): State<AppState>, session: Session) -> AppResult<Redirect> {
    if session_store::is_authenticated(&session).await {
        if let Err(e) = auth_service::logout(&state.api, &session).await {
            // O logout local nunca fica refém do backend
            tracing::warn!("Logout remoto falhou (ignorado): {}", e.message);
        }
    }

    session_store::clear_session(&session).await?;
    tracing::info!("🚪 Sessão encerrada.");

    Ok(Redirect::to(LOGIN_ROUTE))
}

fn render_login(template: LoginPage) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Falha ao renderizar template de login: {}", e);
            AppError::InternalServerError.into_response()
        }
    }
}
