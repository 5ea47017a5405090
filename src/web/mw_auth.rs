// src/web/mw_auth.rs
use crate::session_store;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

// Decisão de acesso para uma navegação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Função pura de controlo de acesso: a rota de login é sempre permitida;
/// qualquer outra exige um access token presente e não vazio. Não há
/// validação de expiração/assinatura do lado do cliente.
pub fn can_enter(path: &str, access_token: Option<&str>) -> GuardDecision {
    if path == LOGIN_ROUTE {
        return GuardDecision::Allow;
    }
    match access_token {
        Some(token) if !token.is_empty() => GuardDecision::Allow,
        _ => GuardDecision::RedirectToLogin,
    }
}

// Identidade posta nas extensões da requisição para os handlers protegidos.
// O username fica vazio se o perfil guardado estiver ausente ou ilegível.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub username: String,
}

/// Middleware que aplica o guard ANTES de qualquer handler correr — uma
/// navegação rejeitada nunca chega a disparar chamadas ao backend.
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, crate::error::AppError> {
    let token = session_store::get_access_token(&session).await;

    match can_enter(request.uri().path(), token.as_deref()) {
        GuardDecision::Allow => {
            let username = session_store::get_user_profile(&session)
                .await
                .map(|p| p.username)
                .unwrap_or_default();
            tracing::debug!(
                "Autenticação MW: acesso permitido a {} para '{}'",
                request.uri().path(),
                username
            );
            request.extensions_mut().insert(CurrentUser { username });
            Ok(next.run(request).await)
        }
        GuardDecision::RedirectToLogin => {
            tracing::debug!(
                "Autenticação MW: não autenticado em {}. Redirecionando para {}",
                request.uri().path(),
                LOGIN_ROUTE
            );
            Ok(Redirect::to(LOGIN_ROUTE).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rota_protegida_sem_token_redireciona() {
        assert_eq!(can_enter("/dashboard", None), GuardDecision::RedirectToLogin);
        assert_eq!(
            can_enter("/student/new", None),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn token_vazio_tambem_redireciona() {
        assert_eq!(
            can_enter("/dashboard", Some("")),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn rota_protegida_com_token_permite() {
        assert_eq!(can_enter("/dashboard", Some("tok-123")), GuardDecision::Allow);
        assert_eq!(
            can_enter("/student/7/delete", Some("tok-123")),
            GuardDecision::Allow
        );
    }

    #[test]
    fn login_permite_sempre() {
        assert_eq!(can_enter("/login", None), GuardDecision::Allow);
        assert_eq!(can_enter("/login", Some("")), GuardDecision::Allow);
        assert_eq!(can_enter("/login", Some("tok")), GuardDecision::Allow);
    }
}
