// src/services/auth_service.rs
use crate::{
    api_client::{ApiClient, ApiError},
    models::auth::LoginResponse,
    session_store::{self, CredentialStore, NoCredentials},
};
use reqwest::Method;
use serde_json::json;

/// Autentica junto do backend. Chamada sem credenciais — é ela que as cria.
pub async fn login(
    api: &ApiClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let body = json!({ "username": username, "password": password });
    let value = api
        .request(Method::POST, "/auth/login/", Some(&body), false, &NoCredentials)
        .await?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Resposta de login com forma inesperada: {}", e);
        ApiError {
            message: "Resposta inesperada do servidor".to_string(),
        }
    })
}

/// Informa o backend do logout (melhor esforço; a sessão local é apagada
/// pelo handler independentemente do resultado).
pub async fn logout<S: CredentialStore>(api: &ApiClient, creds: &S) -> Result<(), ApiError> {
    let refresh_token = session_store::get_refresh_token(creds).await.unwrap_or_default();
    let body = json!({ "refresh_token": refresh_token });
    api.request(Method::POST, "/auth/logout/", Some(&body), true, creds)
        .await?;
    Ok(())
}
