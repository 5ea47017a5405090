// src/session_store.rs
use crate::{
    error::{AppError, AppResult},
    models::auth::UserProfile,
};
use async_trait::async_trait;
use serde_json::Value;
use tower_sessions::Session;

// Chaves usadas dentro do registo de sessão. São as mesmas três entradas
// que o frontend original guardava no localStorage.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Interface injetável sobre o armazenamento de credenciais.
///
/// Os controladores e o cliente de API dependem desta abstração em vez de
/// acederem diretamente à sessão, o que permite usar dublês em testes.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Lê um valor guardado. Dados em falta OU ilegíveis contam como ausentes.
    async fn get_value(&self, key: &str) -> Option<Value>;

    /// Escreve (ou substitui) um valor.
    async fn set_value(&self, key: &str, value: Value) -> AppResult<()>;

    /// Apaga tudo. Deve ser inofensivo quando não existe sessão.
    async fn clear_all(&self) -> AppResult<()>;
}

#[async_trait]
impl CredentialStore for Session {
    async fn get_value(&self, key: &str) -> Option<Value> {
        // Erro de leitura da sessão degrada para "ausente" em vez de falhar
        self.get::<Value>(key).await.ok().flatten()
    }

    async fn set_value(&self, key: &str, value: Value) -> AppResult<()> {
        self.insert(key, value)
            .await
            .map_err(|e| AppError::SessionError(format!("Falha ao escrever '{}': {}", key, e)))
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.flush()
            .await
            .map_err(|e| AppError::SessionError(format!("Falha ao apagar sessão: {}", e)))
    }
}

/// Implementação nula, usada pelas chamadas não autenticadas (ex: login).
pub struct NoCredentials;

#[async_trait]
impl CredentialStore for NoCredentials {
    async fn get_value(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn set_value(&self, _key: &str, _value: Value) -> AppResult<()> {
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Guarda os tokens e o perfil do utilizador como uma unidade.
/// Substitui qualquer sessão anterior.
pub async fn save_session<S: CredentialStore>(
    store: &S,
    access_token: &str,
    refresh_token: &str,
    user: &Value,
) -> AppResult<()> {
    store
        .set_value(ACCESS_TOKEN_KEY, Value::String(access_token.to_string()))
        .await?;
    store
        .set_value(REFRESH_TOKEN_KEY, Value::String(refresh_token.to_string()))
        .await?;
    store.set_value(USER_KEY, user.clone()).await?;
    Ok(())
}

pub async fn get_access_token<S: CredentialStore>(store: &S) -> Option<String> {
    store
        .get_value(ACCESS_TOKEN_KEY)
        .await
        .and_then(|v| v.as_str().map(str::to_string))
}

pub async fn get_refresh_token<S: CredentialStore>(store: &S) -> Option<String> {
    store
        .get_value(REFRESH_TOKEN_KEY)
        .await
        .and_then(|v| v.as_str().map(str::to_string))
}

/// Perfil do utilizador logado. Um valor guardado que não parseia como
/// perfil conta como ausente, nunca como erro.
pub async fn get_user_profile<S: CredentialStore>(store: &S) -> Option<UserProfile> {
    let value = store.get_value(USER_KEY).await?;
    serde_json::from_value(value).ok()
}

/// Único predicado de autenticação do cliente: token presente e não vazio.
/// Não há verificação de expiração nem de assinatura do lado do cliente.
pub async fn is_authenticated<S: CredentialStore>(store: &S) -> bool {
    matches!(get_access_token(store).await, Some(t) if !t.is_empty())
}

pub async fn clear_session<S: CredentialStore>(store: &S) -> AppResult<()> {
    store.clear_all().await
}
