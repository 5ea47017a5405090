// src/api_client.rs
use crate::session_store::{self, CredentialStore};
use reqwest::{header, Method, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

// Mensagens genéricas da política de extração de erros:
// corpo ilegível -> FALLBACK_PARSE; corpo sem campo 'error'/'message' -> FALLBACK_GENERIC.
const FALLBACK_PARSE: &str = "Ocorreu um erro";
const FALLBACK_GENERIC: &str = "Falha na requisição";

/// Erro único da fronteira com o backend. Falhas de transporte e respostas
/// de erro HTTP colapsam ambas para aqui: quem chama só vê uma mensagem.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        ApiError { message: message.into() }
    }
}

/// Cliente HTTP para o backend REST remoto (caminho base `/api`).
/// Nunca tenta de novo; não impõe timeout próprio (fica o default do reqwest).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string());
        tracing::info!("🌐 Backend remoto configurado em {}", base_url);
        Self::new(base_url)
    }

    /// Convenção única de entrada: monta o pedido, anexa a credencial bearer
    /// (se `auth` e houver token guardado) e decodifica sucesso/erro de forma
    /// uniforme. O status de erro nunca vira panic — vira `ApiError`.
    pub async fn request<S: CredentialStore>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        auth: bool,
        creds: &S,
    ) -> Result<Value, ApiError> {
        let response = self.send(method, path, body, auth, creds).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Value>()
            .await
            .map_err(|_| ApiError::new(FALLBACK_PARSE))
    }

    /// Variante para endpoints cujo sucesso pode vir com corpo vazio (DELETE):
    /// com status de sucesso o ack é sintetizado localmente, sem tocar no corpo.
    pub async fn request_ack<S: CredentialStore>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        auth: bool,
        creds: &S,
    ) -> Result<Value, ApiError> {
        let response = self.send(method, path, body, auth, creds).await?;
        if response.status().is_success() {
            return Ok(json!({ "message": "ok" }));
        }
        Err(error_from_response(response).await)
    }

    async fn send<S: CredentialStore>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        auth: bool,
        creds: &S,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");

        if auth {
            // Token ausente => pedido segue sem header; é o backend que rejeita
            if let Some(token) = session_store::get_access_token(creds).await {
                if !token.is_empty() {
                    request = request.bearer_auth(token);
                }
            }
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        // Falha de transporte (rede inacessível, DNS, ...) colapsa na mesma
        // forma de erro que uma resposta HTTP de falha
        request.send().await.map_err(|e| {
            tracing::warn!("Falha de transporte para {}: {}", url, e);
            ApiError::new(e.to_string())
        })
    }
}

// Política de extração da mensagem de erro: corpo JSON com campo textual
// 'error', senão 'message', senão o fallback genérico; corpo que nem parseia
// usa o fallback de parsing.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status: StatusCode = response.status();
    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .unwrap_or(FALLBACK_GENERIC)
            .to_string(),
        Err(_) => FALLBACK_PARSE.to_string(),
    };
    tracing::debug!("Backend respondeu {}: {}", status, message);
    ApiError::new(message)
}
