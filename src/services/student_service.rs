// src/services/student_service.rs
use crate::{
    api_client::{ApiClient, ApiError},
    models::student::{Student, StudentDraft},
    session_store::CredentialStore,
};
use reqwest::Method;
use serde_json::Value;

/// Lista de alunos, opcionalmente filtrada. Pesquisa vazia omite o parâmetro
/// por completo (não envia `search=`); pesquisa não vazia é percent-encoded.
pub async fn list<S: CredentialStore>(
    api: &ApiClient,
    creds: &S,
    query: &str,
) -> Result<Vec<Student>, ApiError> {
    let path = if query.is_empty() {
        "/students/".to_string()
    } else {
        format!("/students/?search={}", urlencoding::encode(query))
    };
    let value = api.request(Method::GET, &path, None, true, creds).await?;
    Ok(coerce_list(value))
}

// Decodificação defensiva: o contrato é um array, mas um payload malformado
// nunca pode derrubar a view — qualquer outra forma vira lista vazia.
fn coerce_list(value: Value) -> Vec<Student> {
    match value {
        // elemento a elemento: uma entrada ilegível é descartada sem
        // arrastar o resto da lista
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

pub async fn get<S: CredentialStore>(
    api: &ApiClient,
    creds: &S,
    id: &str,
) -> Result<Student, ApiError> {
    let path = format!("/students/{}/", id);
    let value = api.request(Method::GET, &path, None, true, creds).await?;
    // Campos em falta hidratam para string vazia via defaults do serde
    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Aluno {} com forma inesperada: {}", id, e);
        ApiError {
            message: "Resposta inesperada do servidor".to_string(),
        }
    })
}

pub async fn create<S: CredentialStore>(
    api: &ApiClient,
    creds: &S,
    draft: &StudentDraft,
) -> Result<Value, ApiError> {
    let body = serde_json::to_value(draft).unwrap_or(Value::Null);
    api.request(Method::POST, "/students/", Some(&body), true, creds)
        .await
}

/// Atualização por substituição integral (PUT) — o último a escrever ganha.
pub async fn update<S: CredentialStore>(
    api: &ApiClient,
    creds: &S,
    id: &str,
    draft: &StudentDraft,
) -> Result<Value, ApiError> {
    let body = serde_json::to_value(draft).unwrap_or(Value::Null);
    let path = format!("/students/{}/", id);
    api.request(Method::PUT, &path, Some(&body), true, creds)
        .await
}

/// Apaga um aluno. O backend pode responder com corpo vazio, por isso o ack
/// é sintetizado a partir do status, sem parsear o corpo.
pub async fn delete<S: CredentialStore>(
    api: &ApiClient,
    creds: &S,
    id: &str,
) -> Result<(), ApiError> {
    let path = format!("/students/{}/", id);
    api.request_ack(Method::DELETE, &path, None, true, creds)
        .await?;
    Ok(())
}
