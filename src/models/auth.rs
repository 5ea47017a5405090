// src/models/auth.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Dados do formulário de login
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// Resposta do POST /auth/login/ do backend. O campo informativo `message`
// ("Login successful") não interessa ao cliente e é ignorado.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    // Perfil opaco fornecido pelo backend; guardado tal como veio
    #[serde(default)]
    pub user: Value,
}

// Perfil do utilizador guardado na sessão. O backend envia {id, username},
// mas o cliente só depende do username; o resto passa intacto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
