// src/state.rs
use crate::api_client::ApiClient;

// Estado partilhado da aplicação. O backend remoto faz aqui o papel que uma
// base de dados local faria: todas as leituras/escritas de alunos passam
// pelo ApiClient.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}

// Permite extrair o cliente de API diretamente nos handlers
impl axum::extract::FromRef<AppState> for ApiClient {
    fn from_ref(state: &AppState) -> ApiClient {
        state.api.clone()
    }
}
