// tests/common/mod.rs
//
// Infraestrutura partilhada: sobe um backend REST falso (axum em porta
// efémera) e a própria aplicação, ambos in-process.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use painel_alunos::{
    api_client::ApiClient,
    error::AppResult,
    session_store::{self, CredentialStore},
    state::AppState,
    web::routes::create_router,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use time::Duration;
use tokio::net::TcpListener;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind em porta efémera");
    let addr = listener.local_addr().expect("local_addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("servir");
    });
    addr
}

/// Sobe o backend falso e devolve o URL base já com o prefixo /api.
pub async fn spawn_backend(app: Router) -> String {
    let addr = spawn_server(app).await;
    format!("http://{}/api", addr)
}

/// Sobe a aplicação real (router + sessões em SQLite em memória) apontada
/// ao backend falso. Devolve o URL base da aplicação.
pub async fn spawn_app(api_base_url: String) -> String {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool sqlite em memória");

    let store = SqliteStore::new(pool);
    store.migrate().await.expect("migrar tabela de sessões");

    let session_layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));

    let app_state = AppState {
        api: ApiClient::new(api_base_url),
    };
    let app = create_router(app_state).layer(session_layer);

    let addr = spawn_server(app).await;
    format!("http://{}", addr)
}

/// Dublê de credenciais com um access token fixo.
pub struct FixedToken(pub String);

#[async_trait]
impl CredentialStore for FixedToken {
    async fn get_value(&self, key: &str) -> Option<Value> {
        match key {
            session_store::ACCESS_TOKEN_KEY => Some(Value::String(self.0.clone())),
            session_store::REFRESH_TOKEN_KEY => {
                Some(Value::String(format!("{}-refresh", self.0)))
            }
            _ => None,
        }
    }

    async fn set_value(&self, _key: &str, _value: Value) -> AppResult<()> {
        Ok(())
    }

    async fn clear_all(&self) -> AppResult<()> {
        Ok(())
    }
}
