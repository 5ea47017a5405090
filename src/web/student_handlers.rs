// src/web/student_handlers.rs
//
// Os dois controladores de vista do painel: a lista (dashboard) e o
// formulário de criar/editar. Cada navegação é um pedido completo, por isso
// o "estado da vista" é montado aqui e entregue ao template.
use crate::{
    error::{AppError, AppResult},
    models::student::{self, FieldErrors, StudentDraft},
    services::student_service,
    state::AppState,
    templates::{DashboardPage, StudentFormPage},
    web::mw_auth::{CurrentUser, DASHBOARD_ROUTE},
};
use askama::Template;
use axum::{
    extract::{Extension, Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

// Sentinela do modo de criação: /student/new
const NEW_STUDENT_ID: &str = "new";

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub search: String,
    // Mensagem de erro vinda de um delete falhado (ver handle_delete_student)
    pub erro: Option<String>,
}

// GET /dashboard — lista filtrada de alunos
pub async fn dashboard_handler(
    State(state): State<AppState>,
    session: Session,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<DashboardQuery>,
) -> AppResult<Response> {
    let (students, error) = match student_service::list(&state.api, &session, &params.search).await
    {
        // A lista chegou; o banner só existe se um delete anterior falhou
        Ok(lista) => (lista, params.erro),
        Err(e) => {
            // Com erro de fetch a lista fica VAZIA — nunca dados velhos ao
            // lado de um banner de erro
            tracing::warn!("Falha ao listar alunos: {}", e.message);
            (Vec::new(), Some(e.message))
        }
    };

    let template = DashboardPage {
        username: current_user.username,
        search: params.search,
        students,
        error,
    };
    Ok(render(template))
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    // Preserva o filtro ativo ao voltar para a lista
    #[serde(default)]
    pub search: String,
}

// POST /student/{id}/delete — já confirmado pelo utilizador no browser.
// O id é opaco e segue tal e qual para o backend, como nas outras rotas.
pub async fn handle_delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Redirect> {
    match student_service::delete(&state.api, &session, &id).await {
        Ok(()) => {
            // Sem remoção otimista: o redirect re-executa o fetch e a lista
            // volta a refletir a verdade do servidor
            tracing::info!("🗑️ Aluno {} apagado.", id);
            Ok(Redirect::to(&dashboard_url(&form.search, None)))
        }
        Err(e) => {
            tracing::warn!("Falha ao apagar aluno {}: {}", id, e.message);
            Ok(Redirect::to(&dashboard_url(&form.search, Some(&e.message))))
        }
    }
}

fn dashboard_url(search: &str, erro: Option<&str>) -> String {
    let mut url = format!("{}?search={}", DASHBOARD_ROUTE, urlencoding::encode(search));
    if let Some(mensagem) = erro {
        url.push_str("&erro=");
        url.push_str(&urlencoding::encode(mensagem));
    }
    url
}

// GET /student/{id} — "new" abre o formulário vazio; qualquer outro id é
// passado ao backend tal e qual para hidratar o rascunho
pub async fn show_student_form(
    State(state): State<AppState>,
    session: Session,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if id == NEW_STUDENT_ID {
        let template = StudentFormPage {
            username: current_user.username,
            is_edit: false,
            student_id: id,
            draft: StudentDraft::default(),
            errors: FieldErrors::default(),
            message: None,
            success: false,
        };
        return Ok(render(template));
    }

    let (draft, message) = match student_service::get(&state.api, &session, &id).await {
        Ok(aluno) => (StudentDraft::from(aluno), None),
        Err(e) => {
            tracing::warn!("Falha ao carregar aluno {}: {}", id, e.message);
            (StudentDraft::default(), Some(e.message))
        }
    };

    let template = StudentFormPage {
        username: current_user.username,
        is_edit: true,
        student_id: id,
        draft,
        errors: FieldErrors::default(),
        message,
        success: false,
    };
    Ok(render(template))
}

// POST /student/{id} — valida localmente e só depois fala com o backend
pub async fn handle_student_form(
    State(state): State<AppState>,
    session: Session,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Form(draft): Form<StudentDraft>,
) -> AppResult<Response> {
    let is_edit = id != NEW_STUDENT_ID;

    // Validação local primeiro: com erros não há NENHUMA chamada à rede
    // nem mensagem de topo — só os erros por campo
    let errors = student::validate(&draft);
    if !errors.is_empty() {
        let template = StudentFormPage {
            username: current_user.username,
            is_edit,
            student_id: id,
            draft,
            errors,
            message: None,
            success: false,
        };
        return Ok(render(template));
    }

    let result = if is_edit {
        student_service::update(&state.api, &session, &id, &draft).await
    } else {
        student_service::create(&state.api, &session, &draft).await
    };

    match result {
        Ok(_) => {
            let message = if is_edit {
                "Aluno atualizado com sucesso!"
            } else {
                "Aluno adicionado com sucesso!"
            };
            tracing::info!("💾 {} (id: {})", message, id);
            // success=true agenda no template a volta ao dashboard após 1s,
            // tempo para o utilizador ler a confirmação
            let template = StudentFormPage {
                username: current_user.username,
                is_edit,
                student_id: id,
                draft,
                errors: FieldErrors::default(),
                message: Some(message.to_string()),
                success: true,
            };
            Ok(render(template))
        }
        Err(e) => {
            // Encaminha a mensagem do backend para o campo certo; sem
            // correspondência vira banner de topo
            let mut errors = FieldErrors::default();
            let banner = student::apply_backend_error(&e.message, &mut errors);
            tracing::warn!("Falha ao gravar aluno (id: {}): {}", id, e.message);
            let template = StudentFormPage {
                username: current_user.username,
                is_edit,
                student_id: id,
                draft,
                errors,
                message: banner,
                success: false,
            };
            Ok(render(template))
        }
    }
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Falha ao renderizar template: {}", e);
            AppError::InternalServerError.into_response()
        }
    }
}
