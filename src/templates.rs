// src/templates.rs
use crate::models::student::{FieldErrors, Student, StudentDraft};
use askama::Template;

// Struct para o template `login.html` (ficheiro em templates/)
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    // Mensagem de erro opcional (credenciais erradas, backend em baixo, ...)
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub username: String,
    pub search: String,
    pub students: Vec<Student>,
    // Banner de erro: fetch falhado (lista vazia) ou delete falhado
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "student_form.html")]
pub struct StudentFormPage {
    pub username: String,
    pub is_edit: bool,
    pub student_id: String,
    pub draft: StudentDraft,
    pub errors: FieldErrors,
    // Banner de topo: sucesso ou erro sem campo correspondente
    pub message: Option<String>,
    // Com sucesso o template agenda a volta ao dashboard (meta refresh de 1s)
    pub success: bool,
}
