// src/models/student.rs
use serde::{Deserialize, Serialize};

// Aluno tal como o backend o devolve. Todos os campos têm default para que
// um payload incompleto hidrate para strings vazias em vez de falhar a
// desserialização (o formulário de edição nunca pode ficar com campos "buracos").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub created_date: Option<String>,
}

impl Student {
    /// Data de criação formatada para a tabela do dashboard.
    /// O backend envia ISO-8601; qualquer outra coisa é mostrada tal e qual.
    pub fn created_date_fmt(&self) -> String {
        match &self.created_date {
            Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|_| raw.clone()),
            None => "—".to_string(),
        }
    }
}

// Rascunho do formulário: cópia mutável e transitória de um aluno (ou do
// modelo vazio). Vive apenas durante um pedido; nunca é persistido.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub course: String,
}

impl From<Student> for StudentDraft {
    fn from(s: Student) -> Self {
        StudentDraft {
            full_name: s.full_name,
            roll_number: s.roll_number,
            email: s.email,
            phone_number: s.phone_number,
            course: s.course,
        }
    }
}

// Mapa de erros por campo, emparelhado com o rascunho na renderização
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub full_name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub course: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.roll_number.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.course.is_none()
    }
}

/// Validação local do rascunho. Corre antes de qualquer chamada à rede e
/// recolhe TODOS os erros numa só passagem (não pára no primeiro).
pub fn validate(draft: &StudentDraft) -> FieldErrors {
    let mut erros = FieldErrors::default();

    if draft.full_name.trim().is_empty() {
        erros.full_name = Some("O nome completo é obrigatório.".to_string());
    }

    if draft.roll_number.trim().is_empty() {
        erros.roll_number = Some("O número de matrícula é obrigatório.".to_string());
    }

    if draft.email.trim().is_empty() {
        erros.email = Some("O email é obrigatório.".to_string());
    } else if !email_valido(&draft.email) {
        erros.email = Some("Formato de email inválido.".to_string());
    }

    if draft.phone_number.trim().is_empty() {
        erros.phone_number = Some("O telefone é obrigatório.".to_string());
    } else if draft.phone_number.chars().count() < 10 {
        // Contagem literal de caracteres, separadores incluídos
        erros.phone_number = Some("O telefone deve ter pelo menos 10 caracteres.".to_string());
    }

    if draft.course.trim().is_empty() {
        erros.course = Some("O curso é obrigatório.".to_string());
    }

    erros
}

// Forma "localpart@domain.tld": sem espaços, exatamente um '@' e um ponto
// dentro do domínio com pelo menos um caráter de cada lado.
fn email_valido(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    if email.chars().filter(|c| *c == '@').count() != 1 {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(partes) => partes,
        None => return false,
    };
    if local.is_empty() {
        return false;
    }
    // o ponto não pode ser o primeiro nem o último caráter do domínio;
    // a contagem é por caráter (o domínio pode ter letras multi-byte)
    let dominio: Vec<char> = domain.chars().collect();
    dominio.len() >= 3 && dominio[1..dominio.len() - 1].contains(&'.')
}

/// Encaminha uma mensagem de erro do backend para o campo correspondente,
/// pela ordem de prioridade: matrícula, email, telefone. Devolve a mensagem
/// de volta quando nenhum campo corresponde (vira banner no topo da página).
///
/// O backend não envia erros estruturados por campo, por isso o contrato é
/// textual e tem de ser preservado tal e qual.
pub fn apply_backend_error(message: &str, erros: &mut FieldErrors) -> Option<String> {
    if message.contains("roll number") {
        erros.roll_number = Some(message.to_string());
        None
    } else if message.contains("email") {
        erros.email = Some(message.to_string());
        None
    } else if message.contains("phone") {
        erros.phone_number = Some(message.to_string());
        None
    } else {
        Some(message.to_string())
    }
}
