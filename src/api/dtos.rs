// Wire DTOs. Field names on the wire stay in Portuguese (the published
// contract); Rust-side names are English, mapped with explicit serde renames.
use serde::{Deserialize, Serialize};

use crate::api::format::format_datetime;
use crate::database::models::{Company, Employee, Entry};

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of POST /auth. Everything optional so validation can accumulate
/// messages instead of failing at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
}

/// Body of POST /api/cadastrar-pf: a person joining an existing company.
#[derive(Debug, Clone, Deserialize)]
pub struct PfRegistrationPayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    #[serde(rename = "valorHora")]
    pub hourly_rate: Option<String>,
    #[serde(rename = "qtdHorasTrabalhoDia")]
    pub daily_work_hours: Option<String>,
    #[serde(rename = "qtdHorasAlmoco")]
    pub lunch_hours: Option<String>,
}

/// Body of POST /api/cadastrar-pj: a new company plus its admin employee.
#[derive(Debug, Clone, Deserialize)]
pub struct PjRegistrationPayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "razaoSocial")]
    pub corporate_name: Option<String>,
    pub cnpj: Option<String>,
}

/// Body of PUT /api/funcionarios/{id}. Password absent means "keep current".
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeUpdatePayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    #[serde(rename = "valorHora")]
    pub hourly_rate: Option<String>,
    #[serde(rename = "qtdHorasTrabalhoDia")]
    pub daily_work_hours: Option<String>,
    #[serde(rename = "qtdHorasAlmoco")]
    pub lunch_hours: Option<String>,
}

/// Body of POST/PUT /api/lancamentos. The id comes from the path on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPayload {
    pub id: Option<i64>,
    #[serde(rename = "data")]
    pub date: Option<String>,
    #[serde(rename = "tipo")]
    pub entry_type: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "localizacao")]
    pub location: Option<String>,
    #[serde(rename = "funcionarioId")]
    pub employee_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct TokenDto {
    pub token: String,
}

/// Employee as returned by registration and profile updates. The password is
/// never echoed; optional numerics go out as strings, null when unset.
#[derive(Debug, Serialize)]
pub struct EmployeeDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub cpf: String,
    #[serde(rename = "valorHora")]
    pub hourly_rate: Option<String>,
    #[serde(rename = "qtdHorasTrabalhoDia")]
    pub daily_work_hours: Option<String>,
    #[serde(rename = "qtdHorasAlmoco")]
    pub lunch_hours: Option<String>,
    pub cnpj: String,
}

impl EmployeeDto {
    pub fn from_employee(employee: &Employee, cnpj: &str) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            cpf: employee.cpf.clone(),
            hourly_rate: employee.hourly_rate.map(|v| v.to_string()),
            daily_work_hours: employee.daily_work_hours.map(|v| v.to_string()),
            lunch_hours: employee.lunch_hours.map(|v| v.to_string()),
            cnpj: cnpj.to_string(),
        }
    }
}

/// Employee as returned by profile updates; no document numbers here.
#[derive(Debug, Serialize)]
pub struct EmployeeProfileDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "valorHora")]
    pub hourly_rate: Option<String>,
    #[serde(rename = "qtdHorasTrabalhoDia")]
    pub daily_work_hours: Option<String>,
    #[serde(rename = "qtdHorasAlmoco")]
    pub lunch_hours: Option<String>,
}

impl From<&Employee> for EmployeeProfileDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            hourly_rate: employee.hourly_rate.map(|v| v.to_string()),
            daily_work_hours: employee.daily_work_hours.map(|v| v.to_string()),
            lunch_hours: employee.lunch_hours.map(|v| v.to_string()),
        }
    }
}

/// Result of PJ registration: the new company and its admin in one object.
#[derive(Debug, Serialize)]
pub struct CompanyRegistrationDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub cpf: String,
    #[serde(rename = "razaoSocial")]
    pub corporate_name: String,
    pub cnpj: String,
}

impl CompanyRegistrationDto {
    pub fn from_parts(employee: &Employee, company: &Company) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            cpf: employee.cpf.clone(),
            corporate_name: company.corporate_name.clone(),
            cnpj: company.cnpj.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyDto {
    pub id: i64,
    #[serde(rename = "razaoSocial")]
    pub corporate_name: String,
    pub cnpj: String,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            corporate_name: company.corporate_name,
            cnpj: company.cnpj,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryDto {
    pub id: i64,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "tipo")]
    pub entry_type: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "localizacao")]
    pub location: Option<String>,
    #[serde(rename = "funcionarioId")]
    pub employee_id: i64,
}

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            date: format_datetime(&entry.occurred_at),
            entry_type: entry.entry_type.as_str().to_string(),
            description: entry.description.clone(),
            location: entry.location.clone(),
            employee_id: entry.employee_id,
        }
    }
}
