use chrono::NaiveDateTime;
use tracing::info;

use crate::api::dtos::EntryPayload;
use crate::api::format;
use crate::api::response::Page;
use crate::database::models::{Entry, EntryType, NewEntry};
use crate::database::repositories::{
    EmployeeRepository, EntryRepository, EntrySort, SortDirection, SortField,
};
use crate::error::ApiError;

/// Clock-entry rules: accumulate every violation, persist only when the
/// error list stayed empty.
#[derive(Clone)]
pub struct EntryService {
    entries: EntryRepository,
    employees: EmployeeRepository,
    page_size: i64,
}

impl EntryService {
    pub fn new(entries: EntryRepository, employees: EmployeeRepository, page_size: i64) -> Self {
        Self { entries, employees, page_size }
    }

    /// Validate and store a new entry.
    pub async fn create(&self, payload: EntryPayload) -> Result<Entry, ApiError> {
        let mut errors = Vec::new();

        self.validate_employee(payload.employee_id, &mut errors).await?;
        let occurred_at = parse_occurred_at(payload.date.as_deref(), &mut errors);
        let entry_type = parse_entry_type(payload.entry_type.as_deref(), &mut errors);

        // any None below implies a collected error, so the catch-all arm is
        // always the validation failure path
        match (errors.is_empty(), occurred_at, entry_type, payload.employee_id) {
            (true, Some(occurred_at), Some(entry_type), Some(employee_id)) => {
                let entry = self
                    .entries
                    .insert(&NewEntry {
                        occurred_at,
                        entry_type,
                        description: payload.description,
                        location: payload.location,
                        employee_id,
                    })
                    .await?;
                info!("Created entry {} for employee {}", entry.id, entry.employee_id);
                Ok(entry)
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }

    /// Validate and rewrite an existing entry. The employee owning the entry
    /// never changes here; the payload's employee is only re-validated.
    pub async fn update(&self, id: i64, payload: EntryPayload) -> Result<Entry, ApiError> {
        let mut errors = Vec::new();

        self.validate_employee(payload.employee_id, &mut errors).await?;

        let existing = self.entries.find_by_id(id).await?;
        if existing.is_none() {
            errors.push("Lancamento nao encontrado".to_string());
        }

        let occurred_at = parse_occurred_at(payload.date.as_deref(), &mut errors);
        let entry_type = parse_entry_type(payload.entry_type.as_deref(), &mut errors);

        match (errors.is_empty(), existing, occurred_at, entry_type) {
            (true, Some(mut entry), Some(occurred_at), Some(entry_type)) => {
                entry.occurred_at = occurred_at;
                entry.entry_type = entry_type;
                entry.description = payload.description;
                entry.location = payload.location;
                let updated = self.entries.update(&entry).await?;
                info!("Updated entry {}", updated.id);
                Ok(updated)
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Entry, ApiError> {
        self.entries
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::bad_request(format!("Lancamento nao encontrado para o id {}", id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let removed = self.entries.delete_by_id(id).await?;
        if removed == 0 {
            return Err(ApiError::bad_request(format!(
                "Erro ao remover lancamento. Registro nao encontrado para id {}",
                id
            )));
        }
        info!("Removed entry {}", id);
        Ok(())
    }

    /// One page of an employee's entries. Page is zero-based; ordering
    /// defaults to id descending. Unknown sort inputs are rejected before
    /// any query runs.
    pub async fn list_by_employee(
        &self,
        employee_id: i64,
        page: i64,
        ord: Option<&str>,
        dir: Option<&str>,
    ) -> Result<Page<Entry>, ApiError> {
        if page < 0 {
            return Err(ApiError::bad_request("Pagina invalida"));
        }
        let sort = parse_sort(ord, dir)?;

        let rows = self
            .entries
            .find_page_by_employee_id(employee_id, page, self.page_size, sort)
            .await?;
        let total = self.entries.count_by_employee_id(employee_id).await?;

        Ok(Page::new(rows, page, self.page_size, total))
    }

    async fn validate_employee(
        &self,
        employee_id: Option<i64>,
        errors: &mut Vec<String>,
    ) -> Result<(), ApiError> {
        match employee_id {
            None => errors.push("Funcionario nao informado".to_string()),
            Some(id) => {
                if !self.employees.exists_by_id(id).await? {
                    errors.push("Funcionario nao encontrado. ID inexistente".to_string());
                }
            }
        }
        Ok(())
    }
}

fn parse_occurred_at(date: Option<&str>, errors: &mut Vec<String>) -> Option<NaiveDateTime> {
    match date {
        None | Some("") => {
            errors.push("Data nao pode ser vazia".to_string());
            None
        }
        Some(v) => match format::parse_datetime(v) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push("Data invalida".to_string());
                None
            }
        },
    }
}

fn parse_entry_type(value: Option<&str>, errors: &mut Vec<String>) -> Option<EntryType> {
    match value {
        None | Some("") => {
            errors.push("Tipo nao pode ser vazio".to_string());
            None
        }
        Some(v) => match EntryType::parse(v) {
            Some(parsed) => Some(parsed),
            None => {
                errors.push("Tipo invalido".to_string());
                None
            }
        },
    }
}

fn parse_sort(ord: Option<&str>, dir: Option<&str>) -> Result<EntrySort, ApiError> {
    let field = match ord {
        None => SortField::Id,
        Some(v) => {
            SortField::parse(v).ok_or_else(|| ApiError::bad_request("Campo de ordenacao invalido"))?
        }
    };
    let direction = match dir {
        None => SortDirection::Desc,
        Some(v) => SortDirection::parse(v)
            .ok_or_else(|| ApiError::bad_request("Direcao de ordenacao invalida"))?,
    };
    Ok(EntrySort { field, direction })
}
