use tracing::info;

use crate::api::dtos::{EmployeeUpdatePayload, PfRegistrationPayload, PjRegistrationPayload};
use crate::auth::password;
use crate::database::models::{Company, Employee, NewCompany, NewEmployee, Role};
use crate::database::repositories::{CompanyRepository, EmployeeRepository};
use crate::error::ApiError;
use crate::validation;

/// Company and employee registration. Field rules and existence checks all
/// accumulate into one error list; nothing is written unless the list is
/// empty.
#[derive(Clone)]
pub struct RegistrationService {
    companies: CompanyRepository,
    employees: EmployeeRepository,
}

impl RegistrationService {
    pub fn new(companies: CompanyRepository, employees: EmployeeRepository) -> Self {
        Self { companies, employees }
    }

    /// Register a person (PF) into an existing company, found by CNPJ.
    pub async fn register_person(
        &self,
        payload: PfRegistrationPayload,
    ) -> Result<(Employee, Company), ApiError> {
        let mut errors = Vec::new();
        validation::validate_name(payload.name.as_deref(), &mut errors);
        validation::validate_email(payload.email.as_deref(), &mut errors);
        validation::validate_password(payload.password.as_deref(), &mut errors);
        validation::validate_cpf(payload.cpf.as_deref(), &mut errors);
        validation::validate_cnpj(payload.cnpj.as_deref(), &mut errors);

        // existence checks accumulate alongside the field rules
        let company = self
            .companies
            .find_by_cnpj(payload.cnpj.as_deref().unwrap_or_default())
            .await?;
        if company.is_none() {
            errors.push("Empresa nao cadastrada".to_string());
        }
        if self
            .employees
            .find_by_cpf(payload.cpf.as_deref().unwrap_or_default())
            .await?
            .is_some()
        {
            errors.push("CPF ja existe".to_string());
        }
        if self
            .employees
            .find_by_email(payload.email.as_deref().unwrap_or_default())
            .await?
            .is_some()
        {
            errors.push("Email ja existe".to_string());
        }

        let hourly_rate = validation::parse_hourly_rate(payload.hourly_rate.as_deref(), &mut errors);
        let daily_work_hours =
            validation::parse_daily_work_hours(payload.daily_work_hours.as_deref(), &mut errors);
        let lunch_hours = validation::parse_lunch_hours(payload.lunch_hours.as_deref(), &mut errors);

        match (errors.is_empty(), company, payload.name, payload.email, payload.password, payload.cpf)
        {
            (true, Some(company), Some(name), Some(email), Some(plain), Some(cpf)) => {
                let password_hash = password::hash(&plain)?;
                let employee = self
                    .employees
                    .insert(&NewEmployee {
                        name,
                        email,
                        password_hash,
                        cpf,
                        role: Role::User,
                        hourly_rate,
                        daily_work_hours,
                        lunch_hours,
                        company_id: company.id,
                    })
                    .await?;
                info!("Registered employee {} at company {}", employee.id, company.id);
                Ok((employee, company))
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }

    /// Register a company (PJ) together with its first, admin employee.
    pub async fn register_company(
        &self,
        payload: PjRegistrationPayload,
    ) -> Result<(Employee, Company), ApiError> {
        let mut errors = Vec::new();
        validation::validate_name(payload.name.as_deref(), &mut errors);
        validation::validate_email(payload.email.as_deref(), &mut errors);
        validation::validate_password(payload.password.as_deref(), &mut errors);
        validation::validate_cpf(payload.cpf.as_deref(), &mut errors);
        validation::validate_corporate_name(payload.corporate_name.as_deref(), &mut errors);
        validation::validate_cnpj(payload.cnpj.as_deref(), &mut errors);

        if self
            .companies
            .find_by_cnpj(payload.cnpj.as_deref().unwrap_or_default())
            .await?
            .is_some()
        {
            errors.push("Empresa ja existe".to_string());
        }
        if self
            .employees
            .find_by_cpf(payload.cpf.as_deref().unwrap_or_default())
            .await?
            .is_some()
        {
            errors.push("CPF ja existe".to_string());
        }
        if self
            .employees
            .find_by_email(payload.email.as_deref().unwrap_or_default())
            .await?
            .is_some()
        {
            errors.push("Email ja existe".to_string());
        }

        match (
            errors.is_empty(),
            payload.name,
            payload.email,
            payload.password,
            payload.cpf,
            payload.corporate_name,
            payload.cnpj,
        ) {
            (true, Some(name), Some(email), Some(plain), Some(cpf), Some(corporate_name), Some(cnpj)) =>
            {
                let password_hash = password::hash(&plain)?;
                let company = self
                    .companies
                    .insert(&NewCompany { corporate_name, cnpj })
                    .await?;
                let employee = self
                    .employees
                    .insert(&NewEmployee {
                        name,
                        email,
                        password_hash,
                        cpf,
                        role: Role::Admin,
                        hourly_rate: None,
                        daily_work_hours: None,
                        lunch_hours: None,
                        company_id: company.id,
                    })
                    .await?;
                info!("Registered company {} with admin {}", company.id, employee.id);
                Ok((employee, company))
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }

    /// Update an employee's profile. The password is re-hashed only when the
    /// payload carries one; an absent rate or hours clears the stored value.
    pub async fn update_employee(
        &self,
        id: i64,
        payload: EmployeeUpdatePayload,
    ) -> Result<Employee, ApiError> {
        let mut errors = Vec::new();
        validation::validate_name(payload.name.as_deref(), &mut errors);
        validation::validate_email(payload.email.as_deref(), &mut errors);

        let existing = self.employees.find_by_id(id).await?;
        match &existing {
            None => errors.push("Funcionario nao encontrado".to_string()),
            Some(current) => {
                // a changed email must not collide with another employee
                if let Some(new_email) = payload.email.as_deref() {
                    if new_email != current.email
                        && self.employees.find_by_email(new_email).await?.is_some()
                    {
                        errors.push("Email ja existe".to_string());
                    }
                }
            }
        }

        let hourly_rate = validation::parse_hourly_rate(payload.hourly_rate.as_deref(), &mut errors);
        let daily_work_hours =
            validation::parse_daily_work_hours(payload.daily_work_hours.as_deref(), &mut errors);
        let lunch_hours = validation::parse_lunch_hours(payload.lunch_hours.as_deref(), &mut errors);

        match (errors.is_empty(), existing, payload.name, payload.email) {
            (true, Some(mut employee), Some(name), Some(email)) => {
                employee.name = name;
                employee.email = email;
                employee.hourly_rate = hourly_rate;
                employee.daily_work_hours = daily_work_hours;
                employee.lunch_hours = lunch_hours;
                if let Some(digest) = password::hash_optional(payload.password.as_deref())? {
                    employee.password_hash = digest;
                }
                let updated = self.employees.update(&employee).await?;
                info!("Updated employee {}", updated.id);
                Ok(updated)
            }
            _ => Err(ApiError::Validation(errors)),
        }
    }
}
