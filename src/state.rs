use sqlx::PgPool;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::repositories::{CompanyRepository, EmployeeRepository, EntryRepository};
use crate::services::{AuthService, EntryService, RegistrationService};

/// Shared request context. Everything inside is cheap to clone; handlers
/// receive it through axum's State extractor, middleware included.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenService,
    pub companies: CompanyRepository,
    pub auth: AuthService,
    pub registration: RegistrationService,
    pub entries: EntryService,
}

impl AppState {
    pub fn new(config: &AppConfig, pool: PgPool) -> Self {
        let tokens = TokenService::new(&config.auth);
        let companies = CompanyRepository::new(pool.clone());
        let employees = EmployeeRepository::new(pool.clone());
        let entries = EntryRepository::new(pool.clone());

        Self {
            auth: AuthService::new(employees.clone(), tokens.clone()),
            registration: RegistrationService::new(companies.clone(), employees.clone()),
            entries: EntryService::new(entries, employees, config.pagination.page_size),
            companies,
            tokens,
            pool,
        }
    }
}
