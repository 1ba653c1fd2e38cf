use sqlx::PgPool;

use crate::database::models::{Company, NewCompany};

const COMPANY_COLUMNS: &str = "id, corporate_name, cnpj, created_at, updated_at";

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, company: &NewCompany) -> Result<Company, sqlx::Error> {
        let sql = format!(
            "INSERT INTO companies (corporate_name, cnpj) VALUES ($1, $2) RETURNING {COMPANY_COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&sql)
            .bind(&company.corporate_name)
            .bind(&company.cnpj)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Company>, sqlx::Error> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE cnpj = $1");
        sqlx::query_as::<_, Company>(&sql)
            .bind(cnpj)
            .fetch_optional(&self.pool)
            .await
    }
}
