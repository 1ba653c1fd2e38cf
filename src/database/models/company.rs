use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub corporate_name: String,
    pub cnpj: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a company row.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub corporate_name: String,
    pub cnpj: String,
}
