use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Access profile, stored as text and carried verbatim in the JWT role claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Role {
    #[sqlx(rename = "ROLE_USUARIO")]
    #[serde(rename = "ROLE_USUARIO")]
    User,
    #[sqlx(rename = "ROLE_ADMIN")]
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USUARIO",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub cpf: String,
    pub role: Role,
    /// Unset means "not informed", never zero.
    pub hourly_rate: Option<Decimal>,
    pub daily_work_hours: Option<f32>,
    pub lunch_hours: Option<f32>,
    pub company_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for an employee row.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub cpf: String,
    pub role: Role,
    pub hourly_rate: Option<Decimal>,
    pub daily_work_hours: Option<f32>,
    pub lunch_hours: Option<f32>,
    pub company_id: i64,
}
