use sqlx::PgPool;

use crate::database::models::{Employee, NewEmployee};

const EMPLOYEE_COLUMNS: &str = "id, name, email, password_hash, cpf, role, hourly_rate, \
     daily_work_hours, lunch_hours, company_id, created_at, updated_at";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, employee: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let sql = format!(
            "INSERT INTO employees \
                 (name, email, password_hash, cpf, role, hourly_rate, \
                  daily_work_hours, lunch_hours, company_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.password_hash)
            .bind(&employee.cpf)
            .bind(employee.role)
            .bind(employee.hourly_rate)
            .bind(employee.daily_work_hours)
            .bind(employee.lunch_hours)
            .bind(employee.company_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Full-row update; refreshes `updated_at`.
    pub async fn update(&self, employee: &Employee) -> Result<Employee, sqlx::Error> {
        let sql = format!(
            "UPDATE employees SET \
                 name = $2, email = $3, password_hash = $4, hourly_rate = $5, \
                 daily_work_hours = $6, lunch_hours = $7, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(employee.id)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.password_hash)
            .bind(employee.hourly_rate)
            .bind(employee.daily_work_hours)
            .bind(employee.lunch_hours)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = $1");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE cpf = $1");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}
