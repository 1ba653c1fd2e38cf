use sqlx::PgPool;

use crate::database::models::{Entry, NewEntry};

const ENTRY_COLUMNS: &str =
    "id, occurred_at, entry_type, description, location, employee_id, created_at, updated_at";

/// Sortable entry fields, keyed by the wire names clients pass in `ord`.
/// Closed set so the ORDER BY clause is never built from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    OccurredAt,
    EntryType,
    Description,
    Location,
}

impl SortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(SortField::Id),
            "data" => Some(SortField::OccurredAt),
            "tipo" => Some(SortField::EntryType),
            "descricao" => Some(SortField::Description),
            "localizacao" => Some(SortField::Location),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::OccurredAt => "occurred_at",
            SortField::EntryType => "entry_type",
            SortField::Description => "description",
            SortField::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Complete ordering for a page request. Defaults to newest ids first.
#[derive(Debug, Clone, Copy)]
pub struct EntrySort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for EntrySort {
    fn default() -> Self {
        Self { field: SortField::Id, direction: SortDirection::Desc }
    }
}

#[derive(Clone)]
pub struct EntryRepository {
    pool: PgPool,
}

impl EntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, entry: &NewEntry) -> Result<Entry, sqlx::Error> {
        let sql = format!(
            "INSERT INTO entries (occurred_at, entry_type, description, location, employee_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&sql)
            .bind(entry.occurred_at)
            .bind(entry.entry_type)
            .bind(&entry.description)
            .bind(&entry.location)
            .bind(entry.employee_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Rewrites the mutable fields; refreshes `updated_at`. The owning
    /// employee of an entry never changes through this path.
    pub async fn update(&self, entry: &Entry) -> Result<Entry, sqlx::Error> {
        let sql = format!(
            "UPDATE entries SET \
                 occurred_at = $2, entry_type = $3, description = $4, location = $5, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&sql)
            .bind(entry.id)
            .bind(entry.occurred_at)
            .bind(entry.entry_type)
            .bind(&entry.description)
            .bind(&entry.location)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Entry>, sqlx::Error> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns how many rows went away (0 when the id never existed).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_page_by_employee_id(
        &self,
        employee_id: i64,
        page: i64,
        size: i64,
        sort: EntrySort,
    ) -> Result<Vec<Entry>, sqlx::Error> {
        // sort comes from closed enums, so the interpolation cannot carry input
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE employee_id = $1 \
             ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort.field.column(),
            sort.direction.as_sql(),
        );
        sqlx::query_as::<_, Entry>(&sql)
            .bind(employee_id)
            .bind(size)
            .bind(page * size)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count_by_employee_id(&self, employee_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries WHERE employee_id = $1")
            .bind(employee_id)
            .fetch_one(&self.pool)
            .await
    }
}
