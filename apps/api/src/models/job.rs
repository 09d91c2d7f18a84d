use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Row shape read from the externally-owned `jobs` table. Only the columns
/// the voice search returns are selected; the table itself is defined and
/// populated by the scraping pipeline, not this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_currency: Option<String>,
    pub posted_date: Option<NaiveDate>,
}

/// Wire shape for job results consumed by the voice UI (camelCase).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub is_remote: bool,
    /// Fractional roles quote day rates; salary_min carries the rate.
    pub day_rate: Option<i32>,
    pub currency: String,
}

impl From<JobRow> for JobSummary {
    fn from(row: JobRow) -> Self {
        JobSummary {
            id: row.id,
            slug: row.slug,
            title: row.title,
            company: row.company_name,
            location: row.location,
            is_remote: row.is_remote.unwrap_or(false),
            day_rate: row.salary_min,
            currency: row.salary_currency.unwrap_or_else(|| "GBP".to_string()),
        }
    }
}
