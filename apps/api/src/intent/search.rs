//! Parameterized jobs query backing the search_jobs intent.

use sqlx::PgPool;

use crate::intent::role_mapping::{location_pattern, role_pattern};
use crate::models::job::JobRow;

/// Fractional-first ranking: explicit fractional flag, then "fractional"
/// in the title, then part-time/interim, then everything else; newest first
/// within each band. Role and location patterns each probe the columns a
/// scraped posting might have filled in.
const JOB_SEARCH_SQL: &str = r#"
SELECT id, slug, title, company_name, location, is_remote,
       salary_min, salary_max, salary_currency, posted_date
FROM jobs
WHERE is_active = true
    AND (
        LOWER(COALESCE(executive_title::text, '')) LIKE LOWER($1)
        OR LOWER(COALESCE(role_category::text, '')) LIKE LOWER($1)
        OR LOWER(title) LIKE LOWER($1)
    )
    AND (
        LOWER(COALESCE(city::text, '')) LIKE LOWER($2)
        OR LOWER(COALESCE(country, '')) LIKE LOWER($2)
        OR LOWER(COALESCE(location, '')) LIKE LOWER($2)
    )
ORDER BY
    CASE
        WHEN is_fractional = true THEN 1
        WHEN LOWER(title) LIKE '%fractional%' THEN 2
        WHEN LOWER(title) LIKE '%part%time%' OR LOWER(title) LIKE '%interim%' THEN 3
        ELSE 4
    END ASC,
    posted_date DESC NULLS LAST
LIMIT 5
"#;

/// Runs the jobs query for a classified search intent.
pub async fn search_jobs(
    pool: &PgPool,
    role_type: Option<&str>,
    location: Option<&str>,
) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(JOB_SEARCH_SQL)
        .bind(role_pattern(role_type))
        .bind(location_pattern(location))
        .fetch_all(pool)
        .await
}
