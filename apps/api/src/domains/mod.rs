//! Company domain lookup — batch backfill of `jobs.company_domain`.
//!
//! The LLM guesses each company's web domain; guesses below the confidence
//! threshold (or with no domain at all) are skipped rather than written.

pub mod prompts;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domains::prompts::{DOMAIN_LOOKUP_PROMPT_TEMPLATE, DOMAIN_LOOKUP_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Guesses below this confidence are never written back.
pub const WRITE_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Structured result of a single company lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Bare domain without scheme or www ("stripe.com"), or None if the
    /// model does not know.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub is_recruitment_agency: bool,
    #[serde(default)]
    pub confidence: f32,
}

impl CompanyInfo {
    /// The normalized domain to write back, if the guess clears the bar.
    pub fn writable_domain(&self) -> Option<String> {
        if self.confidence < WRITE_CONFIDENCE_THRESHOLD {
            return None;
        }
        self.domain.as_deref().and_then(normalize_domain)
    }
}

/// Normalizes a model-returned domain: strips scheme, leading www and
/// trailing slash, lowercases. Returns None for anything that no longer
/// looks like a domain.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    let domain = domain.trim_end_matches('/');

    if domain.is_empty() || !domain.contains('.') || domain.contains(' ') {
        return None;
    }
    Some(domain.to_ascii_lowercase())
}

/// Asks the LLM for a company's web domain.
pub async fn lookup_company(llm: &LlmClient, company_name: &str) -> Result<CompanyInfo, LlmError> {
    let prompt = DOMAIN_LOOKUP_PROMPT_TEMPLATE.replace("{company_name}", company_name);
    llm.call_json::<CompanyInfo>(&prompt, DOMAIN_LOOKUP_SYSTEM).await
}

/// Distinct active company names that still have no domain.
pub async fn companies_missing_domain(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT company_name
        FROM jobs
        WHERE is_active = true
            AND company_domain IS NULL
            AND company_name IS NOT NULL
            AND company_name <> ''
        ORDER BY company_name
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Writes the domain onto every job row for the company. Returns the number
/// of rows updated.
pub async fn update_company_domain(
    pool: &PgPool,
    company_name: &str,
    domain: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE jobs SET company_domain = $1 WHERE company_name = $2")
        .bind(domain)
        .bind(company_name)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain_strips_scheme_and_www() {
        assert_eq!(
            normalize_domain("https://www.stripe.com/"),
            Some("stripe.com".to_string())
        );
        assert_eq!(
            normalize_domain("http://acme.co.uk"),
            Some("acme.co.uk".to_string())
        );
        assert_eq!(
            normalize_domain("Vercel.COM"),
            Some("vercel.com".to_string())
        );
    }

    #[test]
    fn test_normalize_domain_rejects_junk() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("   "), None);
        assert_eq!(normalize_domain("not a domain"), None);
        assert_eq!(normalize_domain("nodots"), None);
    }

    #[test]
    fn test_writable_domain_requires_confidence() {
        let low = CompanyInfo {
            domain: Some("stripe.com".to_string()),
            is_recruitment_agency: false,
            confidence: 0.4,
        };
        assert_eq!(low.writable_domain(), None);

        let high = CompanyInfo {
            confidence: 0.9,
            ..low.clone()
        };
        assert_eq!(high.writable_domain(), Some("stripe.com".to_string()));
    }

    #[test]
    fn test_writable_domain_requires_a_domain() {
        let info = CompanyInfo {
            domain: None,
            is_recruitment_agency: true,
            confidence: 0.95,
        };
        assert_eq!(info.writable_domain(), None);
    }

    #[test]
    fn test_company_info_deserializes_with_defaults() {
        let info: CompanyInfo = serde_json::from_str(r#"{"domain": "acme.io"}"#).unwrap();
        assert_eq!(info.domain.as_deref(), Some("acme.io"));
        assert!(!info.is_recruitment_agency);
        assert_eq!(info.confidence, 0.0);
    }
}
