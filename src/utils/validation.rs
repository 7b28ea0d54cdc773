use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 未替換的 `${VAR}` 代表環境變數沒有設定
pub fn validate_no_placeholder(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(CatalogError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("unresolved environment placeholder in '{}'", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("remote.url", "https://example.supabase.co").is_ok());
        assert!(validate_url("remote.url", "http://localhost:54321").is_ok());
        assert!(validate_url("remote.url", "").is_err());
        assert!(validate_url("remote.url", "invalid-url").is_err());
        assert!(validate_url("remote.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("catalog.limit", 6, 1).is_ok());
        assert!(validate_positive_number("catalog.limit", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_and_non_empty() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("remote.api_key", &missing),
            Err(CatalogError::MissingConfigError { .. })
        ));
        assert!(validate_non_empty_string("remote.api_key", "   ").is_err());
        assert!(validate_non_empty_string("remote.api_key", "anon").is_ok());
    }

    #[test]
    fn test_validate_no_placeholder() {
        assert!(validate_no_placeholder("remote.api_key", "${QUICKLINK_API_KEY}").is_err());
        assert!(validate_no_placeholder("remote.api_key", "eyJhbGciOi").is_ok());
    }
}
