//! OpenFIGI mapping wire format.
//!
//! Request body is a one element array of [`MappingJob`]; the response is an
//! array with one entry per job, each carrying either a `data` array of
//! matches or an `error`/`warning` string.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::LookupConfig;
use crate::http_client::HttpRequest;
use crate::identifier::ClassifiedIdentifier;
use crate::lookup::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingJob {
    pub id_type: &'static str,
    pub id_value: String,
}

impl MappingJob {
    pub fn for_identifier(identifier: &ClassifiedIdentifier) -> Self {
        Self {
            id_type: identifier.kind().figi_id_type(),
            id_value: identifier.value().to_owned(),
        }
    }
}

/// Builds the POST request for a single identifier.
pub fn mapping_request(
    identifier: &ClassifiedIdentifier,
    config: &LookupConfig,
) -> Result<HttpRequest, serde_json::Error> {
    let body = serde_json::to_string(&[MappingJob::for_identifier(identifier)])?;

    let mut request = HttpRequest::post(config.endpoint())
        .with_header("Content-Type", "application/json")
        .with_body(body)
        .with_timeout_ms(config.timeout_ms());
    if let Some((name, key)) = config.api_key_header() {
        request = request.with_header(name, key);
    }

    Ok(request)
}

#[derive(Debug, Deserialize)]
struct MappingResult {
    #[serde(default)]
    data: Option<Vec<FigiRecord>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    warning: Option<String>,
}

/// Outer `Option` is key presence, inner is JSON `null`.
type Field = Option<Option<String>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FigiRecord {
    #[serde(default, deserialize_with = "present")]
    name: Field,
    #[serde(default, deserialize_with = "present")]
    security_type: Field,
    #[serde(default, deserialize_with = "present")]
    security_type2: Field,
    #[serde(default, deserialize_with = "present")]
    market_sector: Field,
    #[serde(default, deserialize_with = "present")]
    exch_code: Field,
    #[serde(default, deserialize_with = "present")]
    ticker: Field,
    #[serde(default, deserialize_with = "present")]
    security_description: Field,
}

fn present<'de, D>(deserializer: D) -> Result<Field, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Security metadata shown in the hover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityProfile {
    pub name: String,
    pub security_type: String,
    pub security_type2: String,
    pub market_sector: String,
    pub exch_code: String,
    pub ticker: String,
    pub description: String,
    /// Number of records OpenFIGI returned for the identifier.
    pub match_count: usize,
}

/// Extracts the first match of the first result.
///
/// Every displayed field must be present; a field sent as `null` is shown as
/// the text `null`.
pub fn parse_mapping_response(body: &str) -> Result<SecurityProfile, LookupError> {
    let results: Vec<MappingResult> = serde_json::from_str(body)
        .map_err(|e| LookupError::malformed(format!("openfigi response is not a mapping array: {e}")))?;

    let Some(first) = results.into_iter().next() else {
        return Err(LookupError::not_found("openfigi returned no mapping results"));
    };

    if let Some(error) = first.error {
        return Err(LookupError::not_found(format!("openfigi error: {error}")));
    }

    let records = first.data.unwrap_or_default();
    let match_count = records.len();
    let Some(record) = records.into_iter().next() else {
        let detail = first.warning.unwrap_or_else(|| String::from("no data"));
        return Err(LookupError::not_found(format!("openfigi: {detail}")));
    };

    Ok(SecurityProfile {
        name: required(record.name, "name")?,
        security_type: required(record.security_type, "securityType")?,
        security_type2: required(record.security_type2, "securityType2")?,
        market_sector: required(record.market_sector, "marketSector")?,
        exch_code: required(record.exch_code, "exchCode")?,
        ticker: required(record.ticker, "ticker")?,
        description: required(record.security_description, "securityDescription")?,
        match_count,
    })
}

fn required(value: Field, field: &str) -> Result<String, LookupError> {
    match value {
        Some(text) => Ok(text.unwrap_or_else(|| String::from("null"))),
        None => Err(LookupError::malformed(format!(
            "openfigi record is missing '{field}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::classify;
    use crate::lookup::LookupErrorKind;
    use serde_json::{json, Value};

    const APPLE: &str = r#"[{"data":[
        {"figi":"BBG000B9XRY4","name":"APPLE INC","ticker":"AAPL","exchCode":"US",
         "securityType":"Common Stock","securityType2":"Common Stock","marketSector":"Equity",
         "securityDescription":"AAPL"},
        {"figi":"BBG000B9Y5X2","name":"APPLE INC","ticker":"AAPL","exchCode":"UW",
         "securityType":"Common Stock","securityType2":"Common Stock","marketSector":"Equity",
         "securityDescription":"AAPL"}
    ]}]"#;

    #[test]
    fn request_body_is_single_job_array() {
        let id = classify("B0YBKJ7").expect("sedol");
        let request = mapping_request(&id, &LookupConfig::default()).expect("request");

        let body: Value = serde_json::from_str(request.body.as_deref().expect("body")).expect("json");
        assert_eq!(body, json!([{ "idType": "ID_SEDOL", "idValue": "B0YBKJ7" }]));
        assert_eq!(request.url, "https://api.openfigi.com/v1/mapping");
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert!(!request.headers.contains_key("x-openfigi-apikey"));
    }

    #[test]
    fn api_key_header_is_added_when_configured() {
        let id = classify("US0378331005").expect("isin");
        let config = LookupConfig::new("https://example.test/v1/mapping", Some(String::from("k-1")), 500)
            .expect("config");
        let request = mapping_request(&id, &config).expect("request");

        assert_eq!(
            request.headers.get("x-openfigi-apikey").map(String::as_str),
            Some("k-1")
        );
        assert_eq!(request.timeout_ms, 500);
    }

    #[test]
    fn parses_first_record_and_counts_matches() {
        let profile = parse_mapping_response(APPLE).expect("profile");
        assert_eq!(profile.name, "APPLE INC");
        assert_eq!(profile.exch_code, "US");
        assert_eq!(profile.ticker, "AAPL");
        assert_eq!(profile.match_count, 2);
    }

    #[test]
    fn warning_entry_is_not_found() {
        let err = parse_mapping_response(r#"[{"warning":"No identifier found."}]"#)
            .expect_err("no match");
        assert_eq!(err.kind(), LookupErrorKind::NotFound);
        assert!(err.message().contains("No identifier found."));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = parse_mapping_response(r#"[{"data":[{"name":"X","ticker":"X"}]}]"#)
            .expect_err("missing fields");
        assert_eq!(err.kind(), LookupErrorKind::Malformed);
    }

    #[test]
    fn null_field_is_kept_as_null_text() {
        let body = r#"[{"data":[{"name":"GILT 2030","ticker":"UKT","exchCode":null,
            "securityType":"GOVT","securityType2":"Bond","marketSector":"Govt",
            "securityDescription":"UKT 0 3/8 10/22/30"}]}]"#;

        let profile = parse_mapping_response(body).expect("profile");
        assert_eq!(profile.exch_code, "null");
        assert_eq!(profile.name, "GILT 2030");
        assert_eq!(profile.match_count, 1);
    }

    #[test]
    fn non_array_body_is_malformed() {
        let err = parse_mapping_response(r#"{"error":"Invalid idType"}"#).expect_err("object");
        assert_eq!(err.kind(), LookupErrorKind::Malformed);
    }
}
