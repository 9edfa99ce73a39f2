//! Domain intelligence types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// WHOIS, DNS and email-security summary for a domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainIntel {
    pub id: u64,
    pub domain: String,
    #[serde(default)]
    pub whois: Option<Value>,
    #[serde(default)]
    pub dns: Option<Value>,
    #[serde(default)]
    pub email_security: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DNS records grouped by record type
///
/// The backend sends `null` for record types it did not resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsRecords {
    #[serde(rename = "A", default)]
    pub a: Option<Vec<String>>,
    #[serde(rename = "AAAA", default)]
    pub aaaa: Option<Vec<String>>,
    #[serde(rename = "MX", default)]
    pub mx: Option<Vec<String>>,
    #[serde(rename = "TXT", default)]
    pub txt: Option<Vec<String>>,
    #[serde(rename = "NS", default)]
    pub ns: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_records_tolerate_nulls() {
        let records: DnsRecords = serde_json::from_str(
            r#"{"A": ["93.184.216.34"], "AAAA": null, "MX": [], "NS": ["a.iana-servers.net"]}"#,
        )
        .unwrap();

        assert_eq!(records.a.as_deref(), Some(&["93.184.216.34".to_string()][..]));
        assert!(records.aaaa.is_none());
        assert!(records.txt.is_none());
        assert_eq!(records.mx, Some(vec![]));
    }
}
