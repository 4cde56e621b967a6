//! Hawk request signing
//!
//! The Threat Stack API authenticates every request with the Hawk scheme:
//! an HMAC-SHA256 over a normalized request string, carried in the
//! `Authorization` header together with a timestamp, a nonce, and the
//! organization id in the `ext` field. Payload hashing is not used.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Hawk credential pair (API user id and key)
#[derive(Debug, Clone)]
pub struct HawkCredentials {
    /// Credential identifier (the API user id)
    pub id: String,
    /// Shared HMAC key (the API key)
    pub key: String,
}

/// Sign a request, generating a fresh timestamp and nonce.
pub fn sign_request(
    creds: &HawkCredentials,
    method: &str,
    url: &reqwest::Url,
    ext: &str,
) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::Other(format!("request URL has no host: {}", url)))?;
    let port = url
        .port_or_known_default()
        .ok_or_else(|| Error::Other(format!("request URL has no port: {}", url)))?;

    let resource = match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    };

    let ts = Utc::now().timestamp();
    let nonce = Uuid::new_v4().simple().to_string();

    authorization_header(creds, method, host, port, &resource, ext, ts, &nonce)
}

/// Build the `Authorization` header value for a single request.
///
/// The normalized string follows Hawk 1.1: header tag, timestamp, nonce,
/// method, resource (path + query), host, port, payload hash (empty), ext.
#[allow(clippy::too_many_arguments)]
pub fn authorization_header(
    creds: &HawkCredentials,
    method: &str,
    host: &str,
    port: u16,
    resource: &str,
    ext: &str,
    ts: i64,
    nonce: &str,
) -> Result<String> {
    let normalized = format!(
        "hawk.1.header\n{ts}\n{nonce}\n{method}\n{resource}\n{host}\n{port}\n\n{ext}\n",
        ts = ts,
        nonce = nonce,
        method = method.to_uppercase(),
        resource = resource,
        host = host.to_lowercase(),
        port = port,
        ext = ext,
    );

    let mut mac = HmacSha256::new_from_slice(creds.key.as_bytes())
        .map_err(|e| Error::Other(format!("invalid HMAC key: {}", e)))?;
    mac.update(normalized.as_bytes());
    let mac = STANDARD.encode(mac.finalize().into_bytes());

    Ok(format!(
        r#"Hawk id="{}", ts="{}", nonce="{}", ext="{}", mac="{}""#,
        creds.id, ts, nonce, ext, mac
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_credentials() -> HawkCredentials {
        HawkCredentials {
            id: "dh37fgj492je".to_string(),
            key: "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn".to_string(),
        }
    }

    // Reference vector from the Hawk 1.1 specification.
    #[test]
    fn test_mac_matches_hawk_spec_vector() {
        let header = authorization_header(
            &spec_credentials(),
            "GET",
            "example.com",
            8000,
            "/resource/1?b=1&a=2",
            "some-app-ext-data",
            1353832234,
            "j4h3g2",
        )
        .unwrap();

        assert!(header.contains(r#"mac="6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE=""#));
    }

    #[test]
    fn test_header_fields() {
        let header = authorization_header(
            &spec_credentials(),
            "GET",
            "api.threatstack.com",
            443,
            "/v2/agents?status=online",
            "org-123",
            1353832234,
            "abc123",
        )
        .unwrap();

        assert!(header.starts_with("Hawk "));
        assert!(header.contains(r#"id="dh37fgj492je""#));
        assert!(header.contains(r#"ts="1353832234""#));
        assert!(header.contains(r#"nonce="abc123""#));
        assert!(header.contains(r#"ext="org-123""#));
    }

    #[test]
    fn test_method_is_uppercased() {
        let lower = authorization_header(
            &spec_credentials(),
            "get",
            "example.com",
            8000,
            "/resource/1?b=1&a=2",
            "some-app-ext-data",
            1353832234,
            "j4h3g2",
        )
        .unwrap();
        let upper = authorization_header(
            &spec_credentials(),
            "GET",
            "example.com",
            8000,
            "/resource/1?b=1&a=2",
            "some-app-ext-data",
            1353832234,
            "j4h3g2",
        )
        .unwrap();

        assert_eq!(lower, upper);
    }

    #[test]
    fn test_sign_request_uses_url_parts() {
        let url = reqwest::Url::parse("https://api.threatstack.com/v2/agents?status=online")
            .unwrap();
        let header = sign_request(&spec_credentials(), "GET", &url, "org-123").unwrap();

        assert!(header.starts_with("Hawk "));
        assert!(header.contains(r#"ext="org-123""#));
        assert!(header.contains("mac=\""));
    }
}
