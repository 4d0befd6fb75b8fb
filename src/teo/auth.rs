//! TC3-HMAC-SHA256 request signing.
//!
//! Every API call is a POST to `/` with a JSON body, signed over the
//! `content-type` and `host` headers plus the exact payload bytes.

use chrono::DateTime;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::config;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const CONTENT_TYPE: &str = "application/json";
const SIGNED_HEADERS: &str = "content-type;host";

/// Build the `Authorization` header value for a signed API request.
///
/// `host` must match the `Host` header the request is sent with, and
/// `payload` must be the exact body bytes, or the server rejects the
/// signature.
pub fn build_authorization(
    secret_id: &str,
    secret_key: &str,
    host: &str,
    payload: &[u8],
    timestamp: i64,
) -> String {
    let date = date_from_timestamp(timestamp);
    let credential_scope = format!("{}/{}/tc3_request", date, config::api::SERVICE);
    let string_to_sign = string_to_sign(&credential_scope, host, payload, timestamp);

    let secret_date = hmac_sha256(format!("TC3{}", secret_key).as_bytes(), date.as_bytes());
    let secret_service = hmac_sha256(&secret_date, config::api::SERVICE.as_bytes());
    let secret_signing = hmac_sha256(&secret_service, b"tc3_request");
    let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

    format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, secret_id, credential_scope, SIGNED_HEADERS, signature
    )
}

fn canonical_request(host: &str, payload: &[u8]) -> String {
    format!(
        "POST\n/\n\ncontent-type:{}\nhost:{}\n\n{}\n{}",
        CONTENT_TYPE,
        host,
        SIGNED_HEADERS,
        sha256_hex(payload)
    )
}

fn string_to_sign(credential_scope: &str, host: &str, payload: &[u8], timestamp: i64) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        timestamp,
        credential_scope,
        sha256_hex(canonical_request(host, payload).as_bytes())
    )
}

fn date_from_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "1970-01-01".to_string())
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
