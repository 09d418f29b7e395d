//! AWS Signature Version 4 request signing.
//!
//! Only the subset needed for an unchunked `PUT` with a signed payload hash:
//! path-style addressing, no query string, signed headers fixed to
//! `content-type;host;x-amz-content-sha256;x-amz-date`.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";

/// Inputs for signing one PUT request.
#[derive(Debug)]
pub struct SigningRequest<'a> {
    /// Request host header value
    pub host: &'a str,
    /// URI path, already percent-encoded, e.g. `/bucket/key`
    pub path: &'a str,
    /// Content-Type header value
    pub content_type: &'a str,
    /// Hex SHA-256 of the payload
    pub payload_hash: &'a str,
    /// Timestamp in `YYYYMMDDTHHMMSSZ` form
    pub amz_date: &'a str,
}

/// Computed signature material for one request.
#[derive(Debug)]
pub struct Signature {
    /// Value for the `Authorization` header
    pub authorization: String,
}

/// Hex-encoded SHA-256 of a byte slice.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HmacSha256 accepts keys of any length, so new_from_slice cannot fail.
    let mut mac = HmacSha256::new_from_slice(key).unwrap_or_else(|_| unreachable!());
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn signing_key(secret: &str, date: &str, region: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, SERVICE.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

fn canonical_request(req: &SigningRequest<'_>) -> String {
    format!(
        "PUT\n{}\n\ncontent-type:{}\nhost:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n\ncontent-type;host;x-amz-content-sha256;x-amz-date\n{}",
        req.path, req.content_type, req.host, req.payload_hash, req.amz_date, req.payload_hash
    )
}

/// Sign a PUT request, producing the `Authorization` header value.
pub fn sign(
    req: &SigningRequest<'_>,
    access_key_id: &str,
    secret_access_key: &str,
    region: &str,
) -> Signature {
    let date = &req.amz_date[..8];
    let scope = format!("{}/{}/{}/aws4_request", date, region, SERVICE);

    let canonical = canonical_request(req);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        req.amz_date,
        scope,
        sha256_hex(canonical.as_bytes())
    );

    let key = signing_key(secret_access_key, date, region);
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

    Signature {
        authorization: format!(
            "{} Credential={}/{}, SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date, Signature={}",
            ALGORITHM, access_key_id, scope, signature
        ),
    }
}

/// Percent-encode an object key for use in the request path.
///
/// Unreserved characters and `/` pass through; everything else is encoded,
/// per the SigV4 canonical URI rules.
pub fn uri_encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
