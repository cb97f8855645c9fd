//! Mock JWT-shaped tokens
//!
//! A token is `header.payload.signature`, each segment standard base64. The
//! signature segment is a fixed placeholder: nothing here is signed or
//! verified, so these values carry no security guarantees.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const SIGNATURE_PLACEHOLDER: &str = "mock_signature";

/// Why a token could not be decoded
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("expected 3 segments, found {0}")]
    Segments(usize),

    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload is not a valid claims object: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Header<'a> {
    alg: &'a str,
    typ: &'a str,
}

/// Token payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the username); empty when the payload names none
    #[serde(default)]
    pub sub: String,
    /// Issued at, seconds since epoch
    #[serde(default)]
    pub iat: i64,
    /// Expires at, seconds since epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Milliseconds of life left at `now_ms`; `None` without an expiry
    pub fn remaining_ms(&self, now_ms: i64) -> Option<i64> {
        self.exp.map(|exp| exp.saturating_mul(1000) - now_ms)
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.remaining_ms(now_ms).is_none_or(|left| left <= 0)
    }
}

/// An encoded token string
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Claims carried by this token, or `None` if it is malformed
    pub fn claims(&self) -> Option<Claims> {
        decode(self)
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Tokens end up in logs through `Debug`; keep only the head.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head: String = self.0.chars().take(12).collect();
        write!(f, "Token({head}…)")
    }
}

/// Mint a token for `subject` valid for `ttl` from `now_secs`
///
/// Lifetimes below one second are raised to one second so `exp > iat`
/// always holds.
pub fn encode(subject: &str, ttl: Duration, now_secs: i64) -> Token {
    let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX).max(1);
    let claims = Claims {
        sub: subject.to_string(),
        iat: now_secs,
        exp: Some(now_secs.saturating_add(ttl_secs)),
    };

    let header = Header {
        alg: "HS256",
        typ: "JWT",
    };

    // Serializing these plain structs cannot fail.
    let header = serde_json::to_vec(&header).unwrap_or_default();
    let payload = serde_json::to_vec(&claims).unwrap_or_default();

    Token(format!(
        "{}.{}.{}",
        STANDARD.encode(header),
        STANDARD.encode(payload),
        STANDARD.encode(SIGNATURE_PLACEHOLDER)
    ))
}

/// Decode the claims of a token
pub fn try_decode(token: &Token) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.as_str().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }

    let payload = STANDARD.decode(segments[1])?;
    Ok(serde_json::from_slice(&payload)?)
}

/// Decode the claims of a token, `None` if it is malformed
pub fn decode(token: &Token) -> Option<Claims> {
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(error = %err, "Discarding malformed token");
            None
        }
    }
}

/// Whether `token` is unusable at `now_ms`
///
/// Malformed tokens and tokens without an expiry count as expired.
pub fn is_expired(token: &Token, now_ms: i64) -> bool {
    decode(token).is_none_or(|claims| claims.is_expired_at(now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_SECS: i64 = 1_700_000_000;

    fn raw(header: &str, payload: &str) -> Token {
        Token(format!(
            "{}.{}.{}",
            STANDARD.encode(header),
            STANDARD.encode(payload),
            STANDARD.encode(SIGNATURE_PLACEHOLDER)
        ))
    }

    #[test]
    fn test_encode_decode_subject() {
        let token = encode("admin", Duration::from_secs(3600), NOW_SECS);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iat, NOW_SECS);
        assert_eq!(claims.exp, Some(NOW_SECS + 3600));
        assert_eq!(token.as_str().split('.').count(), 3);
    }

    #[test]
    fn test_header_and_signature_segments() {
        let token = encode("admin", Duration::from_secs(60), NOW_SECS);
        let segments: Vec<&str> = token.as_str().split('.').collect();
        let header: serde_json::Value =
            serde_json::from_slice(&STANDARD.decode(segments[0]).unwrap()).unwrap();
        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");
        assert_eq!(STANDARD.decode(segments[2]).unwrap(), b"mock_signature");
    }

    #[test]
    fn test_expiry_boundary() {
        let token = encode("admin", Duration::from_secs(3600), NOW_SECS);
        let now_ms = NOW_SECS * 1000;
        assert!(!is_expired(&token, now_ms));
        assert!(!is_expired(&token, now_ms + 3_599_999));
        assert!(is_expired(&token, now_ms + 3_600_000));
        assert!(is_expired(&token, now_ms + 10_000_000));
    }

    #[test]
    fn test_zero_ttl_still_expires_after_issue() {
        let token = encode("admin", Duration::ZERO, NOW_SECS);
        let claims = decode(&token).unwrap();
        assert!(claims.exp.unwrap() > claims.iat);
    }

    #[test]
    fn test_malformed_tokens_decode_to_none() {
        assert!(decode(&Token::from("")).is_none());
        assert!(decode(&Token::from("a.b")).is_none());
        assert!(decode(&Token::from("a.b.c.d")).is_none());
        assert!(decode(&Token::from("x.%%%.y")).is_none());
        assert!(decode(&raw("{}", "not json")).is_none());
        assert!(decode(&raw("{}", "42")).is_none());
    }

    #[test]
    fn test_try_decode_reports_reason() {
        assert!(matches!(
            try_decode(&Token::from("only.two")),
            Err(TokenError::Segments(2))
        ));
        assert!(matches!(
            try_decode(&Token::from("x.!!.y")),
            Err(TokenError::Encoding(_))
        ));
        assert!(matches!(
            try_decode(&raw("{}", "\"admin\"")),
            Err(TokenError::Payload(_))
        ));
    }

    #[test]
    fn test_missing_subject_still_decodes() {
        let token = raw("{}", r#"{"iat": 1, "exp": 99999999999}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub, "");
        assert_eq!(claims.exp, Some(99_999_999_999));
        assert!(!is_expired(&token, NOW_SECS * 1000));
    }

    #[test]
    fn test_missing_expiry_counts_as_expired() {
        let token = raw("{}", r#"{"sub": "admin", "iat": 1}"#);
        assert_eq!(decode(&token).unwrap().exp, None);
        assert!(is_expired(&token, 0));
        assert!(is_expired(&Token::from("garbage"), 0));
    }

    #[test]
    fn test_remaining_ms() {
        let token = encode("admin", Duration::from_secs(200), NOW_SECS);
        let claims = token.claims().unwrap();
        assert_eq!(claims.remaining_ms(NOW_SECS * 1000), Some(200_000));
        assert_eq!(claims.remaining_ms(NOW_SECS * 1000 + 250_000), Some(-50_000));
    }

    #[test]
    fn test_debug_hides_full_token() {
        let token = encode("admin", Duration::from_secs(60), NOW_SECS);
        let debug = format!("{token:?}");
        assert!(debug.len() < token.as_str().len());
    }
}
