//! Bearer token issuance and verification.
//!
//! [`TokenAuthenticator`] signs [`Claims`] into compact JWS strings and
//! verifies them again. It is built once at startup from a [`JwtConfig`] and
//! holds no per-token state: there is no revocation list, and logging out is
//! simply the client discarding its token.
//!
//! Expiry is checked against an injected [`Clock`] with zero leeway, so a
//! token is valid while `exp > now` and expired from `exp <= now` onwards.
//!
//! # Example
//!
//! ```ignore
//! use brevity_auth::{Claims, TokenAuthenticator};
//! use brevity_config::JwtConfig;
//!
//! let authenticator = TokenAuthenticator::new(&JwtConfig::from_env())?;
//!
//! let token = authenticator.issue(
//!     Claims::new().with_subject("42").with_username("alice"),
//!     None,
//! )?;
//! let claims = authenticator.verify(&token)?;
//! let renewed = authenticator.refresh(&token)?;
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use brevity_config::JwtConfig;

use crate::claims::Claims;
use crate::clock::{Clock, SystemClock};
use crate::error::TokenError;

pub struct TokenAuthenticator {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenAuthenticator {
    /// Builds an authenticator that reads the wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnsupportedAlgorithm`] unless the configured
    /// algorithm is one of the shared-secret ones (`HS256`, `HS384`, `HS512`),
    /// and [`TokenError::InvalidLifetime`] when the default TTL is not positive
    /// or too large to represent.
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &JwtConfig, clock: Arc<dyn Clock>) -> Result<Self, TokenError> {
        let algorithm = parse_hmac_algorithm(&config.algorithm)?;
        let default_ttl = config
            .default_ttl()
            .filter(|ttl| ttl.num_seconds() > 0)
            .ok_or(TokenError::InvalidLifetime(config.access_token_expire_minutes))?;

        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp"]);
        // Expiry is checked against `clock`, not jsonwebtoken's system time.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            default_ttl,
            clock,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Signs `claims` into a token expiring `ttl` (or the default TTL) from now.
    ///
    /// Any `exp` already present in `claims` is replaced. The output is
    /// deterministic for identical claims, expiry, secret and algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if the TTL is not positive or the
    /// claims cannot be serialized.
    pub fn issue(&self, claims: Claims, ttl: Option<Duration>) -> Result<String, TokenError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        if ttl.num_seconds() <= 0 {
            return Err(TokenError::Encoding(format!(
                "token lifetime must be at least one second, got {}ms",
                ttl.num_milliseconds()
            )));
        }

        let exp = self.clock.now().timestamp().saturating_add(ttl.num_seconds());
        self.sign(claims, exp)
    }

    /// Checks the signature, then the expiry, and returns the embedded claims.
    ///
    /// # Errors
    ///
    /// - [`TokenError::InvalidSignature`] for malformed or tampered tokens,
    ///   a different secret or algorithm, or a missing `exp`
    /// - [`TokenError::Expired`] once `exp <= now`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Token failed signature validation");
                TokenError::InvalidSignature
            })?;

        let exp = claims.exp.ok_or(TokenError::InvalidSignature)?;
        let now = self.clock.now().timestamp();
        if exp <= now {
            debug!(exp, now, "Token expired");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Re-issues a currently valid token with a fresh expiry and the same claims.
    ///
    /// The new `exp` is always strictly later than the old one. The user store
    /// is not consulted: whatever the old token asserted is carried over.
    ///
    /// # Errors
    ///
    /// Same as [`verify`](Self::verify); an expired token cannot be refreshed.
    pub fn refresh(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.verify(token)?;
        let previous_exp = claims.exp.unwrap_or_default();

        let renewed_exp = self
            .clock
            .now()
            .timestamp()
            .saturating_add(self.default_ttl.num_seconds());
        self.sign(claims, renewed_exp.max(previous_exp.saturating_add(1)))
    }

    /// Decodes claims without checking the signature or expiry.
    ///
    /// For diagnostics only: nothing returned here may be trusted for authorization.
    pub fn inspect(&self, token: &str) -> Result<Claims, TokenError> {
        inspect(token)
    }

    fn sign(&self, mut claims: Claims, exp: i64) -> Result<String, TokenError> {
        claims.fold_registered();
        claims.exp = Some(exp);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

impl fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("algorithm", &self.algorithm)
            .field("default_ttl", &self.default_ttl)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Decodes a token's claims without any secret.
///
/// The result is untrusted; use [`TokenAuthenticator::verify`] before acting on it.
pub fn inspect(token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_aud = false;

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "Token could not be decoded");
            TokenError::InvalidSignature
        })
}

fn parse_hmac_algorithm(name: &str) -> Result<Algorithm, TokenError> {
    match name.trim().parse::<Algorithm>() {
        Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(algorithm),
        _ => Err(TokenError::UnsupportedAlgorithm(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::DateTime;
    use serde_json::json;

    const SECRET: &str = "test-secret-key-at-least-32-characters-long";
    const START: i64 = 1_700_000_000;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new(SECRET, "HS256", 30)
    }

    fn setup() -> (TokenAuthenticator, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(DateTime::from_timestamp(START, 0).unwrap()));
        let authenticator =
            TokenAuthenticator::with_clock(&get_test_jwt_config(), clock.clone()).unwrap();
        (authenticator, clock)
    }

    fn alice() -> Claims {
        Claims::new()
            .with_subject("42")
            .with_username("alice")
            .with_email("alice@example.com")
    }

    fn flip_signature(token: &str) -> String {
        let (signed, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        format!("{}.{}", signed, chars.into_iter().collect::<String>())
    }

    #[test]
    fn test_issue_and_verify() {
        let (authenticator, _) = setup();

        let token = authenticator.issue(alice(), None).unwrap();
        let claims = authenticator.verify(&token).unwrap();

        assert_eq!(claims.subject(), Some("42"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert_eq!(claims.exp, Some(START + 30 * 60));
        assert_eq!(claims.without_expiry(), alice());
    }

    #[test]
    fn test_explicit_ttl_overrides_default() {
        let (authenticator, _) = setup();

        let token = authenticator
            .issue(alice(), Some(Duration::minutes(5)))
            .unwrap();
        let claims = authenticator.verify(&token).unwrap();

        assert_eq!(claims.exp, Some(START + 5 * 60));
    }

    #[test]
    fn test_caller_supplied_exp_is_overwritten() {
        let (authenticator, _) = setup();
        let mut claims = alice();
        claims.exp = Some(1);
        claims.extra.insert("exp".to_string(), json!(2));

        let token = authenticator.issue(claims, None).unwrap();
        let verified = authenticator.verify(&token).unwrap();

        assert_eq!(verified.exp, Some(START + 30 * 60));
        assert!(!verified.extra.contains_key("exp"));
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let (authenticator, _) = setup();

        for ttl in [Duration::zero(), Duration::seconds(-10), Duration::milliseconds(500)] {
            let result = authenticator.issue(alice(), Some(ttl));
            assert!(matches!(result, Err(TokenError::Encoding(_))));
        }
    }

    #[test]
    fn test_issue_is_deterministic() {
        let (authenticator, _) = setup();

        let first = authenticator.issue(alice(), None).unwrap();
        let second = authenticator.issue(alice(), None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_token_expires_after_ttl() {
        let (authenticator, clock) = setup();
        let token = authenticator
            .issue(alice(), Some(Duration::minutes(30)))
            .unwrap();

        clock.advance(Duration::minutes(29));
        assert!(authenticator.verify(&token).is_ok());

        clock.advance(Duration::minutes(2));
        assert_eq!(authenticator.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_expired_exactly_at_exp() {
        let (authenticator, clock) = setup();
        let token = authenticator
            .issue(alice(), Some(Duration::seconds(60)))
            .unwrap();

        clock.advance(Duration::seconds(59));
        assert!(authenticator.verify(&token).is_ok());

        clock.advance(Duration::seconds(1));
        assert_eq!(authenticator.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let (authenticator, _) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        let tampered = flip_signature(&token);

        assert_ne!(tampered, token);
        assert_eq!(
            authenticator.verify(&tampered),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_expired_token_reports_signature() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();
        clock.advance(Duration::hours(2));

        assert_eq!(
            authenticator.verify(&flip_signature(&token)),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        let other = TokenAuthenticator::with_clock(
            &JwtConfig::new("different-secret-key-at-least-32-characters", "HS256", 30),
            clock,
        )
        .unwrap();

        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_wrong_algorithm_rejected() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        let other =
            TokenAuthenticator::with_clock(&JwtConfig::new(SECRET, "HS512", 30), clock).unwrap();

        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let (authenticator, _) = setup();

        for token in [
            "",
            "invalid-token",
            "not.enough",
            "too.many.parts.here.extra",
            "!!!.invalid.chars",
            "header.payload.",
            ".payload.signature",
        ] {
            assert_eq!(
                authenticator.verify(token),
                Err(TokenError::InvalidSignature),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_token_without_exp_rejected() {
        let (authenticator, _) = setup();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "42", "username": "alice" }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            authenticator.verify(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_is_idempotent() {
        let (authenticator, _) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        let first = authenticator.verify(&token).unwrap();
        let second = authenticator.verify(&token).unwrap();
        let third = authenticator.verify(&token).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_extension_claims_survive_round_trip() {
        let (authenticator, _) = setup();
        let mut claims = alice();
        claims.insert("plan", "pro").unwrap();

        let token = authenticator.issue(claims, None).unwrap();
        let verified = authenticator.verify(&token).unwrap();

        assert_eq!(verified.extra.get("plan"), Some(&json!("pro")));
    }

    #[test]
    fn test_refresh_extends_expiry() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();
        let original = authenticator.verify(&token).unwrap();

        clock.advance(Duration::minutes(10));
        let refreshed = authenticator.refresh(&token).unwrap();
        let renewed = authenticator.verify(&refreshed).unwrap();

        assert_ne!(refreshed, token);
        assert_eq!(renewed.without_expiry(), alice());
        assert_eq!(renewed.exp, Some(START + 40 * 60));
        assert!(renewed.exp > original.exp);
    }

    #[test]
    fn test_refresh_at_issue_instant_still_moves_exp_forward() {
        let (authenticator, _) = setup();
        let token = authenticator.issue(alice(), None).unwrap();
        let original = authenticator.verify(&token).unwrap();

        let refreshed = authenticator.refresh(&token).unwrap();
        let renewed = authenticator.verify(&refreshed).unwrap();

        assert!(renewed.exp > original.exp);
    }

    #[test]
    fn test_refresh_leaves_original_untouched() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        clock.advance(Duration::minutes(5));
        authenticator.refresh(&token).unwrap();

        let original = authenticator.verify(&token).unwrap();
        assert_eq!(original.exp, Some(START + 30 * 60));
    }

    #[test]
    fn test_refresh_expired_token_fails() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        clock.advance(Duration::minutes(31));

        assert_eq!(authenticator.refresh(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_refresh_tampered_token_fails() {
        let (authenticator, _) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        assert_eq!(
            authenticator.refresh(&flip_signature(&token)),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_inspect_reads_expired_token_without_secret() {
        let (authenticator, clock) = setup();
        let token = authenticator.issue(alice(), None).unwrap();
        clock.advance(Duration::days(1));

        let claims = inspect(&token).unwrap();

        assert_eq!(claims.without_expiry(), alice());
        assert_eq!(claims.exp, Some(START + 30 * 60));
        assert_eq!(authenticator.inspect(&token).unwrap(), claims);
    }

    #[test]
    fn test_inspect_malformed_token() {
        assert_eq!(inspect("garbage"), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_unsupported_algorithms() {
        for algorithm in ["RS256", "ES256", "none", "HS999", ""] {
            let result = TokenAuthenticator::new(&JwtConfig::new(SECRET, algorithm, 30));
            assert_eq!(
                result.err(),
                Some(TokenError::UnsupportedAlgorithm(algorithm.to_string()))
            );
        }
    }

    #[test]
    fn test_invalid_default_lifetime_rejected_at_construction() {
        for minutes in [0, -5, i64::MIN, 200_000_000_000_000, i64::MAX] {
            let result = TokenAuthenticator::new(&JwtConfig::new(SECRET, "HS256", minutes));
            assert_eq!(result.err(), Some(TokenError::InvalidLifetime(minutes)));
        }
    }

    #[test]
    fn test_large_default_lifetime_accepted() {
        // Roughly a century.
        let config = JwtConfig::new(SECRET, "HS256", 60 * 24 * 365 * 100);
        let clock = Arc::new(ManualClock::new(DateTime::from_timestamp(START, 0).unwrap()));
        let authenticator = TokenAuthenticator::with_clock(&config, clock).unwrap();

        let token = authenticator.issue(alice(), None).unwrap();
        let claims = authenticator.verify(&token).unwrap();
        assert_eq!(claims.exp, Some(START + 60 * 60 * 24 * 365 * 100));
    }

    #[test]
    fn test_well_known_names_via_insert_round_trip() {
        let (authenticator, _) = setup();

        for key in crate::claims::STRING_CLAIMS {
            let mut claims = alice();
            claims.insert(key, "x").unwrap();

            let token = authenticator.issue(claims.clone(), None).unwrap();
            let verified = authenticator.verify(&token).unwrap();
            assert_eq!(verified.without_expiry(), claims, "claim {key}");
            assert!(verified.extra.is_empty(), "claim {key}");

            let inspected = authenticator.inspect(&token).unwrap();
            assert_eq!(inspected, verified, "claim {key}");
        }
    }

    #[test]
    fn test_well_known_names_in_extra_are_not_duplicated() {
        let (authenticator, _) = setup();

        for key in crate::claims::STRING_CLAIMS {
            let mut claims = Claims::new().with_subject("42");
            claims.extra.insert(key.to_string(), json!("x"));

            let token = authenticator.issue(claims, None).unwrap();
            let verified = authenticator.verify(&token).unwrap();
            assert!(verified.extra.is_empty(), "claim {key}");
            assert!(authenticator.refresh(&token).is_ok(), "claim {key}");
        }
    }

    #[test]
    fn test_supported_algorithms() {
        for algorithm in ["HS256", "HS384", "HS512"] {
            let authenticator =
                TokenAuthenticator::new(&JwtConfig::new(SECRET, algorithm, 30)).unwrap();
            let token = authenticator.issue(alice(), None).unwrap();
            assert!(authenticator.verify(&token).is_ok());
        }
    }

    #[test]
    fn test_header_names_algorithm() {
        let (authenticator, _) = setup();
        let token = authenticator.issue(alice(), None).unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(authenticator.algorithm(), Algorithm::HS256);
    }
}
