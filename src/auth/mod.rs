pub mod password;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AuthConfig;

/// Claims carried by every session token. `sub` is the employee email;
/// `created` is restamped on each refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub created: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),

    #[error("Token rejected: {0}")]
    Decode(jsonwebtoken::errors::Error),
}

/// Stateless HS512 signer/verifier. Owns the derived keys; cheap to clone.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_secs: config.jwt_expiration_secs,
        }
    }

    /// Mint a token for an authenticated employee.
    pub fn issue(&self, email: &str, role: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            role: role.to_string(),
            created: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(TokenError::Encode)
    }

    /// Verify signature and structure and give back the claims. Expiry is
    /// NOT checked here; a well-formed expired token still decodes.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;
        validation.validate_exp = false;
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Decode)
    }

    /// Claims of a token that decodes AND whose expiration lies strictly in
    /// the future; `None` otherwise. Undecodable tokens are invalid, full
    /// stop.
    pub fn valid_claims(&self, token: &str) -> Option<Claims> {
        self.decode(token)
            .ok()
            .filter(|claims| claims.exp > Utc::now().timestamp())
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.valid_claims(token).is_some()
    }

    /// Re-sign the claims of a decodable token with a fresh `created` stamp
    /// and a new expiration window. Callers that care about expiry gate on
    /// `is_valid` first.
    pub fn refresh(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.decode(token)?;
        let now = Utc::now().timestamp();
        let refreshed = Claims {
            sub: claims.sub,
            role: claims.role,
            created: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS512), &refreshed, &self.encoding_key)
            .map_err(TokenError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_ttl(secret: &str, ttl_secs: i64) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_expiration_secs: ttl_secs,
        })
    }

    #[test]
    fn issue_then_decode_round_trips_claims() {
        let service = service_with_ttl("test-secret", 3600);
        let before = Utc::now().timestamp();
        let token = service.issue("ana@empresa.com", "ROLE_USUARIO").unwrap();
        let claims = service.decode(&token).unwrap();

        assert_eq!(claims.sub, "ana@empresa.com");
        assert_eq!(claims.role, "ROLE_USUARIO");
        assert!(claims.created >= before);
        assert_eq!(claims.exp, claims.created + 3600);
    }

    #[test]
    fn fresh_token_is_valid() {
        let service = service_with_ttl("test-secret", 3600);
        let token = service.issue("ana@empresa.com", "ROLE_USUARIO").unwrap();
        assert!(service.is_valid(&token));
    }

    #[test]
    fn expired_token_decodes_but_is_not_valid() {
        let service = service_with_ttl("test-secret", -10);
        let token = service.issue("ana@empresa.com", "ROLE_USUARIO").unwrap();

        assert!(service.decode(&token).is_ok());
        assert!(!service.is_valid(&token));
    }

    #[test]
    fn garbage_is_invalid_not_a_panic() {
        let service = service_with_ttl("test-secret", 3600);
        assert!(!service.is_valid("garbage"));
        assert!(!service.is_valid(""));
        assert!(!service.is_valid("aaa.bbb.ccc"));
        assert!(service.decode("garbage").is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issuer = service_with_ttl("secret-a", 3600);
        let verifier = service_with_ttl("secret-b", 3600);
        let token = issuer.issue("ana@empresa.com", "ROLE_ADMIN").unwrap();

        assert!(verifier.decode(&token).is_err());
        assert!(!verifier.is_valid(&token));
    }

    #[test]
    fn token_without_exp_is_rejected() {
        #[derive(Serialize)]
        struct NoExp {
            sub: String,
            role: String,
            created: i64,
        }
        let service = service_with_ttl("test-secret", 3600);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &NoExp {
                sub: "ana@empresa.com".to_string(),
                role: "ROLE_USUARIO".to_string(),
                created: Utc::now().timestamp(),
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(service.decode(&token).is_err());
        assert!(!service.is_valid(&token));
    }

    #[test]
    fn refresh_extends_expiration_and_keeps_identity() {
        // issue with a tiny window, refresh against the real one: the new
        // expiration must land strictly later than the old
        let issuer = service_with_ttl("shared-secret", 10);
        let refresher = service_with_ttl("shared-secret", 3600);

        let token = issuer.issue("ana@empresa.com", "ROLE_USUARIO").unwrap();
        let old_claims = issuer.decode(&token).unwrap();

        let refreshed = refresher.refresh(&token).unwrap();
        let new_claims = refresher.decode(&refreshed).unwrap();

        assert_eq!(new_claims.sub, "ana@empresa.com");
        assert_eq!(new_claims.role, "ROLE_USUARIO");
        assert!(new_claims.exp > old_claims.exp);
        assert!(new_claims.created >= old_claims.created);
    }

    #[test]
    fn refresh_works_on_expired_but_wellformed_tokens() {
        let issuer = service_with_ttl("shared-secret", -10);
        let refresher = service_with_ttl("shared-secret", 3600);

        let expired = issuer.issue("ana@empresa.com", "ROLE_USUARIO").unwrap();
        assert!(!issuer.is_valid(&expired));

        let refreshed = refresher.refresh(&expired).unwrap();
        assert!(refresher.is_valid(&refreshed));
    }

    #[test]
    fn refresh_rejects_garbage() {
        let service = service_with_ttl("test-secret", 3600);
        assert!(service.refresh("not-a-token").is_err());
        assert!(service.refresh("").is_err());
    }
}
