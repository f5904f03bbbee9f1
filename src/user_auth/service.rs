use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use utoipa::ToSchema;
use validator::Validate;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user_id as string)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at
}

impl Claims {
    /// The authenticated caller's user id
    pub fn user_id(&self) -> i64 {
        self.sub.parse().unwrap_or_default()
    }
}

/// User Registration Request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "user1")]
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[schema(example = "user1@example.com")]
    #[validate(email)]
    pub email: String,
    #[schema(example = "password123")]
    #[validate(length(min = 8))]
    pub password: String,
}

/// User Login Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "user1@example.com")]
    pub email: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Auth Response (JWT)
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

pub struct UserAuthService {
    db: PgPool,
    jwt_secret: String,
}

impl UserAuthService {
    pub fn new(db: PgPool, jwt_secret: String) -> Self {
        Self { db, jwt_secret }
    }

    /// Register a new user
    pub async fn register(&self, req: RegisterRequest) -> Result<i64> {
        // 1. Hash password
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?
            .to_string();

        // 2. Insert into DB
        let row = sqlx::query(
            r#"INSERT INTO users_tb (username, email, password_hash)
               VALUES ($1, $2, $3)
               RETURNING user_id"#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&password_hash)
        .fetch_one(&self.db)
        .await
        .context("Failed to insert user")?;

        Ok(row.get("user_id"))
    }

    /// Login user and issue JWT
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        // 1. Find user by email
        let row = sqlx::query(
            r#"SELECT user_id, username, email, password_hash
               FROM users_tb WHERE email = $1"#,
        )
        .bind(&req.email)
        .fetch_optional(&self.db)
        .await
        .context("DB query failed")?
        .ok_or_else(|| anyhow::anyhow!("Invalid email or password"))?;

        let user_id: i64 = row.get("user_id");
        let username: String = row.get("username");
        let email: String = row.get("email");
        let password_hash_str: String = row.get("password_hash");

        // 2. Verify password
        let parsed_hash = PasswordHash::new(&password_hash_str)
            .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;

        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .map_err(|_| anyhow::anyhow!("Invalid email or password"))?;

        // 3. Generate JWT
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(24))
            .expect("valid timestamp")
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration as usize,
            iat: Utc::now().timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .context("Failed to generate token")?;

        Ok(AuthResponse {
            token,
            user_id,
            username,
            email,
        })
    }

    /// Verify JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_user_id_parse() {
        let claims = Claims {
            sub: "42".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(claims.user_id(), 42);

        let bad = Claims {
            sub: "not-a-number".to_string(),
            exp: 0,
            iat: 0,
        };
        assert_eq!(bad.user_id(), 0);
    }

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "user1".to_string(),
            email: "user1@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            username: "user1".to_string(),
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            username: "user1".to_string(),
            email: "user1@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }
}
