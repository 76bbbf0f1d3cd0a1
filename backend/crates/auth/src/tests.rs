//! Unit tests for the auth crate
//!
//! Use-case tests run against the in-memory repository.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::{
        LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UpdateProfileInput,
        UpdateProfileUseCase,
    };
    use crate::domain::repository::UserRepository;
    use crate::error::AuthError;
    use crate::infra::memory::MemoryAuthRepository;

    fn harness() -> (Arc<MemoryAuthRepository>, Arc<AuthConfig>) {
        (
            Arc::new(MemoryAuthRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    fn register_input(name: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_user_and_token() {
        let (repo, config) = harness();
        let use_case = RegisterUseCase::new(repo.clone(), config.clone());

        let output = use_case
            .execute(register_input("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(output.user.name, "Alice");
        assert_eq!(output.user.email.as_str(), "a@x.com");
        assert!(!output.token.is_empty());

        let token_user = crate::application::token::verify(&output.token, &config).unwrap();
        assert_eq!(token_user, output.user.user_id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_case_insensitive() {
        let (repo, config) = harness();
        let use_case = RegisterUseCase::new(repo.clone(), config.clone());

        use_case
            .execute(register_input("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let result = use_case
            .execute(register_input("Mallory", "A@X.com", "secret2"))
            .await;

        assert!(matches!(result, Err(AuthError::DuplicateEmail)));

        // Exactly one stored user
        let stored = repo
            .find_by_email(&crate::domain::value_object::email::Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Alice");
    }

    #[tokio::test]
    async fn test_register_rejects_missing_fields() {
        let (repo, config) = harness();
        let use_case = RegisterUseCase::new(repo, config);

        let result = use_case
            .execute(register_input("  ", "a@x.com", "secret1"))
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));

        let result = use_case
            .execute(register_input("Alice", "not-an-email", "secret1"))
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));

        // Password below the 6-character minimum
        let result = use_case
            .execute(register_input("Alice", "a@x.com", "short"))
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_after_register() {
        let (repo, config) = harness();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let login = LoginUseCase::new(repo.clone(), config.clone());

        let output = login
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.email.as_str(), "a@x.com");
        assert!(crate::application::token::verify(&output.token, &config).is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (repo, config) = harness();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let result = LoginUseCase::new(repo, config)
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_indistinguishable() {
        let (repo, config) = harness();

        let result = LoginUseCase::new(repo, config)
            .execute(LoginInput {
                email: "nobody@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;

        // Same error as a wrong password - no account enumeration
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_update_profile_partial() {
        let (repo, config) = harness();
        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let use_case = UpdateProfileUseCase::new(repo.clone());

        let updated = use_case
            .execute(
                registered.user.clone(),
                UpdateProfileInput {
                    name: None,
                    bio: Some("Trader".to_string()),
                    location: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.bio.as_deref(), Some("Trader"));
        assert_eq!(updated.email.as_str(), "a@x.com");

        // Persisted
        let stored = repo.find_by_id(&updated.user_id).await.unwrap().unwrap();
        assert_eq!(stored.bio.as_deref(), Some("Trader"));
    }

    #[tokio::test]
    async fn test_update_profile_empty_string_cannot_blank_field() {
        // Known quirk, preserved deliberately: sending "" leaves the
        // stored value untouched
        let (repo, config) = harness();
        let registered = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let use_case = UpdateProfileUseCase::new(repo.clone());

        let with_bio = use_case
            .execute(
                registered.user,
                UpdateProfileInput {
                    name: None,
                    bio: Some("Trader".to_string()),
                    location: None,
                },
            )
            .await
            .unwrap();

        let blanked = use_case
            .execute(
                with_bio,
                UpdateProfileInput {
                    name: Some("".to_string()),
                    bio: Some("".to_string()),
                    location: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(blanked.name, "Alice");
        assert_eq!(blanked.bio.as_deref(), Some("Trader"));
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{"name":"Alice","email":"a@x.com","password":"secret1"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "Alice");
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn test_update_profile_request_omitted_fields() {
        let json = r#"{"bio":"Trader"}"#;
        let request: UpdateProfileRequest = serde_json::from_str(json).unwrap();

        assert!(request.name.is_none());
        assert_eq!(request.bio.as_deref(), Some("Trader"));
        assert!(request.location.is_none());
    }

    #[test]
    fn test_user_response_serialization_is_camel_case() {
        let response = UserResponse {
            id: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            bio: None,
            location: None,
            created_at: chrono::Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("createdAt"));
        assert!(!json.contains("password"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::DuplicateEmail, StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (
                AuthError::Validation("Name is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(AuthError::DuplicateEmail.to_string().contains("Email"));
        assert!(
            AuthError::InvalidCredentials
                .to_string()
                .contains("Invalid email or password")
        );
    }
}
