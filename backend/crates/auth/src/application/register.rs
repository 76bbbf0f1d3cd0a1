//! Register Use Case
//!
//! Creates a new user account and issues an access token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let email = Email::new(&input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Friendly pre-check; the unique index still catches concurrent
        // registrations in `create`
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password
            .hash(self.config.bcrypt_cost)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(name, email, password_hash);
        self.repo.create(&user).await?;

        let token = token::issue(&user.user_id, &self.config);

        tracing::info!(
            user_id = %user.user_id,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}
