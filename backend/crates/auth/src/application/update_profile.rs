//! Update Profile Use Case
//!
//! Partial update of the authenticated user's profile.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Update profile input. `None` and empty strings both mean "leave
/// unchanged" (see `User::apply_profile`).
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user: User, input: UpdateProfileInput) -> AuthResult<User> {
        let mut user = user;
        user.apply_profile(input.name, input.bio, input.location);

        self.repo.update(&user).await?;

        tracing::debug!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
