//! Login Use Case
//!
//! Authenticates against ReqRes, then resolves who the user is.

use std::sync::Arc;

use directory::store::UserRepository;
use platform::reqres::IdentityGateway;
use serde::Serialize;

use crate::domain::identity::{LoginUser, ReconciledIdentity};
use crate::error::{AuthError, AuthResult};

/// ReqRes user pages searched for a matching email
const SEARCHED_PAGES: [u32; 2] = [1, 2];

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginOutput {
    pub token: String,
    pub user: LoginUser,
}

/// Login use case
pub struct LoginUseCase<U, G>
where
    U: UserRepository,
    G: IdentityGateway,
{
    user_repo: Arc<U>,
    gateway: Arc<G>,
}

impl<U, G> LoginUseCase<U, G>
where
    U: UserRepository,
    G: IdentityGateway,
{
    pub fn new(user_repo: Arc<U>, gateway: Arc<G>) -> Self {
        Self { user_repo, gateway }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Before any network call
        self.gateway.ensure_configured()?;

        let token = self
            .gateway
            .authenticate(&input.email, &input.password)
            .await
            .map_err(AuthError::from)?;

        let identity = self.resolve(input.email).await;

        tracing::info!(source = %identity.source(), "User logged in via ReqRes");

        Ok(LoginOutput {
            token: token.token,
            user: identity.into_login_user(),
        })
    }

    /// Each step's failure is logged and the next step is tried
    async fn resolve(&self, email: String) -> ReconciledIdentity {
        match self.user_repo.find_by_email(&email).await {
            Ok(Some(user)) => return ReconciledIdentity::LocalMatch(user),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Local user lookup failed during login"),
        }

        for page in SEARCHED_PAGES {
            match self.gateway.list_users(page).await {
                Ok(users) => {
                    if let Some(remote) = users.into_iter().find(|u| u.email == email) {
                        return ReconciledIdentity::ExternalMatch(remote);
                    }
                }
                Err(e) => {
                    tracing::warn!(page, error = %e, "ReqRes user page lookup failed during login")
                }
            }
        }

        ReconciledIdentity::Fallback { email }
    }
}
