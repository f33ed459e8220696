/**
 * Authentication Middleware
 *
 * The request gate for protected routes. Two middleware functions wrap the
 * Basic and Bearer verifiers; each request passing through a gate reaches
 * exactly one terminal state: the authenticated user is attached to the
 * request extensions and the inner handler runs, or a uniform rejection is
 * returned and nothing downstream executes.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::users::User;
use crate::auth::{verify_basic, verify_bearer};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Authenticated identity attached to the request by a gate
///
/// For the bearer flow the presented token is carried along so handlers can
/// echo it back without re-reading the header.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: Option<String>,
}

fn authorization_header(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Basic-auth gate
///
/// Verifies `Authorization: Basic <base64 username:password>` against the
/// credential store and attaches the authenticated user to the request.
pub async fn basic_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = authorization_header(&request);
    let user = verify_basic(&state.pool, header).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user,
        token: None,
    });

    Ok(next.run(request).await)
}

/// Bearer-auth gate
///
/// Verifies `Authorization: Bearer <token>` and attaches the authenticated
/// user and the presented token to the request.
pub async fn bearer_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = authorization_header(&request);
    let (user, token) = verify_bearer(&state.pool, &state.token_secret, header).await?;

    request.extensions_mut().insert(AuthenticatedUser {
        user,
        token: Some(token),
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on gated routes. Rejects with the uniform
/// unauthorized response if no gate ran for the route, so a wiring mistake
/// fails closed.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                AuthError::MissingCredentials
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request as HttpRequest;
    use crate::server::config::DatabaseConfig;
    use crate::server::state::AppState;

    async fn test_state() -> AppState {
        let pool = DatabaseConfig::Memory.connect().await.unwrap();
        crate::database::apply_schema(&pool).await.unwrap();
        AppState {
            pool,
            token_secret: "test-signing-secret".to_string(),
        }
    }

    fn sample_user() -> User {
        User {
            id: "id".into(),
            username: "alice".into(),
            password_hash: "$2b$10$irrelevant".into(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[tokio::test]
    async fn extractor_returns_attached_identity() {
        let state = test_state().await;
        let (mut parts, _) = HttpRequest::builder()
            .uri("http://localhost/secret")
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(AuthenticatedUser {
            user: sample_user(),
            token: Some("tok".into()),
        });

        let AuthUser(auth) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(auth.user.username, "alice");
        assert_eq!(auth.token.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn extractor_fails_closed_without_a_gate() {
        let state = test_state().await;
        let (mut parts, _) = HttpRequest::builder()
            .uri("http://localhost/secret")
            .body(())
            .unwrap()
            .into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }
}
