use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{bearer_token, AuthGuard},
        service::auth::token::TokenSigner,
    },
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

mod require;

fn signer() -> TokenSigner {
    TokenSigner::new("test-secret", Duration::hours(1))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Signs a token for a stored user and records its session row.
async fn login(
    db: &sea_orm::DatabaseConnection,
    user: &entity::user::Model,
) -> Result<String, AppError> {
    let domain = UserRepository::new(db)
        .find_by_id(&user.id)
        .await?
        .expect("user exists");
    let (token, _) = signer().issue(&domain)?;
    factory::access_token::AccessTokenFactory::new(db, user)
        .token(&token)
        .build()
        .await?;

    Ok(token)
}
