use crate::features::access::Role;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::Request, middleware::Next, Router};

pub fn admin() -> AuthenticatedUser {
    AuthenticatedUser::new(1, Role::Admin)
}

pub fn administrative() -> AuthenticatedUser {
    AuthenticatedUser::new(2, Role::Administrative)
}

pub fn commercial() -> AuthenticatedUser {
    AuthenticatedUser::new(8, Role::Commercial)
}

pub fn quality_officer(user_id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(user_id, Role::QualityOfficer)
}

/// Wrap `router` so every request is authenticated as `user`
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}
