//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use bazaar_app::auth::{AuthError, Claims, TokenSigner};

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let claims = match authenticate(req, &state.app.tokens) {
        Ok(claims) => claims,
        Err(AuthError::MissingToken) => {
            res.render(StatusError::forbidden().brief("Access Denied"));

            return;
        }
        Err(error) => {
            error!("failed to verify bearer token: {error}");

            res.render(StatusError::unauthorized().brief("Invalid Token"));

            return;
        }
    };

    depot.insert_current_user(claims.into());

    ctrl.call_next(req, depot, res).await;
}

fn authenticate(req: &Request, tokens: &TokenSigner) -> Result<Claims, AuthError> {
    let token = extract_bearer_token(req).ok_or(AuthError::MissingToken)?;

    tokens.verify(token)
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
