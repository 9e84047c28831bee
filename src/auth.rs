use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{definitions::responses::B2AuthData, error::B2Error, util::write_lock_arc::WriteLockArc};

/// `AuthorizationState` plus the generation counter that makes
/// re-authorization single-flight.
///
/// Readers snapshot `(data, generation)` together under
/// [`WriteLockArc`]'s lock-free read path. A re-authorizing writer bumps
/// `generation` only after installing the fresh token, so a request that
/// observed generation `g` and then fails with a token-expiry code can tell
/// whether someone else already refreshed the token out from under it.
#[derive(Debug, Clone)]
pub(crate) struct AuthState {
    pub data: B2AuthData,
    pub generation: u64,
}

/// Owns the account's authorization token and coalesces concurrent
/// re-authorization attempts onto a single in-flight call.
#[derive(Debug, Clone)]
pub(crate) struct AuthManager {
    state: WriteLockArc<AuthState>,
    reauth_lock: Arc<Mutex<()>>,
    key_id: Arc<str>,
    application_key: Arc<str>,
}

impl AuthManager {
    pub fn new(data: B2AuthData, key_id: Arc<str>, application_key: Arc<str>) -> Self {
        Self {
            state: WriteLockArc::new(AuthState { data, generation: 0 }),
            reauth_lock: Arc::new(Mutex::new(())),
            key_id,
            application_key,
        }
    }

    /// Snapshot of the current authorization data and its generation.
    pub fn snapshot(&self) -> (B2AuthData, u64) {
        let state = &*self.state;
        (state.data.clone(), state.generation)
    }

    pub fn token(&self) -> String {
        self.state.data.authorization_token.clone()
    }

    /// Re-authorizes unless another caller already did so after
    /// `observed_generation` was read — in which case this call is a no-op
    /// and the caller should simply retry with the now-current token.
    pub async fn reauthorize_after(
        &self,
        observed_generation: u64,
        authorize: impl std::future::Future<Output = Result<B2AuthData, B2Error>>,
    ) -> Result<(), B2Error> {
        let _guard = self.reauth_lock.lock().await;

        if self.state.generation != observed_generation {
            // Someone else already refreshed the token while we waited for
            // the lock; nothing to do.
            return Ok(());
        }

        let fresh = authorize.await?;
        let next_generation = self.state.generation + 1;

        self.state
            .set(AuthState {
                data: fresh,
                generation: next_generation,
            })
            .await;

        Ok(())
    }

    /// Installs fresh authorization data unconditionally, bumping the
    /// generation regardless of what any in-flight reader observed. Used for
    /// externally-triggered re-authorization (an explicit call, or a
    /// scheduled pre-expiry refresh) rather than the single-flight path
    /// `reauthorize_after` takes in response to a failed request.
    pub async fn force_set(&self, data: B2AuthData) {
        let _guard = self.reauth_lock.lock().await;
        let next_generation = self.state.generation + 1;

        self.state
            .set(AuthState {
                data,
                generation: next_generation,
            })
            .await;
    }

    pub fn key_id(&self) -> Arc<str> {
        self.key_id.clone()
    }

    pub fn application_key(&self) -> Arc<str> {
        self.application_key.clone()
    }
}
