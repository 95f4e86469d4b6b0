mod storage;
pub use storage::{StoreError, USER_KEY, UserStore};

mod state;
pub use state::AuthState;

use scribe_common::CurrentUser;

/// Result of attempting to restore a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreResult {
    /// A stored user was found
    Restored,
    /// Nothing stored; the configured dev user stands in
    DevUser,
    /// No saved session was found
    NoSession,
    /// Something was stored but could not be read, and has been cleared
    SessionInvalid,
}

/// Work out who is signed in when the app starts.
pub fn restore_session(store: &UserStore, dev_user: Option<&CurrentUser>) -> (AuthState, RestoreResult) {
    match store.load() {
        Ok(Some(user)) => {
            tracing::debug!(user = %user.id, "session restored");
            let mut state = AuthState::default();
            state.set_authenticated(user);
            (state, RestoreResult::Restored)
        }
        Ok(None) => match dev_user {
            Some(user) => {
                tracing::info!(user = %user.id, "no stored session, using dev user");
                let mut state = AuthState::default();
                state.set_authenticated(user.clone());
                (state, RestoreResult::DevUser)
            }
            None => (AuthState::default(), RestoreResult::NoSession),
        },
        Err(StoreError::Invalid(e)) => {
            tracing::warn!("Session restore failed, clearing stored user: {e}");
            if let Err(e) = store.clear() {
                tracing::warn!("could not clear stored user: {e}");
            }
            (AuthState::default(), RestoreResult::SessionInvalid)
        }
        Err(e) => {
            tracing::warn!("Session restore failed: {e}");
            (AuthState::default(), RestoreResult::NoSession)
        }
    }
}

/// Forget the stored user and mark the app signed out.
pub fn sign_out(store: &UserStore, state: &mut AuthState) {
    if let Err(e) = store.clear() {
        tracing::warn!("could not clear stored user: {e}");
    }
    state.clear();
}

#[cfg(all(test, not(all(target_family = "wasm", target_os = "unknown"))))]
mod tests {
    use super::*;

    // One test, since the native store is process-wide.
    #[test]
    fn test_restore_paths() {
        let store = UserStore::new();
        let dev = CurrentUser::new(99u64);

        store.clear().unwrap();
        let (state, result) = restore_session(&store, None);
        assert_eq!(result, RestoreResult::NoSession);
        assert!(!state.is_authenticated());

        let (state, result) = restore_session(&store, Some(&dev));
        assert_eq!(result, RestoreResult::DevUser);
        assert_eq!(state.user(), Some(&dev));

        let mut user = CurrentUser::new(3u64);
        user.name = Some("ada".into());
        store.save(&user).unwrap();
        let (mut state, result) = restore_session(&store, Some(&dev));
        assert_eq!(result, RestoreResult::Restored);
        assert_eq!(state.user(), Some(&user));

        sign_out(&store, &mut state);
        assert!(!state.is_authenticated());
        assert!(store.load().unwrap().is_none());

        store.write_raw_for_test("{not json");
        let (state, result) = restore_session(&store, None);
        assert_eq!(result, RestoreResult::SessionInvalid);
        assert!(!state.is_authenticated());
        assert!(store.load().unwrap().is_none());
    }
}
