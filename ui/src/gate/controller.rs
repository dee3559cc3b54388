use super::credential::Credential;
use super::error::GateError;
use super::lockout::{GateEvent, GatePhase, GateState, LockoutPolicy, Transition};
use super::session::SessionStore;

/// The access gate as its container sees it: lockout state, the persisted
/// session flag, and whether the protected view may be shown.
#[derive(Debug)]
pub struct Gate<S> {
    state: GateState,
    credential: Credential,
    policy: LockoutPolicy,
    store: S,
    authenticated: bool,
}

impl<S: SessionStore> Gate<S> {
    /// Build the gate, reading the session flag once.
    pub fn open(store: S) -> Self {
        let authenticated = store.load();
        Self {
            state: GateState::default(),
            credential: Credential::default(),
            policy: LockoutPolicy::default(),
            store,
            authenticated,
        }
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_policy(mut self, policy: LockoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn edit(&mut self, code: impl Into<String>) -> Transition {
        self.dispatch(GateEvent::Edit(code.into()))
    }

    /// Evaluate the current field. Persists the session on a match.
    pub fn submit(&mut self) -> Transition {
        let transition = self.dispatch(GateEvent::Submit);
        if transition == Transition::Granted {
            self.store.save(true);
            self.authenticated = true;
        }
        transition
    }

    pub fn tick(&mut self) -> Transition {
        self.dispatch(GateEvent::Tick)
    }

    /// Drop the persisted session and show the gate again
    pub fn logout(&mut self) -> Transition {
        self.store.clear();
        self.authenticated = false;
        self.dispatch(GateEvent::Reset)
    }

    fn dispatch(&mut self, event: GateEvent) -> Transition {
        self.state.apply(event, &self.credential, &self.policy)
    }
}

impl<S> Gate<S> {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn phase(&self) -> GatePhase {
        self.state.phase()
    }

    #[cfg(test)]
    pub(crate) fn policy(&self) -> &LockoutPolicy {
        &self.policy
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.error().map(GateError::to_string)
    }

    pub fn lockout_notice(&self) -> Option<String> {
        self.state.lockout_notice().map(|e| e.to_string())
    }

    /// False while locked or while the field is empty
    pub fn can_submit(&self) -> bool {
        !self.state.is_locked() && !self.state.submitted_code().is_empty()
    }

    /// `Some(epoch)` while a lockout runs. A change of key means the
    /// countdown timer must be restarted, `None` means it must stop.
    pub fn countdown_key(&self) -> Option<u32> {
        self.state
            .is_locked()
            .then(|| self.state.lockout_epoch())
    }
}
