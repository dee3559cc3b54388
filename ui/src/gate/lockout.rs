//! Failure counting and the timed lockout that follows repeated misses.
//!
//! Both user submissions and timer ticks go through [`GateState::apply`], so
//! the countdown and the form can never disagree about the lockout boundary.

use std::time::Duration;

use super::credential::{Credential, Verdict};
use super::error::GateError;

/// How many consecutive failures trigger a lockout, and for how long
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockoutPolicy {
    max_attempts: u32,
    lockout: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        // 3rd consecutive miss locks the form for 30 seconds
        Self {
            max_attempts: 3,
            lockout: Duration::from_secs(30),
        }
    }
}

impl LockoutPolicy {
    /// Create a custom lockout policy. A zero threshold is treated as 1.
    pub fn new(max_attempts: u32, lockout: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            lockout,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Lockout length in whole seconds, at least one tick
    pub fn lockout_secs(&self) -> u32 {
        u32::try_from(self.lockout.as_secs()).unwrap_or(u32::MAX).max(1)
    }

    pub fn locks_at(&self, failures: u32) -> bool {
        failures >= self.max_attempts
    }
}

/// The three shapes the gate can be in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Open,
    Counting(u32),
    Locked { remaining_secs: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    Edit(String),
    Submit,
    /// One second elapsed
    Tick,
    Reset,
}

/// What a single event did to the state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Edited,
    Granted,
    Rejected { failures: u32 },
    LockedOut { remaining_secs: u32 },
    /// Submission while locked, or a tick with no lockout running
    Ignored,
    Countdown { remaining_secs: u32 },
    Unlocked,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateState {
    submitted_code: String,
    error: Option<GateError>,
    failure_count: u32,
    is_locked: bool,
    remaining_lock_secs: u32,
    lockout_epoch: u32,
}

impl GateState {
    pub fn submitted_code(&self) -> &str {
        &self.submitted_code
    }

    /// The transient failure message, if the last submission missed
    pub fn error(&self) -> Option<&GateError> {
        self.error.as_ref()
    }

    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    pub fn remaining_lock_secs(&self) -> u32 {
        self.remaining_lock_secs
    }

    /// Increases once per fresh lockout
    pub fn lockout_epoch(&self) -> u32 {
        self.lockout_epoch
    }

    pub fn phase(&self) -> GatePhase {
        if self.is_locked {
            GatePhase::Locked {
                remaining_secs: self.remaining_lock_secs,
            }
        } else if self.failure_count > 0 {
            GatePhase::Counting(self.failure_count)
        } else {
            GatePhase::Open
        }
    }

    /// Notice shown for as long as the lockout runs
    pub fn lockout_notice(&self) -> Option<GateError> {
        self.is_locked.then_some(GateError::LockedOut {
            remaining_secs: self.remaining_lock_secs,
        })
    }

    pub fn apply(
        &mut self,
        event: GateEvent,
        credential: &Credential,
        policy: &LockoutPolicy,
    ) -> Transition {
        match event {
            GateEvent::Edit(code) => {
                self.submitted_code = code;
                Transition::Edited
            }
            GateEvent::Submit => self.submit(credential, policy),
            GateEvent::Tick => self.tick(),
            GateEvent::Reset => {
                // the epoch survives so a later lockout is still a new one
                let epoch = self.lockout_epoch;
                *self = Self {
                    lockout_epoch: epoch,
                    ..Self::default()
                };
                Transition::Reset
            }
        }
    }

    fn submit(&mut self, credential: &Credential, policy: &LockoutPolicy) -> Transition {
        if self.is_locked {
            return Transition::Ignored;
        }

        match credential.check(&self.submitted_code) {
            Verdict::Match => {
                let epoch = self.lockout_epoch;
                *self = Self {
                    lockout_epoch: epoch,
                    ..Self::default()
                };
                Transition::Granted
            }
            Verdict::NoMatch => {
                self.failure_count += 1;
                self.error = Some(GateError::InvalidCredential);
                self.submitted_code.clear();

                if policy.locks_at(self.failure_count) {
                    self.is_locked = true;
                    self.remaining_lock_secs = policy.lockout_secs();
                    self.lockout_epoch = self.lockout_epoch.wrapping_add(1);
                    Transition::LockedOut {
                        remaining_secs: self.remaining_lock_secs,
                    }
                } else {
                    Transition::Rejected {
                        failures: self.failure_count,
                    }
                }
            }
        }
    }

    fn tick(&mut self) -> Transition {
        if !self.is_locked {
            return Transition::Ignored;
        }

        self.remaining_lock_secs = self.remaining_lock_secs.saturating_sub(1);
        if self.remaining_lock_secs > 0 {
            return Transition::Countdown {
                remaining_secs: self.remaining_lock_secs,
            };
        }

        self.is_locked = false;
        self.failure_count = 0;
        self.error = None;
        Transition::Unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn submit(state: &mut GateState, code: &str) -> Transition {
        let policy = LockoutPolicy::default();
        state.apply(GateEvent::Edit(code.to_owned()), &Credential::DEMO, &policy);
        state.apply(GateEvent::Submit, &Credential::DEMO, &policy)
    }

    fn tick(state: &mut GateState) -> Transition {
        state.apply(GateEvent::Tick, &Credential::DEMO, &LockoutPolicy::default())
    }

    fn locked_state() -> GateState {
        let mut state = GateState::default();
        for _ in 0..3 {
            submit(&mut state, "wrong");
        }
        state
    }

    #[test]
    fn test_default_policy() {
        let policy = LockoutPolicy::default();

        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.lockout_secs(), 30);
        assert!(!policy.locks_at(2));
        assert!(policy.locks_at(3));
    }

    #[test]
    fn sub_second_window_still_counts_down_one_tick() {
        let policy = LockoutPolicy::new(3, Duration::from_millis(500));
        let mut state = GateState::default();

        for code in ["a", "b"] {
            state.apply(GateEvent::Edit(code.to_owned()), &Credential::DEMO, &policy);
            state.apply(GateEvent::Submit, &Credential::DEMO, &policy);
        }
        state.apply(GateEvent::Edit("c".to_owned()), &Credential::DEMO, &policy);
        let transition = state.apply(GateEvent::Submit, &Credential::DEMO, &policy);

        assert_eq!(transition, Transition::LockedOut { remaining_secs: 1 });
        assert_eq!(
            state.lockout_notice().map(|e| e.to_string()).as_deref(),
            Some("Too many attempts. Please wait 1 seconds before trying again.")
        );
        assert_eq!(
            state.apply(GateEvent::Tick, &Credential::DEMO, &policy),
            Transition::Unlocked
        );
    }

    #[test]
    fn zero_threshold_is_clamped() {
        let policy = LockoutPolicy::new(0, Duration::from_secs(0));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.lockout_secs(), 1);
    }

    #[test]
    fn rejection_counts_and_clears_field() {
        let mut state = GateState::default();

        assert_eq!(submit(&mut state, "wrong"), Transition::Rejected { failures: 1 });
        assert_eq!(state.failure_count(), 1);
        assert_eq!(state.error(), Some(&GateError::InvalidCredential));
        assert_eq!(state.submitted_code(), "");
        assert_eq!(state.phase(), GatePhase::Counting(1));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn match_before_lockout_resets(#[case] misses: usize) {
        let mut state = GateState::default();
        for _ in 0..misses {
            submit(&mut state, "nope");
        }

        assert_eq!(submit(&mut state, "DEMO2024"), Transition::Granted);
        assert_eq!(state.failure_count(), 0);
        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), GatePhase::Open);
    }

    #[test]
    fn third_miss_locks_not_fourth() {
        let mut state = GateState::default();

        assert_eq!(submit(&mut state, "a"), Transition::Rejected { failures: 1 });
        assert_eq!(submit(&mut state, "b"), Transition::Rejected { failures: 2 });
        assert!(!state.is_locked());
        assert_eq!(submit(&mut state, "c"), Transition::LockedOut { remaining_secs: 30 });

        assert!(state.is_locked());
        assert_eq!(state.remaining_lock_secs(), 30);
        assert_eq!(state.lockout_epoch(), 1);
        assert_eq!(state.phase(), GatePhase::Locked { remaining_secs: 30 });
        assert_eq!(
            state.lockout_notice(),
            Some(GateError::LockedOut { remaining_secs: 30 })
        );
    }

    #[test]
    fn submissions_are_inert_while_locked() {
        let mut state = locked_state();

        // even the right code is not evaluated
        assert_eq!(submit(&mut state, "DEMO2024"), Transition::Ignored);
        assert_eq!(submit(&mut state, "wrong"), Transition::Ignored);
        assert_eq!(state.failure_count(), 3);
        assert_eq!(state.remaining_lock_secs(), 30);
        // the field still takes input
        assert_eq!(state.submitted_code(), "wrong");
    }

    #[test]
    fn countdown_runs_to_zero_and_unlocks() {
        let mut state = locked_state();

        for expected in (1..30).rev() {
            assert_eq!(
                tick(&mut state),
                Transition::Countdown { remaining_secs: expected }
            );
            assert!(state.is_locked());
        }

        assert_eq!(tick(&mut state), Transition::Unlocked);
        assert!(!state.is_locked());
        assert_eq!(state.remaining_lock_secs(), 0);
        assert_eq!(state.failure_count(), 0);
        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), GatePhase::Open);
        assert_eq!(state.lockout_notice(), None);
    }

    #[test]
    fn stray_tick_is_ignored() {
        let mut state = GateState::default();
        submit(&mut state, "wrong");

        assert_eq!(tick(&mut state), Transition::Ignored);
        assert_eq!(state.failure_count(), 1);
        assert_eq!(state.remaining_lock_secs(), 0);
    }

    #[test]
    fn second_lockout_gets_new_epoch() {
        let mut state = locked_state();
        for _ in 0..30 {
            tick(&mut state);
        }
        for _ in 0..3 {
            submit(&mut state, "wrong");
        }

        assert!(state.is_locked());
        assert_eq!(state.remaining_lock_secs(), 30);
        assert_eq!(state.lockout_epoch(), 2);
    }

    #[test]
    fn reset_keeps_epoch() {
        let mut state = locked_state();
        let transition =
            state.apply(GateEvent::Reset, &Credential::DEMO, &LockoutPolicy::default());

        assert_eq!(transition, Transition::Reset);
        assert_eq!(state.phase(), GatePhase::Open);
        assert_eq!(state.lockout_epoch(), 1);
    }

    proptest! {
        #[test]
        fn any_wrong_code_counts_once(code in "\\PC*") {
            prop_assume!(code != "DEMO2024");
            let mut state = GateState::default();

            let before = state.failure_count();
            submit(&mut state, &code);

            prop_assert_eq!(state.failure_count(), before + 1);
            prop_assert_eq!(state.error(), Some(&GateError::InvalidCredential));
        }

        #[test]
        fn remaining_never_increases_under_ticks(ticks in 0usize..64) {
            let mut state = locked_state();
            let mut last = state.remaining_lock_secs();

            for _ in 0..ticks {
                tick(&mut state);
                prop_assert!(state.remaining_lock_secs() <= last);
                last = state.remaining_lock_secs();
            }
        }
    }
}
