//! The shared access code and the check against it.

/// Result of comparing a candidate against the access code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    NoMatch,
}

/// A single static passphrase. There is no user identity behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    expected: &'static str,
}

impl Credential {
    /// The code shipped with the demo portal.
    pub const DEMO: Credential = Credential::new("DEMO2024");

    pub const fn new(expected: &'static str) -> Self {
        Self { expected }
    }

    /// Exact, case-sensitive comparison. Nothing is trimmed.
    pub fn check(&self, candidate: &str) -> Verdict {
        if candidate == self.expected {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }

    /// The code as shown under the form.
    pub fn hint(&self) -> &'static str {
        self.expected
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::DEMO
    }
}
