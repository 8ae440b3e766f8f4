//! Live strength meter.
//!
//! Holds the policy and the latest result for an input field, re-evaluating
//! on every change and publishing each result to a callback.

use secrecy::SecretString;

use crate::evaluator::evaluate;
use crate::policy::Policy;
use crate::result::StrengthResult;

pub struct StrengthMeter<F>
where
    F: FnMut(&StrengthResult),
{
    policy: Policy,
    on_change: F,
    current: StrengthResult,
}

impl<F> StrengthMeter<F>
where
    F: FnMut(&StrengthResult),
{
    /// Creates a meter and immediately publishes the result for `initial`.
    pub fn new(policy: Policy, initial: &SecretString, mut on_change: F) -> Self {
        let current = evaluate(initial, &policy);
        on_change(&current);
        Self {
            policy,
            on_change,
            current,
        }
    }

    /// Re-evaluates after a password change and publishes the new result.
    pub fn set_password(&mut self, password: &SecretString) -> &StrengthResult {
        self.current = evaluate(password, &self.policy);
        (self.on_change)(&self.current);
        &self.current
    }

    pub fn result(&self) -> &StrengthResult {
        &self.current
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn feedback(&self) -> Vec<String> {
        self.current.feedback(&self.policy)
    }
}
