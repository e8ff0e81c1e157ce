use std::collections::HashSet;

use crate::schema::ResultLabel;

/// Decides whether a vector is expected to derive successfully.
///
/// The mapping from result label and flag set to an expected outcome is an
/// evolving allowlist owned by the caller, not by the harness; the runner
/// only consults it.
pub trait Policy {
    fn should_pass(&self, result: ResultLabel, flags: &[String]) -> bool;
}

/// Adapts a plain function or closure into a [`Policy`].
pub struct PolicyFn<F>(pub F);

impl<F> Policy for PolicyFn<F>
where
    F: Fn(ResultLabel, &[String]) -> bool,
{
    fn should_pass(&self, result: ResultLabel, flags: &[String]) -> bool {
        (self.0)(result, flags)
    }
}

/// Standard policy: "valid" passes, "invalid" fails, and "acceptable" passes
/// only when every flag on the vector is explicitly tolerated.
#[derive(Debug, Clone, Default)]
pub struct FlagAllowList {
    allowed: HashSet<String>,
}

impl FlagAllowList {
    pub fn new<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: flags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allow(&mut self, flag: impl Into<String>) {
        self.allowed.insert(flag.into());
    }
}

impl Policy for FlagAllowList {
    fn should_pass(&self, result: ResultLabel, flags: &[String]) -> bool {
        match result {
            ResultLabel::Valid => true,
            ResultLabel::Invalid => false,
            ResultLabel::Acceptable => flags.iter().all(|flag| self.allowed.contains(flag)),
        }
    }
}
