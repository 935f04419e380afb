// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{InputError, InputResult};

/// How many times an accessor re-prompts before giving up on bad-but-present input.
/// End of stream always ends the call immediately, regardless of this policy.
///
/// In JSON this is either `"unbounded"` or `{ "max_attempts": 3 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Keep asking until the input is valid or the stream ends. This is what an
    /// interactive prompt wants.
    #[default]
    Unbounded,
    /// Give up after this many rejected lines.
    MaxAttempts(NonZeroU32),
}

/// Tracks rejected lines for one accessor call.
#[derive(Debug, Clone, Copy)]
pub struct AttemptCounter {
    policy: RetryPolicy,
    rejected: u32,
}

impl AttemptCounter {
    #[must_use]
    pub fn new(policy: RetryPolicy) -> Self { Self { policy, rejected: 0 } }

    #[must_use]
    pub fn rejected(&self) -> u32 { self.rejected }

    /// Count one rejected line.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::RetriesExhausted`] once the policy's budget is spent.
    pub fn record_rejection(&mut self) -> InputResult<()> {
        self.rejected = self.rejected.saturating_add(1);
        match self.policy {
            RetryPolicy::MaxAttempts(max) if self.rejected >= max.get() => {
                Err(InputError::RetriesExhausted { attempts: max })
            }
            RetryPolicy::Unbounded | RetryPolicy::MaxAttempts(_) => Ok(()),
        }
    }
}
