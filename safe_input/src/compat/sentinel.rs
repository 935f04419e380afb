// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ffi::c_int;

use crate::InputResult;

/// Returned by the character getters when no character is available.
pub const EOF: c_int = -1;

/// The value that stands in for "no value" in the sentinel API.
pub trait Sentinel: Copy {
    const SENTINEL: Self;
}

macro_rules! impl_sentinel {
    ($value:ident; $($target:ty),+ $(,)?) => {
        $(
            impl Sentinel for $target {
                const SENTINEL: Self = <$target>::$value;
            }
        )+
    };
}

impl_sentinel!(MIN; i32, i64, i128);
impl_sentinel!(MAX; u32, u64, u128);
impl_sentinel!(NAN; f32, f64);

pub trait InputResultExt<T> {
    /// Collapse the error side into [`Sentinel::SENTINEL`].
    fn or_sentinel(self) -> T;
}

impl<T: Sentinel> InputResultExt<T> for InputResult<T> {
    fn or_sentinel(self) -> T {
        self.inspect_err(|error| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Returning sentinel", error = %error);
        })
        .unwrap_or(T::SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::{InputError, assert_eq2};

    #[test]
    fn test_sentinels() {
        assert_eq2!(Err::<i32, _>(InputError::EndOfStream).or_sentinel(), i32::MIN);
        assert_eq2!(Err::<u64, _>(InputError::EndOfStream).or_sentinel(), u64::MAX);
        assert!(
            Err::<f64, _>(InputError::RetriesExhausted {
                attempts: NonZeroU32::MIN
            })
            .or_sentinel()
            .is_nan()
        );
        assert_eq2!(Ok::<i64, InputError>(-3).or_sentinel(), -3);
    }
}
