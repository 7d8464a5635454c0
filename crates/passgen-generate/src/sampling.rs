use crate::errors::GenerationError;

/// Retry policy for rejection sampling.
///
/// `max_attempts = None` retries until a candidate is accepted, which only
/// terminates with probability 1. Some option sets (uppercase passphrases in
/// particular) accept so rarely that callers needing bounded latency should
/// set a cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingPolicy {
    pub max_attempts: Option<u64>,
}

impl SamplingPolicy {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }
}

/// Accepted candidate and the number of candidates produced to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampled<T> {
    pub value: T,
    pub attempts: u64,
}

/// Produce candidates until `checker` accepts one.
pub fn produce_checked<T, P, C>(
    policy: &SamplingPolicy,
    mut producer: P,
    checker: C,
) -> Result<Sampled<T>, GenerationError>
where
    P: FnMut() -> T,
    C: Fn(&T) -> bool,
{
    let mut attempts = 0_u64;
    loop {
        if let Some(max) = policy.max_attempts
            && attempts >= max
        {
            return Err(GenerationError::AttemptsExhausted { attempts });
        }
        attempts += 1;

        let candidate = producer();
        if checker(&candidate) {
            return Ok(Sampled {
                value: candidate,
                attempts,
            });
        }
    }
}
