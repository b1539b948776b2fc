use crate::context::RequestContext;
use crate::util::serialized_origin;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub type OriginPredicateFn = dyn for<'a> Fn(&str, &RequestContext<'a>) -> bool + Send + Sync;

/// Which `Origin` header values count as a passing signal.
#[derive(Clone, Default)]
pub enum TrustedOrigin {
    /// The header must equal the request's own origin.
    #[default]
    SameAsRequest,
    Exact(String),
    List(Vec<OriginMatcher>),
    Predicate(Arc<OriginPredicateFn>),
}

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    Timeout { elapsed: Duration, budget: Duration },
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
            PatternError::Timeout { .. } => {
                write!(f, "compiling origin pattern exceeded the configured budget")
            }
            PatternError::TooLong { length, max } => write!(
                f,
                "origin pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;
const OPAQUE_ORIGIN: &str = "null";

/// One entry of a [`TrustedOrigin::List`].
#[derive(Clone, Debug)]
pub enum OriginMatcher {
    Exact(String),
    /// Matched against the whole header value.
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl TrustedOrigin {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&str, &RequestContext<'a>) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Whether `candidate`, the value of the `Origin` header, is trusted.
    ///
    /// Oversized values are rejected before string or pattern comparison. A
    /// predicate always sees the raw value and decides on its own.
    pub fn matches(&self, candidate: &str, ctx: &RequestContext<'_>) -> bool {
        match self {
            TrustedOrigin::Predicate(predicate) => predicate(candidate, ctx),
            _ if candidate.len() > MAX_ORIGIN_LENGTH => false,
            TrustedOrigin::SameAsRequest => candidate == ctx.request_origin,
            TrustedOrigin::Exact(value) => value == candidate,
            TrustedOrigin::List(matchers) => {
                matchers.iter().any(|matcher| matcher.matches(candidate))
            }
        }
    }

    /// Exact entries that differ from any origin a browser serializes, e.g.
    /// values with a path, a default port or an uppercase host. They still
    /// compare verbatim.
    pub(crate) fn unusual_entries(&self) -> Vec<&str> {
        let exact: Vec<&str> = match self {
            TrustedOrigin::Exact(value) => vec![value.as_str()],
            TrustedOrigin::List(matchers) => matchers
                .iter()
                .filter_map(|matcher| match matcher {
                    OriginMatcher::Exact(value) => Some(value.as_str()),
                    OriginMatcher::Pattern(_) => None,
                })
                .collect(),
            TrustedOrigin::SameAsRequest | TrustedOrigin::Predicate(_) => Vec::new(),
        };

        exact
            .into_iter()
            .filter(|value| !is_browser_origin(value))
            .collect()
    }
}

fn is_browser_origin(value: &str) -> bool {
    value == OPAQUE_ORIGIN || serialized_origin(value).is_some_and(|origin| origin == value)
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
