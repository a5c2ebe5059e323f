//! The optional half of the ballast value algebra: a value that is either
//! present or absent, with combinators that bridge into [`Outcome`].

use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// A value that is present or absent.
///
/// `Maybe` obeys the same laws as [`Option`] but is part of the ballast
/// algebra: it serializes with explicit `Present`/`Absent` tags, panics with
/// the caller's location when the value of an absent instance is consumed,
/// and converts into [`Outcome`] by naming the error its absence stands for.
/// There is no way to build a present instance around "nothing": the lossy
/// boundary is [`Option`], and the conversion from it is total (`None`
/// becomes [`Maybe::Absent`]).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Consume the held value.
    ///
    /// Panics if the instance is [`Maybe::Absent`]. Use [`Maybe::unwrap_or`]
    /// or [`Maybe::map_or_else`] when absence is an expected case.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("value() called on an absent Maybe"),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => fallback,
        }
    }

    /// Transform the held value. The function is not invoked on an absent
    /// instance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that itself may come up absent. The function is
    /// not invoked on an absent instance.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Maybe<T> {
        match self {
            Maybe::Present(value) if predicate(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    /// Run a side effect on the held value and return the receiver
    /// unchanged. No-op on an absent instance.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Maybe<T> {
        if let Maybe::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Total match: exactly one of the two functions runs.
    pub fn map_or_else<U>(self, on_absent: impl FnOnce() -> U, on_present: impl FnOnce(T) -> U) -> U {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Name the error this value's absence stands for.
    pub fn into_outcome(self, error_message: impl Into<String>) -> Outcome<T> {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(error_message.into()),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Present(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
