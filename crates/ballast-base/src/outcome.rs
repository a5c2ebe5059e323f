//! The success-or-failure half of the ballast value algebra. [`Outcome`]
//! carries either a success value or a failure message; [`Outcome::capture`]
//! and [`Outcome::capture_async`] are the only places where a raw error is
//! narrowed into that message.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;

/// The result of an operation: a success value or a failure message.
///
/// The failure channel is a plain `String`. That is deliberate: it keeps the
/// type serializable and comparable at boundaries where only the message
/// matters. Flows that need the error's type, source chain, or backtrace
/// should stay in [`Result`] and convert at the edge with
/// [`Outcome::capture`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    /// Build a failure from anything that names an error.
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Consume the success value.
    ///
    /// Panics (with the failure's message) if the instance is a failure.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(message) => {
                panic!("value() called on a failed Outcome: {message}")
            }
        }
    }

    /// Consume the failure message.
    ///
    /// Panics if the instance is a success.
    #[track_caller]
    pub fn error(self) -> String {
        match self {
            Outcome::Success(_) => panic!("error() called on a successful Outcome"),
            Outcome::Failure(message) => message,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fallback,
        }
    }

    /// Transform the success value. A failure passes through with its
    /// message unchanged; the function is not invoked.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chain a computation that itself may fail. A failure passes through
    /// with its message unchanged; the function is not invoked.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Run an operation that may fail and capture what happened.
    ///
    /// On `Err` only the error's display text is kept; its type and source
    /// chain are dropped.
    pub fn capture<E: Display>(operation: impl FnOnce() -> Result<T, E>) -> Self {
        match operation() {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    /// The awaited form of [`Outcome::capture`].
    pub async fn capture_async<E: Display>(operation: impl Future<Output = Result<T, E>>) -> Self {
        match operation.await {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn success_value() {
        assert_eq!(Outcome::Success(3).value(), 3);
        assert!(Outcome::Success(3).is_success());
        assert!(!Outcome::Success(3).is_failure());
    }

    #[test]
    fn failure_error() {
        assert_eq!(Outcome::<i32>::failure("broken").error(), "broken");
        assert!(Outcome::<i32>::failure("broken").is_failure());
    }

    #[test]
    #[should_panic(expected = "value() called on a failed Outcome: broken")]
    fn value_on_failure_panics() {
        Outcome::<i32>::failure("broken").value();
    }

    #[test]
    #[should_panic(expected = "error() called on a successful Outcome")]
    fn error_on_success_panics() {
        Outcome::Success(3).error();
    }

    #[test]
    fn unwrap_or_fallback() {
        assert_eq!(Outcome::Success(9).unwrap_or(1), 9);
        assert_eq!(Outcome::failure("broken").unwrap_or(1), 1);
    }

    #[test]
    fn map_success() {
        assert_eq!(Outcome::Success(2).map(|v| v * 10), Outcome::Success(20));
    }

    #[test]
    fn map_propagates_failure_without_invoking_function() {
        let mut called = false;
        let result = Outcome::<i32>::failure("broken").map(|v| {
            called = true;
            v + 1
        });
        assert_eq!(result, Outcome::failure("broken"));
        assert!(!called);
    }

    #[test]
    fn and_then_chains() {
        let parse = |s: String| Outcome::capture(|| s.parse::<i32>());
        assert_eq!(
            Outcome::Success("14".to_string()).and_then(parse),
            Outcome::Success(14)
        );
        assert_matches!(
            Outcome::Success("nope".to_string()).and_then(parse),
            Outcome::Failure(_)
        );
        assert_eq!(
            Outcome::<String>::failure("earlier").and_then(parse),
            Outcome::failure("earlier")
        );
    }

    #[test]
    fn capture_ok() {
        assert_eq!(
            Outcome::capture(|| Ok::<_, String>(11)),
            Outcome::Success(11)
        );
    }

    #[test]
    fn capture_keeps_only_the_message_text() {
        assert_eq!(
            Outcome::<i32>::capture(|| Err("m".to_string())),
            Outcome::failure("m")
        );
    }

    #[tokio::test]
    async fn capture_async_ok() {
        let outcome = Outcome::capture_async(async { Ok::<_, String>(21) }).await;
        assert_eq!(outcome, Outcome::Success(21));
    }

    #[tokio::test]
    async fn capture_async_failure() {
        let outcome = Outcome::<i32>::capture_async(async { Err("m".to_string()) }).await;
        assert_eq!(outcome, Outcome::failure("m"));
    }

    #[test]
    fn into_result() {
        assert_eq!(Outcome::Success(1).into_result(), Ok(1));
        assert_eq!(
            Outcome::<i32>::failure("broken").into_result(),
            Err("broken".to_string())
        );
    }

    #[test]
    fn serde_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Outcome::Success(5_i32),
            &[
                Token::NewtypeVariant {
                    name: "Outcome",
                    variant: "Success",
                },
                Token::I32(5),
            ],
        );
        assert_tokens(
            &Outcome::<i32>::Failure("m".to_string()),
            &[
                Token::NewtypeVariant {
                    name: "Outcome",
                    variant: "Failure",
                },
                Token::Str("m"),
            ],
        );
    }
}
