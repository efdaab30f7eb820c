use std::{fmt::{self, Display, Formatter}, panic::Location};

use anyhow::{Context, Result};

pub mod prelude {
    extern crate anyhow;
    pub use anyhow::{anyhow, bail, Context, Result};

    extern crate thiserror;
    pub use thiserror::Error;

    pub use super::{LocatedError, LocatedOption};
}

/// `[file:line:col]` tag of the call site that requested some error context.
struct CallSite(&'static Location<'static>);

impl Display for CallSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}:{}]", self.0.file(), self.0.line(), self.0.column())
    }
}

pub trait LocatedError<T, E> {
    /// Wrap the error value with additional context + the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Same as `loc()`, but the context is only built once an error does occur.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> LocatedError<T, E> for Result<T, E>
where
    E: Display + Send + Sync + 'static,
    Result<T, E>: Context<T, E>,
{
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let site = CallSite(Location::caller());
        self.with_context(|| format!("{site} {context}"))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let site = CallSite(Location::caller());
        self.with_context(|| format!("{site} {}", f()))
    }
}

pub trait LocatedOption<T> {
    /// Convert a `None` into an error carrying `context` + the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Lazy counterpart of `LocatedOption::loc()`
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> LocatedOption<T> for Option<T> {
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let site = CallSite(Location::caller());
        self.with_context(|| format!("{site} {context}"))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let site = CallSite(Location::caller());
        self.with_context(|| format!("{site} {}", f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("Invalid allele token '{0}'")]
    struct TokenError(String);

    fn parse_token(token: &str) -> Result<u8, TokenError> {
        token.parse().map_err(|_| TokenError(token.to_string()))
    }

    fn parse_row(row: &str) -> Result<Vec<u8>> {
        row.split_whitespace()
            .map(|token| parse_token(token).loc("While parsing allele tokens"))
            .collect()
    }

    fn parse_file(rows: &[&str]) -> Result<Vec<Vec<u8>>> {
        rows.iter().enumerate()
            .map(|(i, row)| parse_row(row).with_loc(|| format!("While parsing row {}", i + 1)))
            .collect()
    }

    #[test]
    fn context_chain_carries_call_sites() {
        let err = parse_file(&["1 1 2 2", "1 X"]).unwrap_err();
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(chain.len(), 3);
        assert!(chain[0].starts_with(&format!("[{}:", file!())));
        assert!(chain[0].ends_with("While parsing row 2"));
        assert!(chain[1].ends_with("While parsing allele tokens"));
        assert_eq!(chain[2], "Invalid allele token 'X'");
    }

    #[test]
    fn typed_error_stays_downcastable() {
        let err = parse_file(&["3 Y"]).unwrap_err();
        assert!(matches!(err.downcast_ref::<TokenError>(), Some(TokenError(token)) if token == "Y"));
    }

    #[test]
    fn ok_values_pass_through() -> Result<()> {
        assert_eq!(parse_file(&["0 0", "1 2"])?, vec![vec![0, 0], vec![1, 2]]);
        Ok(())
    }

    #[test]
    fn missing_option_is_located() {
        let err = None::<u8>.loc("Missing affectation field").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with(&format!("[{}:", file!())));
        assert!(msg.ends_with("Missing affectation field"));
        assert_eq!(Some(5).with_loc(|| "unused").ok(), Some(5));
    }
}
