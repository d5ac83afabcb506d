//! Textual `"row,col"` coordinate tokens used by route plans.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::CoreError;

fn parse_error(token: &str, reason: impl Into<String>) -> CoreError {
    CoreError::Parse {
        token: token.to_string(),
        reason: reason.into(),
    }
}

/// Parse a `"row,col"` token into `(row, col)`.
///
/// Whitespace around the token and its fields is ignored, as is a single
/// pair of enclosing parentheses: `"(5, 10)"` parses the same as `"5,10"`.
pub fn parse_coordinate(token: &str) -> crate::Result<(u32, u32)> {
    parse_pair(token)
}

/// Parse a signed `"row,col"` pixel position, as typed by a user.
///
/// Same syntax as [`parse_coordinate`], but negative values are accepted so
/// that bounds checking happens against the canvas rather than here.
pub fn parse_pixel(token: &str) -> crate::Result<(i64, i64)> {
    parse_pair(token)
}

fn parse_pair<T>(token: &str) -> crate::Result<(T, T)>
where
    T: FromStr,
    T::Err: Display,
{
    let mut body = token.trim();
    if let Some(inner) = body.strip_prefix('(') {
        body = inner
            .strip_suffix(')')
            .ok_or_else(|| parse_error(token, "unbalanced parenthesis"))?;
    }

    let (row, col) = body
        .split_once(',')
        .ok_or_else(|| parse_error(token, "expected `row,col`"))?;
    if col.contains(',') {
        return Err(parse_error(token, "too many fields"));
    }

    let field = |s: &str, name: &str| {
        s.trim()
            .parse::<T>()
            .map_err(|e| parse_error(token, format!("{name}: {e}")))
    };
    Ok((field(row, "row")?, field(col, "col")?))
}

/// Canonical token for `(row, col)`; the inverse of [`parse_coordinate`].
pub fn format_coordinate(row: u32, col: u32) -> String {
    format!("{row},{col}")
}
