//! Keyed extremum search: `findmin`, `findmax`, `argmin`, `argmax`
//!
//! A domain is any iterator of `(key, value)` pairs: an enumerated slice, a
//! `BTreeMap`, a `HashMap` (whose iteration order then decides ties), or any
//! other keyed source. Values are classified through [`Scored`] and compared
//! with the [`Direction`] rules: a missing value (`None`) wins in the
//! direction being searched, a NaN arriving after a number never displaces
//! it, and on exact ties the element met first is returned.
//!
//! The two families treat a *leading* NaN differently. `findmin`/`findmax`
//! compare with the ordinary `>`/`<`, under which a NaN already held is never
//! displaced. `argmin`/`argmax` rank NaN past every number and move on to the
//! first number that follows.
//!
//! # Examples
//!
//! ```rust
//! use nan_search::{argmax, argmin, argmin_by, findmax, findmin, findmin_by};
//!
//! let data = [1.0, 1.0, 2.0, 2.0, f64::NAN];
//! let keyed = || data.iter().copied().enumerate();
//!
//! assert_eq!(findmin(keyed()).unwrap(), (1.0, 0));
//! assert_eq!(findmax(keyed()).unwrap(), (2.0, 2));
//! assert_eq!(findmin_by(|x: f64| -x, keyed()).unwrap(), (-2.0, 2));
//!
//! let data = [7.0, 1.0, 1.0, f64::NAN];
//! assert_eq!(argmin(data.iter().copied().enumerate()).unwrap(), 1);
//! assert_eq!(argmax(data.iter().copied().enumerate()).unwrap(), 0);
//!
//! let data = [f64::NAN, 1.0, 2.0];
//! assert!(findmin(data.iter().copied().enumerate()).unwrap().0.is_nan());
//! assert_eq!(argmin(data.iter().copied().enumerate()).unwrap(), 1);
//!
//! let data = [1.0, -1.0, -2.0, 2.0, f64::NAN];
//! assert_eq!(argmin_by(|x: &f64| x.abs(), data).unwrap(), 1.0);
//! ```

use crate::score::{Direction, Score, Scored};
use nan_core::{Error, Result};
use tracing::debug;

fn empty_domain(operation: &'static str) -> Error {
    debug!(operation, "keyed search over an empty domain");
    Error::empty_input(operation)
}

/// Fold a keyed domain down to its best `(value, key)` pair
///
/// This is the general form behind [`findmin`]/[`findmax`] and their `_by`
/// variants. The held candidate is replaced only when
/// [`Direction::eliminates`] says so, which keeps the fold left-biased.
pub fn search<K, S, I>(direction: Direction, domain: I) -> Result<(S, K)>
where
    I: IntoIterator<Item = (K, S)>,
    S: Scored,
{
    let operation = match direction {
        Direction::Min => "findmin",
        Direction::Max => "findmax",
    };
    fold_keyed(direction, operation, domain)
}

fn fold_keyed<K, S, I>(direction: Direction, operation: &'static str, domain: I) -> Result<(S, K)>
where
    I: IntoIterator<Item = (K, S)>,
    S: Scored,
{
    let mut pairs = domain.into_iter();
    let (first_key, first_value) = pairs.next().ok_or_else(|| empty_domain(operation))?;

    let mut held_score = first_value.score();
    let mut held = (first_value, first_key);
    for (key, value) in pairs {
        let score = value.score();
        if direction.eliminates(&held_score, &score) {
            held_score = score;
            held = (value, key);
        }
    }
    Ok(held)
}

/// Smallest value in the domain together with its key
pub fn findmin<K, S, I>(domain: I) -> Result<(S, K)>
where
    I: IntoIterator<Item = (K, S)>,
    S: Scored,
{
    fold_keyed(Direction::Min, "findmin", domain)
}

/// Largest value in the domain together with its key
pub fn findmax<K, S, I>(domain: I) -> Result<(S, K)>
where
    I: IntoIterator<Item = (K, S)>,
    S: Scored,
{
    fold_keyed(Direction::Max, "findmax", domain)
}

/// Smallest `f(value)` over the domain together with the key it came from
pub fn findmin_by<K, V, S, I, F>(mut f: F, domain: I) -> Result<(S, K)>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V) -> S,
    S: Scored,
{
    fold_keyed(
        Direction::Min,
        "findmin",
        domain.into_iter().map(|(key, value)| (key, f(value))),
    )
}

/// Largest `f(value)` over the domain together with the key it came from
pub fn findmax_by<K, V, S, I, F>(mut f: F, domain: I) -> Result<(S, K)>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V) -> S,
    S: Scored,
{
    fold_keyed(
        Direction::Max,
        "findmax",
        domain.into_iter().map(|(key, value)| (key, f(value))),
    )
}

/// Keep only the score and whatever identifies the winner
///
/// Unlike [`fold_keyed`] this never holds on to the ranked value itself, and
/// it replaces through [`Direction::eliminates_ranked`].
fn fold_arg<T, X, I>(direction: Direction, operation: &'static str, scored: I) -> Result<X>
where
    T: nan_core::NanFloat,
    I: Iterator<Item = (Score<T>, X)>,
{
    scored
        .reduce(|held, incoming| {
            if direction.eliminates_ranked(&held.0, &incoming.0) {
                incoming
            } else {
                held
            }
        })
        .map(|(_, winner)| winner)
        .ok_or_else(|| empty_domain(operation))
}

/// Key of the smallest value in the domain
pub fn argmin<K, S, I>(domain: I) -> Result<K>
where
    I: IntoIterator<Item = (K, S)>,
    S: Scored,
{
    fold_arg(
        Direction::Min,
        "argmin",
        domain.into_iter().map(|(key, value)| (value.score(), key)),
    )
}

/// Key of the largest value in the domain
pub fn argmax<K, S, I>(domain: I) -> Result<K>
where
    I: IntoIterator<Item = (K, S)>,
    S: Scored,
{
    fold_arg(
        Direction::Max,
        "argmax",
        domain.into_iter().map(|(key, value)| (value.score(), key)),
    )
}

/// Element `x` of the domain with the smallest `f(x)`
pub fn argmin_by<V, S, I, F>(mut f: F, domain: I) -> Result<V>
where
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> S,
    S: Scored,
{
    fold_arg(
        Direction::Min,
        "argmin",
        domain.into_iter().map(|x| (f(&x).score(), x)),
    )
}

/// Element `x` of the domain with the largest `f(x)`
pub fn argmax_by<V, S, I, F>(mut f: F, domain: I) -> Result<V>
where
    I: IntoIterator<Item = V>,
    F: FnMut(&V) -> S,
    S: Scored,
{
    fold_arg(
        Direction::Max,
        "argmax",
        domain.into_iter().map(|x| (f(&x).score(), x)),
    )
}
