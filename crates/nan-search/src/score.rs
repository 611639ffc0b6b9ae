//! Search scores over {number, NaN, missing} and the rules that compare them
//!
//! A transformed value is classified into a [`Score`] before it is compared.
//! Two replacement rules decide whether a held candidate gives way to an
//! incoming one. Both keep the held candidate on exact ties, so folds resolve
//! to the first occurrence, and both let a missing value win in the search's
//! own direction.
//!
//! [`Direction::eliminates`] drives `findmin`/`findmax`. An incoming NaN never
//! displaces a held number; otherwise the direction's ordinary comparison
//! applies, and since NaN is unordered a NaN that is already held (because it
//! came first) is never displaced either.
//!
//! [`Direction::eliminates_ranked`] drives `argmin`/`argmax` and follows the
//! total preorder of [`Direction::preference`]:
//!
//! | Direction | best → worst                              |
//! |-----------|-------------------------------------------|
//! | `Min`     | missing, numbers ascending, NaN           |
//! | `Max`     | missing, numbers descending, NaN          |
//!
//! So `argmin` treats NaN as greater than every number and `argmax` treats it
//! as less than every number: a leading NaN is displaced by the first number.

use nan_core::NanFloat;
use std::cmp::Ordering;

/// Classification of a value taking part in a keyed search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score<T> {
    /// A concrete, non-NaN number
    Value(T),
    /// Not a number
    NaN,
    /// No data at this key
    Missing,
}

impl<T: NanFloat> Score<T> {
    /// Classify a float, mapping NaN to [`Score::NaN`]
    pub fn of(x: T) -> Self {
        if x.is_nan() {
            Score::NaN
        } else {
            Score::Value(x)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Score::Missing)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Score::NaN)
    }

    /// The number, if there is one
    pub fn value(&self) -> Option<T> {
        match self {
            Score::Value(x) => Some(*x),
            _ => None,
        }
    }
}

/// Values that can be ranked by a keyed search
///
/// Implemented for `f32`/`f64`, for `Option<f32>`/`Option<f64>` where `None`
/// is the missing marker, and for [`Score`] itself.
pub trait Scored {
    type Float: NanFloat;

    fn score(&self) -> Score<Self::Float>;
}

macro_rules! impl_scored_float {
    ($($t:ty),*) => {
        $(
            impl Scored for $t {
                type Float = $t;

                #[inline]
                fn score(&self) -> Score<$t> {
                    Score::of(*self)
                }
            }
        )*
    };
}

impl_scored_float!(f32, f64);

impl<T: NanFloat> Scored for Option<T> {
    type Float = T;

    #[inline]
    fn score(&self) -> Score<T> {
        match self {
            Some(x) => Score::of(*x),
            None => Score::Missing,
        }
    }
}

impl<T: NanFloat> Scored for Score<T> {
    type Float = T;

    #[inline]
    fn score(&self) -> Score<T> {
        match *self {
            // Re-classify: a hand-built Value(NaN) still ranks as NaN.
            Score::Value(x) => Score::of(x),
            other => other,
        }
    }
}

impl<S: Scored + ?Sized> Scored for &S {
    type Float = S::Float;

    #[inline]
    fn score(&self) -> Score<S::Float> {
        (**self).score()
    }
}

/// Which extremum a search is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Min,
    Max,
}

impl Direction {
    /// Ordinary comparison: `incoming` is strictly better than `held`
    ///
    /// False whenever either side is NaN.
    #[inline]
    fn improves<T: NanFloat>(self, held: T, incoming: T) -> bool {
        match self {
            Direction::Min => held > incoming,
            Direction::Max => held < incoming,
        }
    }

    /// Whether a held `findmin`/`findmax` candidate gives way to `incoming`
    pub fn eliminates<T: NanFloat>(self, held: &Score<T>, incoming: &Score<T>) -> bool {
        match (held, incoming) {
            (Score::Missing, _) => false,
            (_, Score::Missing) => true,
            (Score::Value(_), Score::NaN) => false,
            (Score::Value(h), Score::Value(i)) => self.improves(*h, *i),
            // A held NaN is unordered against everything that follows.
            (Score::NaN, _) => false,
        }
    }

    /// Ranking used by `argmin`/`argmax`; `Less` means `a` is the better pick
    pub fn preference<T: NanFloat>(self, a: &Score<T>, b: &Score<T>) -> Ordering {
        fn tier<T>(s: &Score<T>) -> u8 {
            match s {
                Score::Missing => 0,
                Score::Value(_) => 1,
                Score::NaN => 2,
            }
        }

        match (a, b) {
            (Score::Value(x), Score::Value(y)) => {
                let ord = match self {
                    Direction::Min => x.partial_cmp(y),
                    Direction::Max => y.partial_cmp(x),
                };
                // Value never holds NaN once classified.
                ord.unwrap_or(Ordering::Equal)
            }
            _ => tier(a).cmp(&tier(b)),
        }
    }

    /// Whether a held `argmin`/`argmax` candidate gives way to `incoming`
    ///
    /// Only a strictly better score under [`preference`](Self::preference)
    /// replaces the held one.
    #[inline]
    pub fn eliminates_ranked<T: NanFloat>(self, held: &Score<T>, incoming: &Score<T>) -> bool {
        self.preference(incoming, held) == Ordering::Less
    }
}
