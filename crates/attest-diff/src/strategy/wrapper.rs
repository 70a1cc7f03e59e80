//! Strategies for the Option / Either / Result value wrappers.
//!
//! All three follow the same pattern: recurse into the contained value when
//! both sides agree on the wrapper's variant, and report a shape mismatch
//! when they disagree. A shape mismatch never recurses into the contained
//! value; the rendering shows both sides with `...` placeholders.

use either::Either;

use crate::model::ComparisonResult;
use crate::strategy::Diffable;

impl<T: Diffable> Diffable for Option<T> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        match (actual, expected) {
            (None, None) => ComparisonResult::OptionIdentical { value: None },
            (Some(a), Some(e)) => {
                let inner = T::diff(a, e);
                if inner.is_identical() {
                    ComparisonResult::OptionIdentical {
                        value: Some(T::show(a)),
                    }
                } else {
                    ComparisonResult::OptionDifference {
                        inner: Box::new(inner),
                    }
                }
            }
            (Some(_), None) => ComparisonResult::OptionShapeDifference {
                actual_present: true,
            },
            (None, Some(_)) => ComparisonResult::OptionShapeDifference {
                actual_present: false,
            },
        }
    }

    fn show(value: &Self) -> String {
        match value {
            Some(v) => format!("Some({})", T::show(v)),
            None => "None".to_string(),
        }
    }
}

impl<L: Diffable, R: Diffable> Diffable for Either<L, R> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        match (actual, expected) {
            (Either::Left(a), Either::Left(e)) => side_result(true, L::diff(a, e), || L::show(a)),
            (Either::Right(a), Either::Right(e)) => {
                side_result(false, R::diff(a, e), || R::show(a))
            }
            (Either::Left(_), Either::Right(_)) => {
                ComparisonResult::EitherShapeDifference { actual_left: true }
            }
            (Either::Right(_), Either::Left(_)) => {
                ComparisonResult::EitherShapeDifference { actual_left: false }
            }
        }
    }

    fn show(value: &Self) -> String {
        match value {
            Either::Left(v) => format!("Left({})", L::show(v)),
            Either::Right(v) => format!("Right({})", R::show(v)),
        }
    }
}

/// Fold an inner diff into the Either result for one agreed side.
fn side_result(
    left: bool,
    inner: ComparisonResult,
    show: impl FnOnce() -> String,
) -> ComparisonResult {
    if inner.is_identical() {
        ComparisonResult::EitherIdentical {
            left,
            value: show(),
        }
    } else {
        ComparisonResult::EitherDifference {
            left,
            inner: Box::new(inner),
        }
    }
}

impl<T: Diffable, E: Diffable> Diffable for Result<T, E> {
    fn diff(actual: &Self, expected: &Self) -> ComparisonResult {
        match (actual, expected) {
            (Ok(a), Ok(e)) => {
                let inner = T::diff(a, e);
                if inner.is_identical() {
                    ComparisonResult::ResultIdentical {
                        ok: true,
                        value: T::show(a),
                    }
                } else {
                    ComparisonResult::ResultDifference {
                        ok: true,
                        inner: Box::new(inner),
                    }
                }
            }
            (Err(a), Err(e)) => {
                let inner = E::diff(a, e);
                if inner.is_identical() {
                    ComparisonResult::ResultIdentical {
                        ok: false,
                        value: E::show(a),
                    }
                } else {
                    ComparisonResult::ResultDifference {
                        ok: false,
                        inner: Box::new(inner),
                    }
                }
            }
            (Ok(_), Err(_)) => ComparisonResult::ResultShapeDifference { actual_ok: true },
            (Err(_), Ok(_)) => ComparisonResult::ResultShapeDifference { actual_ok: false },
        }
    }

    fn show(value: &Self) -> String {
        match value {
            Ok(v) => format!("Ok({})", T::show(v)),
            Err(e) => format!("Err({})", E::show(e)),
        }
    }
}
