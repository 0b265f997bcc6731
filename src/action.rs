//! Group actions.

/// Left action on `T`.
///
/// Elements of implementing types act on `T` values on the left. For permutations acting on
/// permutations this is composition with `self` as the outer function.
pub trait LeftAction<T>
where
    T: ?Sized,
{
    /// Result of acting on a value. Fallible actions use a `Result` here.
    type Output;

    /// Act on a value on the left.
    fn left_apply(&self, value: &T) -> Self::Output;
}

/// Right action on `T`.
///
/// Elements of implementing types act on `T` values on the right. For permutations acting on
/// permutations this is composition with `self` as the inner function, i.e. `self` is applied
/// first.
pub trait RightAction<T>
where
    T: ?Sized,
{
    /// Result of acting on a value.
    type Output;

    /// Act on a value on the right.
    fn right_apply(&self, value: &T) -> Self::Output;
}
