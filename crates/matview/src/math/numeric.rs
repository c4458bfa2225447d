//! `NumericView`: in-place coordinate-wise arithmetic over a borrowed lane.
use std::ops::{AddAssign, Deref, DerefMut, DivAssign, MulAssign, SubAssign};

use num_traits::NumAssignOps;

use crate::error::MatrixError;

/// Mutable, non-owning view over a run of numbers, usually one row or
/// column handed out by [`MatrixView`](crate::math::MatrixView).
///
/// Writes go straight through to the borrowed buffer.
#[derive(Debug, PartialEq)]
pub struct NumericView<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> NumericView<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Gives back the underlying borrow with the full lifetime.
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<'a, T> NumericView<'a, T>
where
    T: Copy,
{
    /// Applies `op(lhs, rhs)` pairwise in place.
    ///
    /// `other` must have exactly as many elements as the view; otherwise
    /// nothing is written and `LengthMismatch` is returned.
    pub fn combine_with<F>(&mut self, other: &[T], op: F) -> Result<&mut Self, MatrixError>
    where
        F: FnMut(&mut T, T),
    {
        if other.len() != self.data.len() {
            return Err(MatrixError::LengthMismatch {
                expected: self.data.len(),
                actual: other.len(),
            });
        }
        Ok(self.zip_apply_truncating(other, op))
    }

    /// Pairs elements only up to the shorter of the two lengths. Trailing
    /// lane elements are left untouched and extra operand elements ignored.
    pub fn zip_apply_truncating<F>(&mut self, other: &[T], mut op: F) -> &mut Self
    where
        F: FnMut(&mut T, T),
    {
        for (a, &b) in self.data.iter_mut().zip(other) {
            op(a, b);
        }
        self
    }

    /// Replaces every element `x` with `op(x, scalar)`.
    pub fn apply_scalar<F>(&mut self, scalar: T, mut op: F) -> &mut Self
    where
        F: FnMut(T, T) -> T,
    {
        for x in self.data.iter_mut() {
            *x = op(*x, scalar);
        }
        self
    }
}

impl<'a, T> NumericView<'a, T>
where
    T: Copy + NumAssignOps,
{
    pub fn add_elementwise(&mut self, other: &[T]) -> Result<&mut Self, MatrixError> {
        self.combine_with(other, |a, b| *a += b)
    }

    pub fn sub_elementwise(&mut self, other: &[T]) -> Result<&mut Self, MatrixError> {
        self.combine_with(other, |a, b| *a -= b)
    }

    pub fn mul_elementwise(&mut self, other: &[T]) -> Result<&mut Self, MatrixError> {
        self.combine_with(other, |a, b| *a *= b)
    }

    /// Integer division by a zero operand panics, as it does for plain `/=`.
    pub fn div_elementwise(&mut self, other: &[T]) -> Result<&mut Self, MatrixError> {
        self.combine_with(other, |a, b| *a /= b)
    }

    pub fn add_scalar(&mut self, scalar: T) -> &mut Self {
        self.apply_scalar(scalar, |mut x, k| {
            x += k;
            x
        })
    }

    pub fn sub_scalar(&mut self, scalar: T) -> &mut Self {
        self.apply_scalar(scalar, |mut x, k| {
            x -= k;
            x
        })
    }

    pub fn mul_scalar(&mut self, scalar: T) -> &mut Self {
        self.apply_scalar(scalar, |mut x, k| {
            x *= k;
            x
        })
    }

    pub fn div_scalar(&mut self, scalar: T) -> &mut Self {
        self.apply_scalar(scalar, |mut x, k| {
            x /= k;
            x
        })
    }
}

impl<'a, T> Deref for NumericView<'a, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &*self.data
    }
}

impl<'a, T> DerefMut for NumericView<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.data
    }
}

impl<'a, T> AsRef<[T]> for NumericView<'a, T> {
    fn as_ref(&self) -> &[T] {
        &*self.data
    }
}

impl<'a, T: Copy + NumAssignOps> AddAssign<T> for NumericView<'a, T> {
    fn add_assign(&mut self, scalar: T) {
        self.add_scalar(scalar);
    }
}

impl<'a, T: Copy + NumAssignOps> SubAssign<T> for NumericView<'a, T> {
    fn sub_assign(&mut self, scalar: T) {
        self.sub_scalar(scalar);
    }
}

impl<'a, T: Copy + NumAssignOps> MulAssign<T> for NumericView<'a, T> {
    fn mul_assign(&mut self, scalar: T) {
        self.mul_scalar(scalar);
    }
}

impl<'a, T: Copy + NumAssignOps> DivAssign<T> for NumericView<'a, T> {
    fn div_assign(&mut self, scalar: T) {
        self.div_scalar(scalar);
    }
}
