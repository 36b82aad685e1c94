use std::ops::Mul;

use num_traits::{One, Zero};

// 2x2 matrix over any numeric type with additive and multiplicative identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity() -> Self {
        Matrix {
            a: T::one(),
            b: T::zero(),
            c: T::zero(),
            d: T::one(),
        }
    }

    // Matrix multiplication for 2x2 matrices
    pub fn mul(&self, other: &Self) -> Self {
        Matrix {
            a: self.a.clone() * other.a.clone() + self.b.clone() * other.c.clone(),
            b: self.a.clone() * other.b.clone() + self.b.clone() * other.d.clone(),
            c: self.c.clone() * other.a.clone() + self.d.clone() * other.c.clone(),
            d: self.c.clone() * other.b.clone() + self.d.clone() * other.d.clone(),
        }
    }

    // Matrix exponentiation using squaring (O(log exp) multiplications)
    pub fn pow(mut self, mut exp: usize) -> Self {
        let mut result = Self::identity();

        while exp > 0 {
            if exp % 2 == 1 {
                result = result.mul(&self);
            }
            self = self.mul(&self);
            exp /= 2;
        }

        result
    }
}

/// Scalar product of two vectors:
/// `(a1, ..., aN) * (b1, ..., bN) = a1*b1 + ... + aN*bN`.
///
/// Works for any numeric type with a zero, addition, and multiplication.
/// Pairs beyond the shorter of the two slices are ignored.
pub fn dot_product<T>(first: &[T], second: &[T]) -> T
where
    T: Clone + Zero + Mul<Output = T>,
{
    first
        .iter()
        .zip(second)
        .fold(T::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
}
