// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Hedra Contributors

//! Exact rational field type built from any ring type

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};

use super::{sign_of, RingNumber, Sign};

/// An exact quotient `num / den` over a ring type.
///
/// This is the default field type of an assembled kernel: it supports
/// exact division over coordinates that only support `+ - *`. The
/// quotient is never reduced (the ring is not required to have a gcd);
/// comparisons cross-multiply and account for the sign of the
/// denominators, so a negative denominator is fine.
#[derive(Debug, Clone)]
pub struct Quotient<RT> {
    num: RT,
    den: RT,
}

impl<RT: RingNumber> Quotient<RT> {
    /// Precondition: `den` is non-zero.
    pub fn new(num: RT, den: RT) -> Self {
        debug_assert!(!den.is_zero(), "Quotient denominator must be non-zero");
        Self { num, den }
    }

    pub fn numerator(&self) -> &RT {
        &self.num
    }

    pub fn denominator(&self) -> &RT {
        &self.den
    }

    /// Sign of the represented value.
    pub fn sign(&self) -> Sign {
        match sign_of(&self.den) {
            Sign::Negative => sign_of(&self.num).opposite(),
            _ => sign_of(&self.num),
        }
    }
}

impl<RT: RingNumber> From<RT> for Quotient<RT> {
    fn from(value: RT) -> Self {
        Self {
            num: value,
            den: RT::one(),
        }
    }
}

impl<RT: RingNumber> PartialEq for Quotient<RT> {
    fn eq(&self, other: &Self) -> bool {
        // Cross-multiplication is sign-safe for equality.
        self.num.clone() * other.den.clone() == other.num.clone() * self.den.clone()
    }
}

impl<RT: RingNumber> PartialOrd for Quotient<RT> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        let lhs = self.num.clone() * other.den.clone();
        let rhs = other.num.clone() * self.den.clone();
        let ord = lhs.partial_cmp(&rhs)?;
        match sign_of(&(self.den.clone() * other.den.clone())) {
            Sign::Negative => Some(ord.reverse()),
            _ => Some(ord),
        }
    }
}

impl<RT: RingNumber> Add for Quotient<RT> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.den.clone() + rhs.num * self.den.clone(),
            den: self.den * rhs.den,
        }
    }
}

impl<RT: RingNumber> Sub for Quotient<RT> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.den.clone() - rhs.num * self.den.clone(),
            den: self.den * rhs.den,
        }
    }
}

impl<RT: RingNumber> Mul for Quotient<RT> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            num: self.num * rhs.num,
            den: self.den * rhs.den,
        }
    }
}

impl<RT: RingNumber> Div for Quotient<RT> {
    type Output = Self;

    /// Precondition: `rhs` is non-zero.
    fn div(self, rhs: Self) -> Self {
        debug_assert!(!rhs.num.is_zero(), "division by a zero Quotient");
        Self {
            num: self.num * rhs.den,
            den: self.den * rhs.num,
        }
    }
}

impl<RT: RingNumber> Neg for Quotient<RT> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl<RT: RingNumber> AddAssign for Quotient<RT> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl<RT: RingNumber> SubAssign for Quotient<RT> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl<RT: RingNumber> MulAssign for Quotient<RT> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl<RT: RingNumber> DivAssign for Quotient<RT> {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl<RT: RingNumber> Zero for Quotient<RT> {
    fn zero() -> Self {
        Self {
            num: RT::zero(),
            den: RT::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl<RT: RingNumber> One for Quotient<RT> {
    fn one() -> Self {
        Self {
            num: RT::one(),
            den: RT::one(),
        }
    }
}

impl<RT: RingNumber + fmt::Display> fmt::Display for Quotient<RT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
