//! `Numeral`: an `i64` that prints as a Roman numeral.
//!
//! All arithmetic happens on the underlying integer; the numeral form only
//! appears when the value is displayed or parsed. `Display` follows the
//! process-wide defaults in [`crate::config::defaults`].

use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::config::GlyphSet;
use crate::error::ParseError;

/// A signed 64-bit integer rendered as a Roman numeral.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Numeral(pub i64);

impl Numeral {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying integer.
    pub fn get(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Uppercase hexadecimal with a `0x` prefix, e.g. `0x14`.
    pub fn to_hex_string(self) -> String {
        if self.0 < 0 {
            format!("-0x{:X}", self.0.unsigned_abs())
        } else {
            format!("0x{:X}", self.0)
        }
    }

    /// Binary with a `0b` prefix, e.g. `0b10100`.
    pub fn to_binary_string(self) -> String {
        if self.0 < 0 {
            format!("-0b{:b}", self.0.unsigned_abs())
        } else {
            format!("0b{:b}", self.0)
        }
    }

    /// ASCII numeral using the default tokens and case.
    pub fn to_roman(self) -> String {
        let codec = Codec::from_defaults();
        codec.format_as(self.0, GlyphSet::Ascii, codec.config().case)
    }

    /// Unicode numeral using the default tokens and case.
    pub fn to_roman_unicode(self) -> String {
        let codec = Codec::from_defaults();
        codec.format_as(self.0, GlyphSet::Unicode, codec.config().case)
    }

    /// Render with an explicit codec.
    pub fn to_roman_with(self, codec: &Codec) -> String {
        codec.format(self.0)
    }

    /// -1, 0 or 1.
    pub fn signum(self) -> Self {
        Self(self.0.signum())
    }

    pub fn abs_diff(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Self)
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.0.checked_div(rhs.0).map(Self)
    }

    /// Quotient and remainder of truncating division.
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        (Self(self.0 / rhs.0), Self(self.0 % rhs.0))
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&Codec::from_defaults().format(self.0))
    }
}

impl FromStr for Numeral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Codec::from_defaults().parse(s).map(Self)
    }
}

impl TryFrom<&str> for Numeral {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<i64> for Numeral {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Numeral> for i64 {
    fn from(value: Numeral) -> Self {
        value.0
    }
}

impl PartialEq<i64> for Numeral {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Numeral> for i64 {
    fn eq(&self, other: &Numeral) -> bool {
        *self == other.0
    }
}

impl PartialOrd<i64> for Numeral {
    fn partial_cmp(&self, other: &i64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<Numeral> for i64 {
    fn partial_cmp(&self, other: &Numeral) -> Option<std::cmp::Ordering> {
        self.partial_cmp(&other.0)
    }
}

/// Implements a binary operator and its assigning form for `Numeral` with
/// `Numeral` and `i64` on either side.
macro_rules! delegate_binary_op {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident;)+) => {$(
        impl $op for Numeral {
            type Output = Numeral;
            fn $method(self, rhs: Numeral) -> Numeral {
                Numeral($op::$method(self.0, rhs.0))
            }
        }

        impl $op<i64> for Numeral {
            type Output = Numeral;
            fn $method(self, rhs: i64) -> Numeral {
                Numeral($op::$method(self.0, rhs))
            }
        }

        impl $op<Numeral> for i64 {
            type Output = Numeral;
            fn $method(self, rhs: Numeral) -> Numeral {
                Numeral($op::$method(self, rhs.0))
            }
        }

        impl $assign for Numeral {
            fn $assign_method(&mut self, rhs: Numeral) {
                $assign::$assign_method(&mut self.0, rhs.0);
            }
        }

        impl $assign<i64> for Numeral {
            fn $assign_method(&mut self, rhs: i64) {
                $assign::$assign_method(&mut self.0, rhs);
            }
        }
    )+};
}

delegate_binary_op! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}

impl Neg for Numeral {
    type Output = Numeral;
    fn neg(self) -> Numeral {
        Numeral(-self.0)
    }
}

impl Not for Numeral {
    type Output = Numeral;
    fn not(self) -> Numeral {
        Numeral(!self.0)
    }
}

impl Shl<u32> for Numeral {
    type Output = Numeral;
    fn shl(self, rhs: u32) -> Numeral {
        Numeral(self.0 << rhs)
    }
}

impl Shr<u32> for Numeral {
    type Output = Numeral;
    fn shr(self, rhs: u32) -> Numeral {
        Numeral(self.0 >> rhs)
    }
}

impl ShlAssign<u32> for Numeral {
    fn shl_assign(&mut self, rhs: u32) {
        self.0 <<= rhs;
    }
}

impl ShrAssign<u32> for Numeral {
    fn shr_assign(&mut self, rhs: u32) {
        self.0 >>= rhs;
    }
}

impl std::iter::Sum for Numeral {
    fn sum<I: Iterator<Item = Numeral>>(iter: I) -> Self {
        Numeral(iter.map(|n| n.0).sum())
    }
}

impl std::iter::Product for Numeral {
    fn product<I: Iterator<Item = Numeral>>(iter: I) -> Self {
        Numeral(iter.map(|n| n.0).product())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumeralConfig;

    #[test]
    fn arithmetic_delegates_to_i64() {
        let a = Numeral(50);
        let b = Numeral(12);
        let i = 8i64;

        let mut c = a + b;
        assert_eq!(c, 62);
        c += b;
        assert_eq!(c, 74);
        assert_eq!(b + i, 20);
        assert_eq!(i + b, 20);
        c += i;
        assert_eq!(c, 82);

        assert_eq!(a - b, 38);
        assert_eq!(b - i, 4);
        assert_eq!(i - b, -4);

        assert_eq!(Numeral(50) * Numeral(100), 5_000);
        assert_eq!(Numeral(100) * 20, 2_000);
        assert_eq!(Numeral(600) / Numeral(100), 6);
        assert_eq!(200 / Numeral(100), 2);

        let mut d = Numeral(1000);
        d /= Numeral(100);
        assert_eq!(d, 10);
        d %= 3;
        assert_eq!(d, 1);
    }

    #[test]
    fn bitwise_and_shift() {
        assert_eq!(Numeral(0b1100) & Numeral(0b1010), 0b1000);
        assert_eq!(Numeral(0b1100) | 0b0011, 0b1111);
        assert_eq!(Numeral(0b1100) ^ Numeral(0b1010), 0b0110);
        assert_eq!(Numeral(1) << 4, 16);
        assert_eq!(Numeral(-16) >> 2, -4);
        assert_eq!(!Numeral(0), -1);
        assert_eq!(-Numeral(30), -30);
    }

    #[test]
    fn div_rem_and_signum() {
        let (q, r) = Numeral(30).div_rem(Numeral(20));
        assert_eq!((q, r), (Numeral(1), Numeral(10)));
        assert_eq!(Numeral(-30).signum(), -1);
        assert_eq!(Numeral::MIN.signum(), -1);
        assert_eq!(Numeral::ZERO.signum(), 0);
        assert_eq!(Numeral::MAX.checked_add(Numeral(1)), None);
    }

    #[test]
    fn comparisons_with_i64() {
        assert!(Numeral(5) < 6);
        assert!(7 > Numeral(6));
        assert!(Numeral(5) >= Numeral(5));
    }

    #[test]
    fn renderings() {
        let t = Numeral(20);
        assert_eq!(t.to_hex_string(), "0x14");
        assert_eq!(t.to_binary_string(), "0b10100");
        assert_eq!(Numeral(-20).to_hex_string(), "-0x14");
        assert_eq!(t.as_f64(), 20.0);
        assert_eq!(t.get(), 20);
    }

    #[test]
    fn explicit_codec_rendering() {
        let codec = Codec::new(NumeralConfig::default());
        assert_eq!(Numeral(20).to_roman_with(&codec), "XX");
        assert_eq!(Numeral(1145).to_roman_with(&codec), "MCXLV");
    }

    #[test]
    fn sum_and_product() {
        let total: Numeral = [Numeral(1), Numeral(2), Numeral(3)].into_iter().sum();
        assert_eq!(total, 6);
        let product: Numeral = [Numeral(2), Numeral(3), Numeral(4)].into_iter().product();
        assert_eq!(product, 24);
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&Numeral(42)).unwrap();
        assert_eq!(json, "42");
        let back: Numeral = serde_json::from_str("-7").unwrap();
        assert_eq!(back, -7);
    }
}
