use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ops::{Div, DivAssign, Mul, MulAssign, Not};
use std::str::FromStr;

use thiserror::Error;

// TODO are there type bounds so this could be defined for f32 as well as f64?
/// A complex number with `f64` real and imaginary parts.
///
/// Real constants mix in directly: every arithmetic and comparison operator
/// is also defined between `Complex` and `f64` in both operand orders, with
/// the scalar treated as the complex number `(c, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { real: 0.0, imag: 0.0 };

    pub fn new(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    /// Euclidean magnitude `sqrt(real² + imag²)`.
    pub fn abs(&self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }

    /// Principal argument in radians, or `None` for the zero complex number,
    /// whose argument is undefined.
    ///
    /// Computed with the half-angle identity `2·atan(im / (re + |z|))`, which
    /// covers the whole plane except the negative real axis and the origin.
    pub fn arg(&self) -> Option<f64> {
        if self.imag != 0.0 || self.real > 0.0 {
            return Some(2.0 * (self.imag / (self.real + self.abs())).atan());
        }
        if self.real < 0.0 {
            // negative real axis
            return Some(PI);
        }
        None
    }

    /// The conjugate `(real, -imag)`.
    pub fn conj(&self) -> Complex {
        Complex::new(self.real, -self.imag)
    }

    /// Negates the imaginary part in place. See [`Complex::conj`] for the
    /// non-mutating form.
    pub fn conjugate(&mut self) {
        self.imag = -self.imag;
    }

    /// Principal square root, the root with non-negative real part.
    pub fn sqrt(&self) -> Complex {
        let abs = self.abs();
        let real = ((abs + self.real) / 2.0).sqrt();
        let imag = ((abs - self.real) / 2.0).sqrt();
        // the root lies in the same half-plane as the input
        if self.imag < 0.0 {
            Complex::new(real, -imag)
        } else {
            Complex::new(real, imag)
        }
    }

    pub fn set_real(&mut self, real: f64) {
        self.real = real;
    }

    pub fn set_imag(&mut self, imag: f64) {
        self.imag = imag;
    }

    // ordering key: magnitude first, ties broken by real then imaginary
    fn ord_key(&self) -> (f64, f64, f64) {
        (self.abs(), self.real, self.imag)
    }
}

impl Default for Complex {
    fn default() -> Complex {
        Complex::ZERO
    }
}

/// A real constant is the complex number `(c, 0)`; converting one into an
/// existing binding discards any prior imaginary part.
impl From<f64> for Complex {
    fn from(real: f64) -> Complex {
        Complex::new(real, 0.0)
    }
}

//--------------------------------------------------------------------------------------------------
// arithmetic between two complex numbers

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imag + other.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.real - other.real, self.imag - other.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.real * other.real - self.imag * other.imag,
            self.real * other.imag + self.imag * other.real,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    // division by the zero complex number is not detected; the components
    // come out of the f64 divisions as ±inf or NaN
    fn div(self, other: Complex) -> Complex {
        let denom = other.real * other.real + other.imag * other.imag;
        Complex::new(
            (self.real * other.real + self.imag * other.imag) / denom,
            (self.imag * other.real - self.real * other.imag) / denom,
        )
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Complex) {
        *self = *self + other;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Complex) {
        *self = *self - other;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Complex) {
        *self = *self * other;
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, other: Complex) {
        *self = *self / other;
    }
}

// stand-in for the `~` conjugation operator
impl Not for Complex {
    type Output = Complex;

    fn not(self) -> Complex {
        self.conj()
    }
}

//--------------------------------------------------------------------------------------------------
// arithmetic between a complex number and a real constant, in both orders

impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, c: f64) -> Complex {
        Complex::new(self.real + c, self.imag)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, n: Complex) -> Complex {
        n + self
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, c: f64) -> Complex {
        Complex::new(self.real - c, self.imag)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, n: Complex) -> Complex {
        Complex::new(self - n.real, -n.imag)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, c: f64) -> Complex {
        Complex::new(self.real * c, self.imag * c)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, n: Complex) -> Complex {
        n * self
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, c: f64) -> Complex {
        Complex::new(self.real / c, self.imag / c)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;

    fn div(self, n: Complex) -> Complex {
        let denom = n.real * n.real + n.imag * n.imag;
        Complex::new(self * n.real / denom, -self * n.imag / denom)
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, c: f64) {
        self.real += c;
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, c: f64) {
        self.real -= c;
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, c: f64) {
        self.real *= c;
        self.imag *= c;
    }
}

impl DivAssign<f64> for Complex {
    fn div_assign(&mut self, c: f64) {
        self.real /= c;
        self.imag /= c;
    }
}

//--------------------------------------------------------------------------------------------------
// comparison
//
// equality is exact component-wise comparison, no epsilon tolerance. the
// ordering sorts by magnitude, breaking magnitude ties by real part and then
// imaginary part, so it is a total order on NaN-free values and all four
// operators agree with it. a NaN component makes partial_cmp return None,
// which leaves every ordering operator false.

impl PartialEq<f64> for Complex {
    fn eq(&self, c: &f64) -> bool {
        self.real == *c && self.imag == 0.0
    }
}

impl PartialEq<Complex> for f64 {
    fn eq(&self, n: &Complex) -> bool {
        n.real == *self && n.imag == 0.0
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Complex) -> Option<Ordering> {
        self.ord_key().partial_cmp(&other.ord_key())
    }
}

impl PartialOrd<f64> for Complex {
    fn partial_cmp(&self, c: &f64) -> Option<Ordering> {
        self.ord_key().partial_cmp(&(c.abs(), *c, 0.0))
    }
}

impl PartialOrd<Complex> for f64 {
    fn partial_cmp(&self, n: &Complex) -> Option<Ordering> {
        (self.abs(), *self, 0.0).partial_cmp(&n.ord_key())
    }
}

//--------------------------------------------------------------------------------------------------
// formatting and parsing

/// Formats in j-notation: a pure real prints as a bare number, a pure
/// imaginary as `yj` (`j` and `-j` for y = ±1), and a full complex number as
/// `re+yj`, where a negative y supplies its own sign (`3-j`, `1-2.5j`).
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.real == 0.0 {
            if self.imag == 0.0 {
                return write!(f, "0");
            }
            if self.imag == 1.0 {
                return write!(f, "j");
            }
            if self.imag == -1.0 {
                return write!(f, "-j");
            }
            return write!(f, "{}j", self.imag);
        }
        if self.imag == 0.0 {
            return write!(f, "{}", self.real);
        }
        if self.imag == 1.0 {
            return write!(f, "{}+j", self.real);
        }
        if self.imag == -1.0 {
            return write!(f, "{}-j", self.real);
        }
        if self.imag > 0.0 {
            return write!(f, "{}+{}j", self.real, self.imag);
        }
        write!(f, "{}{}j", self.real, self.imag)
    }
}

/// The error returned when parsing a `Complex` from text fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseComplexError {
    #[error("expected two whitespace-separated numbers, found {found}")]
    WrongTokenCount { found: usize },
    #[error("invalid number: {0}")]
    InvalidFloat(#[from] ParseFloatError),
}

/// Parses exactly two whitespace-separated numbers, real part first:
/// `"3 4"` is the complex number `(3, 4)`.
///
/// The input format is deliberately not the `Display` format, so parsing and
/// formatting do not round-trip: `"3 4"` parses to a value that prints as
/// `3+4j`.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Complex, ParseComplexError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(ParseComplexError::WrongTokenCount { found: tokens.len() });
        }
        let real = tokens[0].parse::<f64>()?;
        let imag = tokens[1].parse::<f64>()?;
        Ok(Complex::new(real, imag))
    }
}

//--------------------------------------------------------------------------------------------------
