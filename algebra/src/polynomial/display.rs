use std::fmt::{Display, Formatter, Result};

use num_traits::{ConstOne, ConstZero};

use super::Polynomial;

/// Prints the non-zero terms from the highest degree down, e.g. `3x^3 + x + 2`.
impl<T> Display for Polynomial<T>
where
    T: Copy + Display + ConstZero + ConstOne + PartialEq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;
        for (degree, &coeff) in self.data.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;

            let is_one = coeff == T::ONE;
            match degree {
                0 => write!(f, "{coeff}")?,
                1 if is_one => f.write_str("x")?,
                1 => write!(f, "{coeff}x")?,
                _ if is_one => write!(f, "x^{degree}")?,
                _ => write!(f, "{coeff}x^{degree}")?,
            }
        }

        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
