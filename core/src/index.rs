//! Index resolution for positional list operations.
//!
//! Positional operations accept any [`ListIndex`] so that values arriving
//! from loosely typed sources (floats, signed integers) are validated in one
//! place. An index resolves only if it is a finite, non-negative integer; the
//! list then checks it against its length.

use std::fmt::Display;

/// A value that may name a position in a list.
pub trait ListIndex: Copy + Display {
    /// Returns the zero-based position, or `None` if the value can never be
    /// a valid position (negative, fractional, NaN or infinite).
    fn position(self) -> Option<usize>;

    /// Text naming this index in error messages
    fn label(self) -> String {
        self.to_string()
    }
}

impl ListIndex for usize {
    fn position(self) -> Option<usize> {
        Some(self)
    }
}

macro_rules! impl_list_index_via_try_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ListIndex for $ty {
                fn position(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_list_index_via_try_from!(u32, u64, i32, i64, isize);

impl ListIndex for f64 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )] // guarded: finite, integral and within usize range
    fn position(self) -> Option<usize> {
        if self.is_finite() && self >= 0.0 && self.fract() == 0.0 && self <= usize::MAX as f64 {
            Some(self as usize)
        } else {
            None
        }
    }

    fn label(self) -> String {
        if self.is_nan() {
            "NaN".to_string()
        } else if self.is_infinite() {
            if self > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
        } else {
            self.to_string()
        }
    }
}
