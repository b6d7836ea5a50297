use core::time::Duration;

use crate::{InvalidInput, Result};

/// 2^48 as a float, for reducing integer-valued floats exactly.
const WRAP_F64: f64 = 281_474_976_710_656.0;

/// Values that can be read as a millisecond timestamp.
///
/// This is how [`encode_timestamp`] accepts "a number or a date": integers,
/// integer-valued floats, durations since the epoch, [`SystemTime`]s and
/// numeric text all convert; negative, fractional, non-finite or non-numeric
/// values are rejected with [`InvalidInput`].
///
/// Conversion does not range-check against 48 bits. Large values are reduced
/// when encoded, see [`encode_timestamp`].
///
/// # Example
/// ```
/// use sortid::{InvalidInput, TimeInput};
///
/// assert_eq!(42_u64.into_millis(), Ok(42));
/// assert_eq!("1700000000000".into_millis(), Ok(1_700_000_000_000));
/// assert_eq!((-1_i64).into_millis(), Err(InvalidInput::Negative.into()));
/// assert_eq!("not a number".into_millis(), Err(InvalidInput::NotNumeric.into()));
/// ```
///
/// [`encode_timestamp`]: crate::encode_timestamp
/// [`SystemTime`]: std::time::SystemTime
pub trait TimeInput {
    /// Converts `self` into milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the value is not a non-negative,
    /// integer-valued time.
    ///
    /// [`Error::InvalidInput`]: crate::Error::InvalidInput
    fn into_millis(self) -> Result<u64>;
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl TimeInput for $ty {
                #[allow(clippy::cast_possible_truncation)]
                fn into_millis(self) -> Result<u64> {
                    Ok(self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl TimeInput for $ty {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn into_millis(self) -> Result<u64> {
                    if self < 0 {
                        return Err(InvalidInput::Negative.into());
                    }
                    Ok(self as u64)
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

impl TimeInput for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn into_millis(self) -> Result<u64> {
        if !self.is_finite() {
            return Err(InvalidInput::NotFinite.into());
        }
        if self < 0.0 {
            return Err(InvalidInput::Negative.into());
        }
        if self % 1.0 != 0.0 {
            return Err(InvalidInput::Fractional.into());
        }
        Ok((self % WRAP_F64) as u64)
    }
}

impl TimeInput for f32 {
    fn into_millis(self) -> Result<u64> {
        f64::from(self).into_millis()
    }
}

impl TimeInput for Duration {
    #[allow(clippy::cast_possible_truncation)]
    fn into_millis(self) -> Result<u64> {
        Ok(self.as_millis() as u64)
    }
}

#[cfg(feature = "std")]
impl TimeInput for std::time::SystemTime {
    fn into_millis(self) -> Result<u64> {
        self.duration_since(std::time::UNIX_EPOCH)
            .map_err(|_| InvalidInput::BeforeEpoch)?
            .into_millis()
    }
}

impl TimeInput for &str {
    fn into_millis(self) -> Result<u64> {
        let text = self.trim();
        if let Ok(int) = text.parse::<i128>() {
            return int.into_millis();
        }
        match text.parse::<f64>() {
            Ok(float) => float.into_millis(),
            Err(_) => Err(InvalidInput::NotNumeric.into()),
        }
    }
}

#[cfg(feature = "alloc")]
impl TimeInput for &alloc::string::String {
    fn into_millis(self) -> Result<u64> {
        self.as_str().into_millis()
    }
}

#[cfg(feature = "alloc")]
impl TimeInput for alloc::string::String {
    fn into_millis(self) -> Result<u64> {
        self.as_str().into_millis()
    }
}
