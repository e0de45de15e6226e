use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Largest accepted precision (VESTS carries 6 digits).
pub const MAX_PRECISION: u8 = 12;

/// A fixed-precision chain amount such as `1.000 STEEM` or `2.000000 VESTS`.
///
/// The amount is held in the smallest unit of the symbol, so `1.000 STEEM`
/// is stored as `1000` with precision `3`. The textual form is the only wire
/// representation, which is also what [`Serialize`] produces.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Asset {
    amount: u64,
    precision: u8,
    symbol: String,
}

impl Asset {
    /// Creates an amount of `amount` smallest units.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidAsset`] if `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn new(amount: u64, precision: u8, symbol: impl Into<String>) -> Result<Self, TypesError> {
        let symbol = symbol.into();
        if precision > MAX_PRECISION {
            return Err(TypesError::asset(
                &symbol,
                format!("precision {precision} exceeds {MAX_PRECISION}"),
            ));
        }
        Ok(Self {
            amount,
            precision,
            symbol,
        })
    }

    pub fn zero(precision: u8, symbol: impl Into<String>) -> Result<Self, TypesError> {
        Self::new(0, precision, symbol)
    }

    /// Amount in the smallest unit of the symbol.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Amount as a floating point number of whole units.
    pub fn to_f64(&self) -> f64 {
        self.amount as f64 / 10f64.powi(i32::from(self.precision))
    }
}

impl FromStr for Asset {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (number, symbol) = match (parts.next(), parts.next(), parts.next()) {
            (Some(number), Some(symbol), None) => (number, symbol),
            _ => return Err(TypesError::asset(s, "expected '<amount> <SYMBOL>'")),
        };

        if !symbol.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(TypesError::asset(s, "symbol must be uppercase letters"));
        }

        let (whole, fraction) = match number.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (number, ""),
        };
        if whole.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(TypesError::asset(s, "amount must be an unsigned decimal"));
        }
        if fraction.contains('.') {
            return Err(TypesError::asset(s, "amount has more than one decimal point"));
        }

        let precision = u8::try_from(fraction.len())
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or_else(|| TypesError::asset(s, "too many decimal places"))?;

        let amount = format!("{whole}{fraction}")
            .parse::<u64>()
            .map_err(|e| TypesError::asset(s, e.to_string()))?;

        Self::new(amount, precision, symbol)
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.precision == 0 {
            return write!(f, "{} {}", self.amount, self.symbol);
        }
        let scale = 10u64.pow(u32::from(self.precision));
        write!(
            f,
            "{}.{:0width$} {}",
            self.amount / scale,
            self.amount % scale,
            self.symbol,
            width = usize::from(self.precision)
        )
    }
}

impl Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asset({})", self)
    }
}

impl Serialize for Asset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
