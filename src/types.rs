//! Core types for starsweep

use serde::{Deserialize, Serialize};

use crate::error::RowError;

/// Henry Draper catalog number
///
/// Wraps the numeric part of an HD designation. The catalog starts at HD 1;
/// a zero cursor in a checkpoint is rejected at load time rather than here.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HdNumber(pub u32);

impl HdNumber {
    /// Create a new HdNumber
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the inner u32 value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for HdNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<HdNumber> for u32 {
    fn from(number: HdNumber) -> Self {
        number.0
    }
}

impl PartialEq<u32> for HdNumber {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<HdNumber> for u32 {
    fn eq(&self, other: &HdNumber) -> bool {
        *self == other.0
    }
}

impl std::fmt::Display for HdNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HD {}", self.0)
    }
}

impl std::str::FromStr for HdNumber {
    type Err = std::num::ParseIntError;

    /// Parses both the full designation ("HD 42") and the bare number ("42")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("HD ").unwrap_or(s);
        Ok(Self(digits.parse()?))
    }
}

/// A resolved catalog object
///
/// One entry per identifier: the common name (empty when the service lists
/// none), the identifier itself, the full spectral type string, and the
/// V-band magnitude when one was published.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Common name, without catalog prefixes (e.g., "Sirius")
    pub name: String,

    /// Catalog identifier the record was resolved for (e.g., "HD 48915")
    pub ident: String,

    /// Full spectral type string as published (e.g., "A1V+DA")
    pub spectral_type: String,

    /// V-band magnitude, absent when the service lists no V flux
    pub vmag: Option<f64>,
}

impl StarRecord {
    /// Two-character spectral class: classification letter plus subclass digit.
    ///
    /// A spectral string without a subclass digit normalizes to subclass 0
    /// ("K" becomes "K0", "DA" becomes "D0"). Empty input stays empty.
    pub fn short_spectral_type(&self) -> String {
        let short: String = self.spectral_type.chars().take(2).collect();
        match short.chars().next() {
            Some(first) if !short.chars().any(|c| c.is_ascii_digit()) => format!("{first}0"),
            _ => short,
        }
    }

    /// Estimated surface temperature in Kelvin from the two-character class.
    ///
    /// Linear per-class interpolation over the subclass digit. Returns `None`
    /// for empty or unrecognized classes (white dwarfs, carbon stars).
    pub fn surface_temperature(&self) -> Option<f64> {
        let short = self.short_spectral_type();
        let mut chars = short.chars();
        let class = chars.next()?;
        let subclass = f64::from(chars.next()?.to_digit(10)?);
        let kelvin = match class.to_ascii_uppercase() {
            'M' => 2400.0 + 130.0 * subclass,
            'K' => 3700.0 + 150.0 * subclass,
            'G' => 5200.0 + 80.0 * subclass,
            'F' => 6000.0 + 150.0 * subclass,
            'A' => 7500.0 + 250.0 * subclass,
            'B' => 10_000.0 + 2_000.0 * subclass,
            'O' => 30_000.0,
            _ => return None,
        };
        Some(kelvin)
    }

    /// Serialize to one output row: `name,ident,short_spectral_type,vmag\n`.
    ///
    /// An absent magnitude serializes as an empty final field. Fails when a
    /// text field embeds the delimiter or a line break, since the row
    /// invariant (one record per line) cannot hold; callers log and drop.
    pub fn to_csv_row(&self) -> Result<String, RowError> {
        let short = self.short_spectral_type();
        let fields = [
            ("name", self.name.as_str()),
            ("ident", self.ident.as_str()),
            ("spectral_type", short.as_str()),
        ];
        for (field, value) in fields {
            if value.contains(',') || value.contains('\n') || value.contains('\r') {
                return Err(RowError::UnserializableField {
                    ident: self.ident.clone(),
                    field,
                });
            }
        }
        let vmag = match self.vmag {
            Some(mag) => mag.to_string(),
            None => String::new(),
        };
        Ok(format!("{},{},{},{}\n", self.name, self.ident, short, vmag))
    }

    /// Parse a row produced by [`to_csv_row`](Self::to_csv_row).
    ///
    /// The row stores only the two-character spectral form, so the restored
    /// record carries that form as its spectral string.
    pub fn from_csv_row(row: &str) -> Result<Self, RowError> {
        let line = row.trim_end_matches(['\n', '\r']);
        let parts: Vec<&str> = line.split(',').collect();
        let [name, ident, spectral_type, vmag] = parts.as_slice() else {
            return Err(RowError::Malformed {
                reason: format!("expected 4 fields, found {}", parts.len()),
            });
        };
        let vmag = if vmag.is_empty() {
            None
        } else {
            Some(vmag.parse().map_err(|_| RowError::Malformed {
                reason: format!("magnitude {vmag:?} is not a number"),
            })?)
        };
        Ok(Self {
            name: name.to_string(),
            ident: ident.to_string(),
            spectral_type: spectral_type.to_string(),
            vmag,
        })
    }
}
