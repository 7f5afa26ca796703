//! The option set controlling one document transformation.
//!
//! Every option has a fixed name, a fixed type and a built-in default. Raw
//! text from the document declaration is coerced to the option's type before
//! it is stored, so an `OptionSet` is always fully typed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

/// The type registered for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Free text (command names, encoding labels).
    Text,
    /// Signed integer.
    Integer,
    /// Floating point number.
    Float,
}

impl OptionKind {
    fn describe(self) -> &'static str {
        match self {
            Self::Text => "a non-empty string",
            Self::Integer => "an integer",
            Self::Float => "a decimal number",
        }
    }
}

/// Name of a recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    /// `driver`
    Driver,
    /// `encoding`
    Encoding,
    /// `minparangle`
    MinParAngle,
    /// `maxparangle`
    MaxParAngle,
    /// `minparscale`
    MinParScale,
    /// `maxparscale`
    MaxParScale,
    /// `lowwordangle`
    LowWordAngle,
    /// `highwordangle`
    HighWordAngle,
    /// `freqword`
    FreqWord,
}

impl OptionKey {
    /// All options, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Driver,
        Self::Encoding,
        Self::MinParAngle,
        Self::MaxParAngle,
        Self::MinParScale,
        Self::MaxParScale,
        Self::LowWordAngle,
        Self::HighWordAngle,
        Self::FreqWord,
    ];

    /// The option name as written in `\usepackage[...]{hand}` and on the
    /// command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Encoding => "encoding",
            Self::MinParAngle => "minparangle",
            Self::MaxParAngle => "maxparangle",
            Self::MinParScale => "minparscale",
            Self::MaxParScale => "maxparscale",
            Self::LowWordAngle => "lowwordangle",
            Self::HighWordAngle => "highwordangle",
            Self::FreqWord => "freqword",
        }
    }

    /// The type values of this option are coerced to.
    #[must_use]
    pub fn kind(self) -> OptionKind {
        match self {
            Self::Driver | Self::Encoding => OptionKind::Text,
            Self::MinParAngle | Self::MaxParAngle | Self::LowWordAngle | Self::HighWordAngle => {
                OptionKind::Integer
            }
            Self::MinParScale | Self::MaxParScale | Self::FreqWord => OptionKind::Float,
        }
    }

    /// Coerces a raw, already trimmed value to this option's type.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MalformedValue` naming the key and the value if
    /// the text does not parse as the option's type.
    pub fn coerce(self, raw: &str) -> Result<OptionValue, ConfigError> {
        let malformed = || ConfigError::MalformedValue {
            key: self.name().to_owned(),
            value: raw.to_owned(),
            expected: self.kind().describe(),
        };

        match self.kind() {
            OptionKind::Text if raw.is_empty() => Err(malformed()),
            OptionKind::Text => Ok(OptionValue::Text(raw.to_owned())),
            OptionKind::Integer => raw
                .parse()
                .map(OptionValue::Integer)
                .map_err(|_| malformed()),
            OptionKind::Float => raw.parse().map(OptionValue::Float).map_err(|_| malformed()),
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ConfigError::UnknownOption { key: s.to_owned() })
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Value of a text option.
    Text(String),
    /// Value of an integer option.
    Integer(i32),
    /// Value of a float option.
    Float(f64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// The fully merged, typed configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSet {
    /// External typesetting command.
    pub driver: String,
    /// Text encoding label used for reading and writing.
    pub encoding: String,
    /// Lower bound of the paragraph tilt walk.
    #[serde(rename = "minparangle")]
    pub min_par_angle: i32,
    /// Upper bound of the paragraph tilt walk.
    #[serde(rename = "maxparangle")]
    pub max_par_angle: i32,
    /// Lower bound of the paragraph scale.
    #[serde(rename = "minparscale")]
    pub min_par_scale: f64,
    /// Upper bound of the paragraph scale.
    #[serde(rename = "maxparscale")]
    pub max_par_scale: f64,
    /// Lower bound of the per-word rotation.
    #[serde(rename = "lowwordangle")]
    pub low_word_angle: i32,
    /// Upper bound of the per-word rotation.
    #[serde(rename = "highwordangle")]
    pub high_word_angle: i32,
    /// Probability that a given word is rotated.
    #[serde(rename = "freqword")]
    pub freq_word: f64,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            driver: "latex".to_owned(),
            encoding: "utf-8".to_owned(),
            min_par_angle: -2,
            max_par_angle: 2,
            min_par_scale: 0.8,
            max_par_scale: 1.25,
            low_word_angle: -2,
            high_word_angle: 2,
            freq_word: 0.4,
        }
    }
}

impl OptionSet {
    /// Returns the current value of `key`.
    #[must_use]
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::Driver => OptionValue::Text(self.driver.clone()),
            OptionKey::Encoding => OptionValue::Text(self.encoding.clone()),
            OptionKey::MinParAngle => OptionValue::Integer(self.min_par_angle),
            OptionKey::MaxParAngle => OptionValue::Integer(self.max_par_angle),
            OptionKey::MinParScale => OptionValue::Float(self.min_par_scale),
            OptionKey::MaxParScale => OptionValue::Float(self.max_par_scale),
            OptionKey::LowWordAngle => OptionValue::Integer(self.low_word_angle),
            OptionKey::HighWordAngle => OptionValue::Integer(self.high_word_angle),
            OptionKey::FreqWord => OptionValue::Float(self.freq_word),
        }
    }

    /// Stores `value` under `key`. Integers are widened for float options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MalformedValue` if the value's type does not
    /// match the option's type.
    pub fn assign(&mut self, key: OptionKey, value: OptionValue) -> Result<(), ConfigError> {
        match (key, value) {
            (OptionKey::Driver, OptionValue::Text(text)) => self.driver = text,
            (OptionKey::Encoding, OptionValue::Text(text)) => self.encoding = text,
            (OptionKey::MinParAngle, OptionValue::Integer(v)) => self.min_par_angle = v,
            (OptionKey::MaxParAngle, OptionValue::Integer(v)) => self.max_par_angle = v,
            (OptionKey::LowWordAngle, OptionValue::Integer(v)) => self.low_word_angle = v,
            (OptionKey::HighWordAngle, OptionValue::Integer(v)) => self.high_word_angle = v,
            (OptionKey::MinParScale | OptionKey::MaxParScale | OptionKey::FreqWord, value) => {
                let number = match value {
                    OptionValue::Float(v) => v,
                    OptionValue::Integer(v) => f64::from(v),
                    OptionValue::Text(_) => return Err(mismatch(key, &value)),
                };
                match key {
                    OptionKey::MinParScale => self.min_par_scale = number,
                    OptionKey::MaxParScale => self.max_par_scale = number,
                    _ => self.freq_word = number,
                }
            }
            (key, value) => return Err(mismatch(key, &value)),
        }
        Ok(())
    }

    /// Checks that every lower bound is at most its upper bound.
    ///
    /// `freqword` is deliberately left unchecked: values outside `[0, 1]`
    /// make every Bernoulli trial fail or succeed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvertedBounds` for the first inverted pair. A
    /// NaN scale bound counts as inverted. Returns
    /// `ConfigError::UnboundedScale` if the scale range is not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pair(
            OptionKey::MinParAngle,
            OptionKey::MaxParAngle,
            self.min_par_angle <= self.max_par_angle,
            self,
        )?;
        check_pair(
            OptionKey::MinParScale,
            OptionKey::MaxParScale,
            self.min_par_scale <= self.max_par_scale,
            self,
        )?;
        if !(self.max_par_scale - self.min_par_scale).is_finite() {
            return Err(ConfigError::UnboundedScale {
                low: self.min_par_scale.to_string(),
                high: self.max_par_scale.to_string(),
            });
        }
        check_pair(
            OptionKey::LowWordAngle,
            OptionKey::HighWordAngle,
            self.low_word_angle <= self.high_word_angle,
            self,
        )
    }
}

fn mismatch(key: OptionKey, value: &OptionValue) -> ConfigError {
    ConfigError::MalformedValue {
        key: key.name().to_owned(),
        value: value.to_string(),
        expected: key.kind().describe(),
    }
}

fn check_pair(
    low: OptionKey,
    high: OptionKey,
    ordered: bool,
    options: &OptionSet,
) -> Result<(), ConfigError> {
    if ordered {
        return Ok(());
    }
    Err(ConfigError::InvertedBounds {
        low_key: low.name(),
        high_key: high.name(),
        low: options.get(low).to_string(),
        high: options.get(high).to_string(),
    })
}
