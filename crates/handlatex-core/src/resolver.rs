//! Option resolution.
//!
//! Three sources are merged, later ones winning key by key:
//!
//! 1. the built-in defaults,
//! 2. the options of the document's `\usepackage[...]{hand}` declaration,
//! 3. options forced on the command line.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::options::{OptionKey, OptionSet, OptionValue};

/// Sparse set of command-line overrides: only explicitly supplied flags are
/// present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    entries: BTreeMap<OptionKey, OptionValue>,
}

impl OptionOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces `key` to `value`, replacing any earlier override of `key`.
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Builder form of [`OptionOverrides::set`].
    #[must_use]
    pub fn with(mut self, key: OptionKey, value: OptionValue) -> Self {
        self.set(key, value);
        self
    }

    /// Returns `true` if no option is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the overrides in option declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}

/// Parses the raw option list of a `\usepackage[...]{hand}` declaration.
///
/// Items are separated by commas; blank items are skipped. Each item is split
/// at its first `=` and both sides are trimmed before the value is coerced to
/// the option's type. An item without `=` is read as a key with an empty
/// value.
///
/// # Errors
///
/// Returns `ConfigError::UnknownOption` for a key the hand package does not
/// define, or `ConfigError::MalformedValue` if a value does not coerce.
pub fn parse_declaration(raw: &str) -> Result<Vec<(OptionKey, OptionValue)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| -> Result<(OptionKey, OptionValue), ConfigError> {
            let (key, value) = item.split_once('=').unwrap_or((item, ""));
            let key: OptionKey = key.trim().parse()?;
            Ok((key, key.coerce(value.trim())?))
        })
        .collect()
}

/// Merges defaults, the document declaration and command-line overrides into
/// the effective option set, then validates the result.
///
/// # Errors
///
/// Returns a `ConfigError` if the declaration does not parse, an override has
/// the wrong type, or the merged bounds are inverted.
pub fn resolve(
    defaults: &OptionSet,
    declaration: &str,
    overrides: &OptionOverrides,
) -> Result<OptionSet, ConfigError> {
    let mut options = defaults.clone();

    for (key, value) in parse_declaration(declaration)? {
        options.assign(key, value)?;
    }
    for (key, value) in overrides.iter() {
        options.assign(key, value.clone())?;
    }

    options.validate()?;
    Ok(options)
}
