//! Command line definition.

use std::path::PathBuf;

use clap::Parser;
use handlatex_core::options::{OptionKey, OptionValue};
use handlatex_core::resolver::OptionOverrides;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Copyright (C) 2008 Sylvain Fourmanoit <syfou@users.sourceforge.net>\n",
    "\n",
    "This is free software. You may redistribute copies of it under the terms of the\n",
    "GNU General Public License version 2 <http://www.gnu.org/licenses/gpl2.html>.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Process the LaTeX input file with the handwriting driver.
#[derive(Debug, Parser)]
#[command(name = "handlatex", version, long_version = LONG_VERSION)]
pub struct Cli {
    /// LaTeX document using the hand package.
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Force driver option (see hand package doc; default value: latex).
    #[arg(long, value_name = "COMMAND")]
    pub driver: Option<String>,

    /// Force encoding option (see hand package doc; default value: utf-8).
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Force minparangle option (see hand package doc; default value: -2).
    #[arg(long, allow_negative_numbers = true)]
    pub minparangle: Option<i32>,

    /// Force maxparangle option (see hand package doc; default value: 2).
    #[arg(long, allow_negative_numbers = true)]
    pub maxparangle: Option<i32>,

    /// Force minparscale option (see hand package doc; default value: 0.8).
    #[arg(long, allow_negative_numbers = true)]
    pub minparscale: Option<f64>,

    /// Force maxparscale option (see hand package doc; default value: 1.25).
    #[arg(long, allow_negative_numbers = true)]
    pub maxparscale: Option<f64>,

    /// Force lowwordangle option (see hand package doc; default value: -2).
    #[arg(long, allow_negative_numbers = true)]
    pub lowwordangle: Option<i32>,

    /// Force highwordangle option (see hand package doc; default value: 2).
    #[arg(long, allow_negative_numbers = true)]
    pub highwordangle: Option<i32>,

    /// Force freqword option (see hand package doc; default value: 0.4).
    #[arg(long, allow_negative_numbers = true)]
    pub freqword: Option<f64>,

    /// Seed the randomizer for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the output and batch files without running the driver.
    #[arg(long)]
    pub no_driver: bool,

    /// Log debug messages to the console.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collects the option flags that were actually given.
    #[must_use]
    pub fn overrides(&self) -> OptionOverrides {
        let mut overrides = OptionOverrides::new();

        let texts = [
            (OptionKey::Driver, &self.driver),
            (OptionKey::Encoding, &self.encoding),
        ];
        let integers = [
            (OptionKey::MinParAngle, self.minparangle),
            (OptionKey::MaxParAngle, self.maxparangle),
            (OptionKey::LowWordAngle, self.lowwordangle),
            (OptionKey::HighWordAngle, self.highwordangle),
        ];
        let floats = [
            (OptionKey::MinParScale, self.minparscale),
            (OptionKey::MaxParScale, self.maxparscale),
            (OptionKey::FreqWord, self.freqword),
        ];

        for (key, value) in texts {
            if let Some(value) = value {
                overrides.set(key, OptionValue::Text(value.clone()));
            }
        }
        for (key, value) in integers {
            if let Some(value) = value {
                overrides.set(key, OptionValue::Integer(value));
            }
        }
        for (key, value) in floats {
            if let Some(value) = value {
                overrides.set(key, OptionValue::Float(value));
            }
        }

        overrides
    }
}
