//!
//! The host platform.
//!

use std::str::FromStr;

///
/// The host platform the toolchain is built for.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// The only supported platform.
    #[default]
    Linux,
}

impl Platform {
    /// The accepted command line values.
    pub const VARIANTS: [&'static str; 1] = ["linux"];
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "linux" => Ok(Self::Linux),
            value => anyhow::bail!(
                "Unsupported platform `{}`, expected one of {:?}",
                value,
                Self::VARIANTS
            ),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
        }
    }
}
