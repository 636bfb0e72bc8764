//!
//! The LLVM target backend.
//!

use std::str::FromStr;

///
/// The LLVM target backend.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The RISC-V backend.
    RISCV,
    /// The x86 backend.
    X86,
}

impl Backend {
    /// The backend built when none is requested.
    pub const DEFAULT: Self = Self::X86;

    /// The accepted command line values.
    pub const VARIANTS: [&'static str; 2] = ["RISCV", "X86"];
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "RISCV" => Ok(Self::RISCV),
            "X86" => Ok(Self::X86),
            value => anyhow::bail!(
                "Unknown backend `{}`, expected one of {:?}",
                value,
                Self::VARIANTS
            ),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RISCV => write!(f, "RISCV"),
            Self::X86 => write!(f, "X86"),
        }
    }
}
