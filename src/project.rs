//!
//! The optional LLVM sub-project.
//!

use std::str::FromStr;

///
/// The optional LLVM sub-project built alongside the core libraries.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
    /// The C family front-end.
    Clang,
    /// The debugger. Requires `libxml2`.
    Lldb,
}

impl Project {
    /// The accepted command line values.
    pub const VARIANTS: [&'static str; 2] = ["clang", "lldb"];

    ///
    /// Whether the project needs LLVM to be linked against `libxml2`.
    ///
    pub fn requires_libxml2(self) -> bool {
        matches!(self, Self::Lldb)
    }
}

impl FromStr for Project {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "clang" => Ok(Self::Clang),
            "lldb" => Ok(Self::Lldb),
            value => anyhow::bail!(
                "Unknown project `{}`, expected one of {:?}",
                value,
                Self::VARIANTS
            ),
        }
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clang => write!(f, "clang"),
            Self::Lldb => write!(f, "lldb"),
        }
    }
}
