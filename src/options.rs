//!
//! The LLVM configuration option set.
//!

use crate::backend::Backend;
use crate::project::Project;

///
/// The LLVM configuration option set.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The target backends. Never empty.
    pub targets: Vec<Backend>,
    /// The extra sub-projects.
    pub projects: Vec<Project>,
    /// Whether LLVM is linked against `libxml2`.
    pub libxml2: bool,
}

impl Options {
    /// The flags passed on every configuration.
    pub const BASELINE: [&'static str; 19] = [
        "-DCMAKE_BUILD_TYPE:STRING=Debug",
        "-DCMAKE_EXPORT_COMPILE_COMMANDS=ON",
        "-DLLVM_APPEND_VC_REV:BOOL=ON",
        "-DLLVM_BUILD_BENCHMARKS:BOOL=OFF",
        "-DLLVM_BUILD_DOCS:BOOL=OFF",
        "-DLLVM_BUILD_EXAMPLES:BOOL=OFF",
        "-DLLVM_BUILD_LLVM_DYLIB:BOOL=OFF",
        "-DLLVM_BUILD_TESTS:BOOL=OFF",
        "-DLLVM_CCACHE_BUILD:BOOL=OFF",
        "-DLLVM_ENABLE_BINDINGS:BOOL=OFF",
        "-DLLVM_ENABLE_IDE:BOOL=OFF",
        "-DLLVM_ENABLE_TERMINFO:BOOL=OFF",
        "-DLLVM_ENABLE_ZLIB:BOOL=OFF",
        "-DLLVM_INCLUDE_BENCHMARKS:BOOL=OFF",
        "-DLLVM_INCLUDE_DOCS:BOOL=OFF",
        "-DLLVM_INCLUDE_EXAMPLES:BOOL=OFF",
        "-DLLVM_INCLUDE_UTILS:BOOL=OFF",
        "-DLLVM_INCLUDE_TESTS:BOOL=OFF",
        "-DLLVM_OPTIMIZED_TABLEGEN:BOOL=ON",
    ];

    ///
    /// Assembles the option set.
    ///
    /// Falls back to the default backend if `targets` is empty.
    ///
    pub fn new(mut targets: Vec<Backend>, projects: Vec<Project>) -> Self {
        if targets.is_empty() {
            targets.push(Backend::DEFAULT);
        }
        let libxml2 = projects.iter().any(|project| project.requires_libxml2());

        Self {
            targets,
            projects,
            libxml2,
        }
    }

    ///
    /// Serializes the option set into `cmake` arguments.
    ///
    pub fn to_arguments(&self) -> Vec<String> {
        let mut arguments: Vec<String> = Self::BASELINE
            .iter()
            .map(|flag| (*flag).to_owned())
            .collect();

        arguments.push(format!(
            "-DLLVM_ENABLE_LIBXML2:BOOL={}",
            if self.libxml2 { "ON" } else { "OFF" }
        ));
        arguments.push(format!(
            "-DLLVM_TARGETS_TO_BUILD:STRING={}",
            Self::join(self.targets.as_slice())
        ));
        if !self.projects.is_empty() {
            arguments.push(format!(
                "-DLLVM_ENABLE_PROJECTS:STRING={}",
                Self::join(self.projects.as_slice())
            ));
        }

        arguments
    }

    ///
    /// Joins the values with the `cmake` list separator.
    ///
    fn join<T>(values: &[T]) -> String
    where
        T: ToString,
    {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(";")
    }
}
