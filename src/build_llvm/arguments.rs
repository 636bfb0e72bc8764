//!
//! The LLVM builder arguments.
//!

use std::num::NonZeroUsize;
use std::path::PathBuf;

use structopt::StructOpt;

///
/// The LLVM builder arguments.
///
#[derive(Debug, StructOpt)]
#[structopt(name = "build-llvm", about = "Builds the necessary LLVM libraries")]
pub struct Arguments {
    /// The current platform.
    #[structopt(long = "platform", default_value = "linux", possible_values = &llvm_builder::Platform::VARIANTS)]
    pub platform: llvm_builder::Platform,

    /// The LLVM backends, separated by spaces, like `--arch RISCV X86`.
    #[structopt(long = "arch", possible_values = &llvm_builder::Backend::VARIANTS)]
    pub arch: Vec<llvm_builder::Backend>,

    /// The extra LLVM projects, separated by spaces, like `--project clang lldb`.
    #[structopt(long = "project", possible_values = &llvm_builder::Project::VARIANTS)]
    pub project: Vec<llvm_builder::Project>,

    /// The dependency root the LLVM source tree is cloned into.
    #[structopt(long = "deps-directory", default_value = llvm_builder::DEFAULT_DEPS_DIRECTORY)]
    pub deps_directory: PathBuf,

    /// The build parallelism. Defaults to the number of logical CPUs.
    #[structopt(long = "jobs")]
    pub jobs: Option<NonZeroUsize>,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }
}
