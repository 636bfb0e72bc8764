//!
//! The LLVM framework dependency builder library.
//!

pub mod backend;
pub mod build;
pub mod error;
pub mod executor;
pub mod options;
pub mod package;
pub mod platform;
pub mod project;
pub mod source;

pub use self::backend::Backend;
pub use self::error::Error;
pub use self::executor::Executor;
pub use self::executor::SystemExecutor;
pub use self::options::Options;
pub use self::platform::Platform;
pub use self::project::Project;

use std::path::Path;

use colored::Colorize;

/// The process success exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The pinned LLVM repository.
pub const LLVM_REPOSITORY: &str = "https://github.com/llvm/llvm-project.git";

/// The pinned LLVM release branch.
pub const LLVM_BRANCH: &str = "release/16.x";

/// The source tree directory name inside the dependency root.
pub const LLVM_DIRECTORY_NAME: &str = "llvm";

/// The build directory name inside the source tree.
pub const BUILD_DIRECTORY_NAME: &str = "build";

/// The artifact whose presence means the build directory holds a finished build.
pub const MARKER_ARTIFACT: &str = "lib/libLLVMCore.a";

/// The pattern of the archive produced by the `package` target.
pub const ARCHIVE_PATTERN: &str = r"^LLVM-16.*\.tar\.gz$";

/// The default dependency root, relative to the working directory.
pub const DEFAULT_DEPS_DIRECTORY: &str = "./runtime/deps";

///
/// Runs the whole clone, build and repackage sequence.
///
pub fn run<E>(
    executor: &mut E,
    deps_directory: &Path,
    backends: Vec<Backend>,
    projects: Vec<Project>,
    jobs: usize,
) -> anyhow::Result<()>
where
    E: Executor,
{
    let options = Options::new(backends, projects);

    println!("{}", banner("CLONE LLVM"));
    let llvm_directory = source::clone(executor, deps_directory, LLVM_REPOSITORY, LLVM_BRANCH)?;
    println!();

    println!("{}", banner("BUILD LLVM"));
    build::build(executor, llvm_directory.as_path(), &options, jobs)?;
    println!();

    println!("{}", banner("PACKAGE LLVM"));
    package::repackage(executor, llvm_directory.as_path())?;
    println!();

    Ok(())
}

///
/// Formats a stage banner.
///
fn banner(title: &str) -> colored::ColoredString {
    format!("==================== {} ====================", title).bright_green()
}
