//!
//! The LLVM build orchestrator.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use colored::Colorize;

use crate::error::Error;
use crate::executor::Executor;
use crate::options::Options;

///
/// Configures and builds the LLVM package in the `build` subdirectory of the source tree.
///
/// Returns the build directory. A finished build found there is left untouched,
/// since incremental rebuilds are not supported.
///
pub fn build<E>(
    executor: &mut E,
    llvm_directory: &Path,
    options: &Options,
    jobs: usize,
) -> anyhow::Result<PathBuf>
where
    E: Executor,
{
    if !llvm_directory.exists() {
        return Err(Error::SourceTreeMissing(llvm_directory.to_owned()).into());
    }

    let build_directory = llvm_directory.join(crate::BUILD_DIRECTORY_NAME);
    if !build_directory.exists() {
        std::fs::create_dir(build_directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Directory {:?} creating error: {}", build_directory, error)
        })?;
    }

    if build_directory.join(crate::MARKER_ARTIFACT).exists() {
        println!(
            "{}",
            format!("Please remove {:?} manually and try again", build_directory).yellow()
        );
        return Ok(build_directory);
    }

    executor.check_presence("cmake")?;

    let mut arguments = options.to_arguments();
    arguments.push(format!("../{}", crate::LLVM_DIRECTORY_NAME));
    println!("cmake {}", shell_words::join(arguments.iter()));

    executor.execute(
        Command::new("cmake")
            .args(arguments.as_slice())
            .current_dir(build_directory.as_path()),
        "LLVM building cmake",
    )?;

    executor.execute(
        Command::new("cmake")
            .args(&[
                "--build",
                ".",
                "--target",
                "package",
                "--parallel",
                jobs.to_string().as_str(),
            ])
            .current_dir(build_directory.as_path()),
        "LLVM packaging cmake",
    )?;

    Ok(build_directory)
}
