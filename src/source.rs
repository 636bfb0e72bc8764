//!
//! The LLVM source tree fetcher.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use crate::executor::Executor;

///
/// Makes sure the `branch` of `repository` is checked out into the dependency root.
///
/// An existing source tree is reused as is.
///
pub fn clone<E>(
    executor: &mut E,
    deps_directory: &Path,
    repository: &str,
    branch: &str,
) -> anyhow::Result<PathBuf>
where
    E: Executor,
{
    std::fs::create_dir_all(deps_directory).map_err(|error| {
        anyhow::anyhow!("Directory {:?} creating error: {}", deps_directory, error)
    })?;
    let deps_directory = deps_directory.canonicalize().map_err(|error| {
        anyhow::anyhow!("Directory {:?} resolving error: {}", deps_directory, error)
    })?;
    let llvm_directory = deps_directory.join(crate::LLVM_DIRECTORY_NAME);

    if llvm_directory.exists() {
        println!(
            "There is an LLVM local repo in {:?}, keep using it",
            llvm_directory
        );
        return Ok(llvm_directory);
    }

    executor.check_presence("git")?;
    println!("Clone LLVM to {:?} ...", llvm_directory);
    executor.execute(
        Command::new("git")
            .args(&[
                "clone",
                "--depth",
                "1",
                "--branch",
                branch,
                repository,
                crate::LLVM_DIRECTORY_NAME,
            ])
            .current_dir(deps_directory.as_path()),
        "LLVM cloning git",
    )?;

    Ok(llvm_directory)
}
