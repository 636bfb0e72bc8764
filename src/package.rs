//!
//! The LLVM package flattener.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use crate::error::Error;
use crate::executor::Executor;

///
/// Replaces the build directory with the contents of the package built into it.
///
/// The package is moved next to the build directory and kept there.
/// Returns its new path, or `None` if the build directory holds no package.
///
pub fn repackage<E>(executor: &mut E, llvm_directory: &Path) -> anyhow::Result<Option<PathBuf>>
where
    E: Executor,
{
    let build_directory = llvm_directory.join(crate::BUILD_DIRECTORY_NAME);

    let mut packages = find_packages(build_directory.as_path())?;
    let package = match packages.len() {
        0 => return Ok(None),
        1 => packages.remove(0),
        _ => return Err(Error::AmbiguousArchive(packages).into()),
    };
    executor.check_presence("tar")?;

    let package_name = package
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Package {:?} has no file name", package))?;
    let moved_package = llvm_directory.join(package_name);

    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::move_file(package.as_path(), moved_package.as_path(), &options).map_err(
        |error| anyhow::anyhow!("Package {:?} moving error: {}", package, error),
    )?;

    std::fs::remove_dir_all(build_directory.as_path()).map_err(|error| {
        anyhow::anyhow!("Directory {:?} removing error: {}", build_directory, error)
    })?;
    std::fs::create_dir(build_directory.as_path()).map_err(|error| {
        anyhow::anyhow!("Directory {:?} creating error: {}", build_directory, error)
    })?;

    let mut directory_argument = std::ffi::OsString::from("--directory=");
    directory_argument.push(build_directory.as_os_str());
    executor.execute(
        Command::new("tar")
            .arg("xf")
            .arg(moved_package.as_os_str())
            .arg("--strip-components=1")
            .arg(directory_argument)
            .current_dir(llvm_directory),
        "LLVM package extracting tar",
    )?;

    Ok(Some(moved_package))
}

///
/// Lists the package archives in the build directory, sorted by name.
///
/// A missing directory holds no packages.
///
fn find_packages(build_directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !build_directory.is_dir() {
        return Ok(vec![]);
    }

    let pattern = regex::Regex::new(crate::ARCHIVE_PATTERN)?;
    let entries = std::fs::read_dir(build_directory).map_err(|error| {
        anyhow::anyhow!("Directory {:?} reading error: {}", build_directory, error)
    })?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if pattern.is_match(entry.file_name().to_string_lossy().as_ref()) {
            packages.push(entry.path());
        }
    }
    packages.sort();

    Ok(packages)
}
