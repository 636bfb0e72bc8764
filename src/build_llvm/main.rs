//!
//! The LLVM framework dependency builder binary.
//!

pub mod arguments;

use std::num::NonZeroUsize;

use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => llvm_builder::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            llvm_builder::EXIT_CODE_FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();
    println!("options={:?}", arguments);

    println!(
        "{}",
        format!("========== Build LLVM for {} ==========", arguments.platform).bright_blue()
    );
    println!();

    let jobs = arguments
        .jobs
        .map(NonZeroUsize::get)
        .unwrap_or_else(num_cpus::get);
    let mut executor = llvm_builder::SystemExecutor::new();
    llvm_builder::run(
        &mut executor,
        arguments.deps_directory.as_path(),
        arguments.arch,
        arguments.project,
        jobs,
    )?;

    println!("{}", "LLVM is ready".bright_green());

    Ok(())
}
