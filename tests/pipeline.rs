//!
//! The LLVM builder pipeline tests.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

const PACKAGE_NAME: &str = "LLVM-16.0.6-Linux.tar.gz";

///
/// The executor simulating the side effects of `git`, `cmake` and `tar`.
///
#[derive(Debug, Default)]
struct Scripted {
    /// The program and arguments of every invocation.
    invocations: Vec<(String, Vec<String>)>,
    /// The tools checked for presence.
    checked_tools: Vec<String>,
}

impl llvm_builder::Executor for Scripted {
    fn execute(
        &mut self,
        command: &mut Command,
        _description: &str,
    ) -> Result<(), llvm_builder::Error> {
        let program = command.get_program().to_string_lossy().to_string();
        let arguments: Vec<String> = command
            .get_args()
            .map(|argument| argument.to_string_lossy().to_string())
            .collect();
        let directory = command
            .get_current_dir()
            .map(Path::to_path_buf)
            .expect("Every command has a working directory");

        match (program.as_str(), arguments.first().map(String::as_str)) {
            ("git", Some("clone")) => {
                let target = arguments.last().expect("Clone target");
                std::fs::create_dir_all(directory.join(target)).expect("Clone");
            }
            ("cmake", Some("--build")) => {
                std::fs::create_dir_all(directory.join("lib")).expect("Library directory");
                std::fs::write(directory.join("lib/libLLVMCore.a"), b"core").expect("Library");
                std::fs::write(directory.join(PACKAGE_NAME), b"package").expect("Package");
            }
            ("cmake", _) => {
                std::fs::write(directory.join("CMakeCache.txt"), b"cache").expect("Cache");
            }
            ("tar", _) => {
                let target = arguments
                    .iter()
                    .find_map(|argument| argument.strip_prefix("--directory="))
                    .map(PathBuf::from)
                    .expect("Extraction directory");
                std::fs::create_dir_all(target.join("lib")).expect("Extracted library directory");
                std::fs::write(target.join("lib/libLLVMCore.a"), b"core").expect("Library");
                std::fs::create_dir_all(target.join("include")).expect("Extracted headers");
            }
            (program, _) => panic!("Unexpected program `{}`", program),
        }

        self.invocations.push((program, arguments));
        Ok(())
    }

    fn check_presence(&mut self, tool: &str) -> Result<(), llvm_builder::Error> {
        self.checked_tools.push(tool.to_owned());
        Ok(())
    }
}

///
/// Creates a source tree holding a finished and flattened build.
///
fn finished_tree(deps_directory: &Path) {
    let lib_directory = deps_directory.join("llvm/build/lib");
    std::fs::create_dir_all(lib_directory.as_path()).expect("Build directory");
    std::fs::write(lib_directory.join("libLLVMCore.a"), b"core").expect("Library");
}

#[test]
fn default_x86_from_scratch() {
    let root = tempfile::TempDir::new().expect("Temporary directory");
    let deps_directory = root.path().join("runtime/deps");
    let mut executor = Scripted::default();

    llvm_builder::run(
        &mut executor,
        deps_directory.as_path(),
        vec![llvm_builder::Backend::X86],
        vec![],
        4,
    )
    .expect("Pipeline");

    let programs: Vec<&str> = executor
        .invocations
        .iter()
        .map(|(program, _)| program.as_str())
        .collect();
    assert_eq!(programs, vec!["git", "cmake", "cmake", "tar"]);
    assert_eq!(executor.checked_tools, vec!["git", "cmake", "tar"]);

    let configure = &executor.invocations[1].1;
    assert!(configure.contains(&"-DLLVM_TARGETS_TO_BUILD:STRING=X86".to_owned()));
    assert!(configure.contains(&"-DLLVM_ENABLE_LIBXML2:BOOL=OFF".to_owned()));
    assert!(!configure
        .iter()
        .any(|argument| argument.starts_with("-DLLVM_ENABLE_PROJECTS")));

    let llvm_directory = deps_directory.join("llvm");
    let build_directory = llvm_directory.join("build");
    assert!(llvm_directory.join(PACKAGE_NAME).is_file());
    assert!(!build_directory.join(PACKAGE_NAME).exists());
    assert!(!build_directory.join("CMakeCache.txt").exists());
    assert!(build_directory.join("lib/libLLVMCore.a").is_file());
    assert!(build_directory.join("include").is_dir());
}

#[test]
fn second_run_does_nothing() {
    let root = tempfile::TempDir::new().expect("Temporary directory");
    let deps_directory = root.path().join("deps");
    let mut executor = Scripted::default();

    llvm_builder::run(&mut executor, deps_directory.as_path(), vec![], vec![], 1)
        .expect("First run");
    executor.invocations.clear();
    executor.checked_tools.clear();

    llvm_builder::run(&mut executor, deps_directory.as_path(), vec![], vec![], 1)
        .expect("Second run");

    assert!(executor.invocations.is_empty());
    assert!(executor.checked_tools.is_empty());
    let llvm_directory = deps_directory.join("llvm");
    assert!(llvm_directory.join(PACKAGE_NAME).is_file());
    assert!(llvm_directory.join("build/lib/libLLVMCore.a").is_file());
}

#[test]
fn finished_tree_needs_no_tools() {
    let root = tempfile::TempDir::new().expect("Temporary directory");
    finished_tree(root.path());
    let mut executor = llvm_builder::SystemExecutor::new();

    llvm_builder::run(&mut executor, root.path(), vec![], vec![], 1).expect("Pipeline");

    assert!(root.path().join("llvm/build/lib/libLLVMCore.a").is_file());
}
