use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{Invocation, ProcessExit, ProcessRunner};

/// Records invocations and materialises a template tree on `git clone`.
#[derive(Default)]
pub struct FakeProcessRunner {
    invocations: Mutex<Vec<Invocation>>,
    exits: HashMap<String, ProcessExit>,
    missing: Vec<String>,
    template_files: Vec<(String, Vec<u8>)>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit status reported for every run of `program`.
    pub fn with_exit(mut self, program: &str, exit: ProcessExit) -> Self {
        self.exits.insert(program.to_string(), exit);
        self
    }

    /// `program` cannot be spawned.
    pub fn with_missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// File written into the clone target by a successful `git clone`.
    pub fn with_template_file(mut self, path: &str, content: impl AsRef<[u8]>) -> Self {
        self.template_files.push((path.to_string(), content.as_ref().to_vec()));
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.invocations().into_iter().map(|i| i.program).collect()
    }

    fn materialise_clone(&self, invocation: &Invocation) -> io::Result<()> {
        // git clone [...] <repo> <target> --depth 1
        let target = &invocation.args[invocation.args.len() - 3];
        let root = invocation.cwd.join(target);
        fs::create_dir_all(root.join(".git"))?;
        fs::write(root.join(".git").join("HEAD"), "ref: refs/heads/main\n")?;
        for (path, content) in &self.template_files {
            write_file(&root.join(path), content)?;
        }
        Ok(())
    }
}

fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.missing.contains(&invocation.program) {
            return Err(AppError::Spawn {
                program: invocation.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            });
        }

        let exit = self.exits.get(&invocation.program).copied().unwrap_or(ProcessExit::success());
        let is_clone =
            invocation.program == "git" && invocation.args.first().is_some_and(|a| a == "clone");
        if exit.is_success() && is_clone {
            self.materialise_clone(invocation)?;
        }
        Ok(exit)
    }
}
