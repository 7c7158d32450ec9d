//! Running an external SAT solver on a DIMACS file.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::error::SolverError;

/// Exit code of a solver that found a model.
pub const EXIT_SAT: i32 = 10;
/// Exit code of a solver that proved unsatisfiability.
pub const EXIT_UNSAT: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Satisfiable,
    Unsatisfiable,
    /// Any other exit, `None` if the process was killed by a signal.
    Unknown(Option<i32>),
}

/// What the solver printed and how it exited.
#[derive(Debug, Clone)]
pub struct SolverRun {
    code: Option<i32>,
    stdout: String,
}

impl SolverRun {
    pub fn new(code: Option<i32>, stdout: String) -> Self {
        SolverRun { code, stdout }
    }

    pub fn status(&self) -> SolverStatus {
        match self.code {
            Some(EXIT_SAT) => SolverStatus::Satisfiable,
            Some(EXIT_UNSAT) => SolverStatus::Unsatisfiable,
            code => SolverStatus::Unknown(code),
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }
}

/// A solver executable accepting `-model -verb=<n> <file>`, e.g. glucose.
#[derive(Debug, Clone)]
pub struct Solver {
    program: String,
    verbosity: u8,
}

impl Solver {
    pub fn new(program: impl Into<String>, verbosity: u8) -> Self {
        Solver {
            program: program.into(),
            verbosity,
        }
    }

    /// Build the command line. A program that exists as a file relative to the working directory
    /// is run from there, anything else is looked up in `PATH`.
    pub fn command(&self, cnf: &Path) -> Command {
        let program = if Path::new(&self.program).is_file() {
            Path::new(".").join(&self.program)
        } else {
            PathBuf::from(&self.program)
        };
        let mut command = Command::new(program);
        command
            .arg("-model")
            .arg(format!("-verb={}", self.verbosity))
            .arg(cnf);
        command
    }

    /// Run the solver on `cnf` and wait for it to exit. Stderr is passed through.
    pub fn run(&self, cnf: impl AsRef<Path>) -> Result<SolverRun, SolverError> {
        let cnf = cnf.as_ref();
        if !cnf.is_file() {
            return Err(SolverError::MissingCnf(cnf.to_path_buf()));
        }

        tracing::info!("running {} on {}", self.program, cnf.display());
        let output = self
            .command(cnf)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| SolverError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        tracing::info!("solver exited with {}", output.status);

        Ok(SolverRun::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn status_from_exit_code() {
        let status = |code| SolverRun::new(code, String::new()).status();
        assert_eq!(status(Some(10)), SolverStatus::Satisfiable);
        assert_eq!(status(Some(20)), SolverStatus::Unsatisfiable);
        assert_eq!(status(Some(0)), SolverStatus::Unknown(Some(0)));
        assert_eq!(status(None), SolverStatus::Unknown(None));
    }

    #[test]
    fn command_line() {
        let solver = Solver::new("surely-not-a-file-here", 0);
        let command = solver.command(Path::new("out.cnf"));
        assert_eq!(command.get_program(), OsStr::new("surely-not-a-file-here"));
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![OsStr::new("-model"), OsStr::new("-verb=0"), OsStr::new("out.cnf")]
        );
    }

    #[test]
    fn existing_file_is_run_explicitly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver");
        std::fs::write(&path, "").unwrap();
        let solver = Solver::new(path.to_string_lossy(), 1);
        assert_eq!(solver.command(Path::new("x.cnf")).get_program(), path.as_os_str());
    }

    #[test]
    fn missing_cnf() {
        let dir = tempfile::tempdir().unwrap();
        let cnf = dir.path().join("missing.cnf");
        assert!(matches!(
            Solver::new("glucose-syrup", 1).run(&cnf),
            Err(SolverError::MissingCnf(p)) if p == cnf
        ));
    }

    #[cfg(unix)]
    #[test]
    fn runs_fake_solver() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let cnf = dir.path().join("in.cnf");
        std::fs::write(&cnf, "p cnf 1 1\n1 0\n").unwrap();

        let script = dir.path().join("fake-solver");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"c args $1 $2\"\necho \"s SATISFIABLE\"\necho \"v 1 0\"\nexit 10\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let run = Solver::new(script.to_string_lossy(), 1).run(&cnf).unwrap();
        assert_eq!(run.status(), SolverStatus::Satisfiable);
        assert_eq!(
            run.stdout().lines().collect::<Vec<_>>(),
            vec!["c args -model -verb=1", "s SATISFIABLE", "v 1 0"]
        );

        let missing = dir.path().join("no-such-solver");
        assert!(matches!(
            Solver::new(missing.to_string_lossy(), 1).run(&cnf),
            Err(SolverError::Spawn { .. })
        ));
    }
}
