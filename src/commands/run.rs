//! `shellout run` and `shellout line`.

use crate::cli::{ExecArgs, LineArgs, RunArgs};
use serde::Serialize;
use shellout::{
    Argument, Command, CommandOutput, Error, OutputSink, Result, RunOptions, Runner, SafeString,
    ShellOutError,
};
use std::io;
use std::time::Duration;

/// Result of a run, as printed by `--json`.
#[derive(Debug, Serialize)]
struct RunReport {
    success: bool,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl RunReport {
    fn success(output: &CommandOutput) -> Self {
        Self {
            success: true,
            exit_code: 0,
            stdout: output.stdout.clone(),
            stderr: output.stderr.clone(),
        }
    }

    fn failure(error: &ShellOutError) -> Self {
        Self {
            success: false,
            exit_code: error.exit_code(),
            stdout: error.output(),
            stderr: error.message(),
        }
    }
}

/// Run a program with literal arguments.
pub fn cmd_run(runner: &Runner, args: RunArgs) -> Result<()> {
    let program = SafeString::validate(args.program)?;
    let command = Command::with_arguments(program, args.args.into_iter().map(Argument::Quoted));
    let options = run_options(&args.exec);

    let result = if args.shell {
        runner.run_in_shell(&command, options)
    } else {
        runner.run(&command, options)
    };
    report(result, &args.exec)
}

/// Run a flat command line through the shell.
pub fn cmd_line(runner: &Runner, args: LineArgs) -> Result<()> {
    let options = run_options(&args.exec);
    report(runner.run_line(&args.line, options), &args.exec)
}

fn run_options(exec: &ExecArgs) -> RunOptions {
    let mut options = RunOptions::at(exec.at.as_str());
    for (key, value) in &exec.env {
        options = options.env(key, value);
    }
    if let Some(secs) = exec.timeout {
        options = options.timeout(Duration::from_secs(secs));
    }
    if exec.tee {
        options = options
            .output_sink(OutputSink::Stdout)
            .error_sink(OutputSink::Stderr);
    }
    options
}

fn report(result: Result<CommandOutput>, exec: &ExecArgs) -> Result<()> {
    match result {
        Ok(output) => {
            if exec.json {
                println!("{}", to_json(&RunReport::success(&output))?);
            } else if !exec.tee {
                if !output.stdout.is_empty() {
                    println!("{}", output.stdout);
                }
                if !output.stderr.is_empty() {
                    eprintln!("{}", output.stderr);
                }
            }
            Ok(())
        }
        Err(Error::Failed(failure)) if exec.json => {
            println!("{}", to_json(&RunReport::failure(&failure))?);
            Err(Error::Failed(failure))
        }
        Err(e) => Err(e),
    }
}

fn to_json(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| Error::Io {
        context: "failed to serialize result".to_string(),
        source: io::Error::other(e),
    })
}
