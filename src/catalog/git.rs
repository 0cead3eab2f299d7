//! Git commands.
//!
//! Commands that may contact a remote take `allow_prompt`. When false, the
//! command runs under `env GIT_TERMINAL_PROMPT=0` so git fails instead of
//! waiting on a credential prompt nobody can answer.

use crate::{Argument, Command, SafeString};

fn git(allow_prompt: bool) -> Command {
    if allow_prompt {
        Command::new(SafeString::trusted("git"))
    } else {
        Command::new(SafeString::trusted("env"))
            .verbatim("GIT_TERMINAL_PROMPT=0")
            .verbatim("git")
    }
}

/// `git init`
pub fn init() -> Command {
    git(true).verbatim("init")
}

/// `git clone <url> <path> --quiet`
pub fn clone(url: &str, path: &str) -> Command {
    git(true)
        .verbatim("clone")
        .quoted(url)
        .quoted(path)
        .verbatim("--quiet")
}

/// Stage everything and commit it: `git add . && git commit -a -m <message>`
///
/// Runs through the shell because of the `&&`.
pub fn commit(message: &str, allow_prompt: bool) -> Command {
    git(allow_prompt)
        .verbatim("add . && git commit -a -m")
        .quoted(message)
        .verbatim("--quiet")
}

/// `git push [<remote> [<branch>]] --quiet`
pub fn push(remote: Option<&str>, branch: Option<&str>, allow_prompt: bool) -> Command {
    git(allow_prompt)
        .verbatim("push")
        .args(remote_and_branch(remote, branch))
        .verbatim("--quiet")
}

/// `git pull [<remote> [<branch>]] --quiet`
pub fn pull(remote: Option<&str>, branch: Option<&str>, allow_prompt: bool) -> Command {
    git(allow_prompt)
        .verbatim("pull")
        .args(remote_and_branch(remote, branch))
        .verbatim("--quiet")
}

/// `git submodule update [--init] [--recursive] --quiet`
pub fn submodule_update(initialize_if_needed: bool, recursive: bool, allow_prompt: bool) -> Command {
    let mut command = git(allow_prompt).verbatim("submodule").verbatim("update");
    if initialize_if_needed {
        command = command.verbatim("--init");
    }
    if recursive {
        command = command.verbatim("--recursive");
    }
    command.verbatim("--quiet")
}

/// `git checkout <branch> --quiet`
pub fn checkout(branch: &str) -> Command {
    git(true).verbatim("checkout").quoted(branch).verbatim("--quiet")
}

/// A branch is only meaningful after a remote.
fn remote_and_branch(remote: Option<&str>, branch: Option<&str>) -> Vec<Argument> {
    match remote {
        Some(remote) => {
            let mut args = vec![Argument::quoted(remote)];
            args.extend(branch.map(Argument::quoted));
            args
        }
        None => Vec::new(),
    }
}
