//! File system commands.

use crate::{Command, SafeString};

fn program(name: &str) -> Command {
    Command::new(SafeString::trusted(name))
}

/// `mkdir -p <path>`
pub fn create_folder(path: &str) -> Command {
    program("mkdir").verbatim("-p").quoted(path)
}

/// `echo <contents> > <path>`
///
/// The file ends with a newline after `contents`.
pub fn create_file(path: &str, contents: &str) -> Command {
    program("echo").quoted(contents).verbatim(">").quoted(path)
}

/// `cat <path>`
pub fn read_file(path: &str) -> Command {
    program("cat").quoted(path)
}

/// `cp <from> <to>`
pub fn copy_file(from: &str, to: &str) -> Command {
    program("cp").quoted(from).quoted(to)
}

/// `mv <from> <to>`
pub fn move_file(from: &str, to: &str) -> Command {
    program("mv").quoted(from).quoted(to)
}

/// `rm [-f] <path>`
pub fn remove_file(path: &str, force: bool) -> Command {
    let command = program("rm");
    let command = if force { command.verbatim("-f") } else { command };
    command.quoted(path)
}

/// `ln -s <target> <link>`
pub fn create_symlink(target: &str, link: &str) -> Command {
    program("ln").verbatim("-s").quoted(target).quoted(link)
}

/// `readlink <path>`
pub fn expand_symlink(path: &str) -> Command {
    program("readlink").quoted(path)
}
