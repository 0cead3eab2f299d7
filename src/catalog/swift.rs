//! Swift Package Manager commands.

use crate::{Command, SafeString};
use std::fmt;

/// Kind of package created by [`package_init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Library,
    Executable,
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageType::Library => write!(f, "library"),
            PackageType::Executable => write!(f, "executable"),
        }
    }
}

/// Build configuration for [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildConfiguration {
    #[default]
    Debug,
    Release,
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildConfiguration::Debug => write!(f, "debug"),
            BuildConfiguration::Release => write!(f, "release"),
        }
    }
}

fn swift() -> Command {
    Command::new(SafeString::trusted("swift"))
}

/// `swift package init --type <type>`
pub fn package_init(package_type: PackageType) -> Command {
    swift()
        .verbatim("package")
        .verbatim("init")
        .verbatim("--type")
        .verbatim(package_type.to_string())
}

/// `swift package update`
pub fn package_update() -> Command {
    swift().verbatim("package").verbatim("update")
}

/// `swift build -c <configuration>`
pub fn build(configuration: BuildConfiguration) -> Command {
    swift().verbatim("build").verbatim("-c").verbatim(configuration.to_string())
}

/// `swift test`
pub fn test() -> Command {
    swift().verbatim("test")
}
