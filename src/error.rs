// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors reported by the menu navigation components.
///
/// All variants are developer-facing contract violations: a correctly
/// configured host never triggers them during normal operation. They are
/// returned immediately at the call boundary and never absorbed, since
/// swallowing them would let the UI present an inconsistent or empty menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A page with the given name is already registered in the stack.
    DuplicateName(String),

    /// No page matches the given name or content handle.
    NotFound(String),

    /// A reset to the root page was requested, but no page named `"main"`
    /// exists. The host never established a valid menu.
    MisconfiguredRoot,

    /// The structural root content was already installed; it can be
    /// established at most once per surface.
    RootAlreadyInstalled,

    /// Reading or writing a settings file failed.
    Io(String),

    /// Serializing surface settings failed.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateName(name) => write!(f, "Duplicate page name: {}", name),
            Error::NotFound(what) => write!(f, "Not found: {}", what),
            Error::MisconfiguredRoot => {
                write!(f, "No \"main\" page exists; the menu has no root page")
            }
            Error::RootAlreadyInstalled => {
                write!(f, "The structural root content is already installed")
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
