use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::Deserialize;

/// Platform the command builder targets.
///
/// Only one platform difference matters: Windows cannot execute the phpcbf
/// script directly, so without a configured interpreter the builder prepends
/// a bare `php` for the shell to resolve. Kept as an explicit field so the
/// builder stays a pure function and tests can exercise both branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Platform of the running build
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// The coding standard phpcbf should enforce.
///
/// In YAML this is either a plain string or a mapping from project-folder
/// basename to standard name; a `_default` key in the mapping acts as the
/// fallback when no folder matches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "StandardRepr")]
pub enum Standard {
    /// One standard for every project
    Fixed(String),

    /// Standard chosen by project-folder basename
    PerFolder {
        folders: IndexMap<String, String>,
        default: Option<String>,
    },
}

/// Untyped on-disk shape of [`Standard`]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StandardRepr {
    Fixed(String),
    PerFolder(IndexMap<String, String>),
}

impl From<StandardRepr> for Standard {
    fn from(repr: StandardRepr) -> Self {
        match repr {
            StandardRepr::Fixed(standard) => Standard::Fixed(standard),
            StandardRepr::PerFolder(mut folders) => {
                let default = folders.shift_remove("_default");
                Standard::PerFolder { folders, default }
            }
        }
    }
}

impl Standard {
    /// Resolve the standard for a set of open project folders.
    ///
    /// Folders are checked in order and matched by basename against the
    /// per-folder mapping; the `_default` entry is the fallback. Resolution
    /// always terminates in a string, possibly empty.
    pub fn resolve(&self, working_folders: &[Utf8PathBuf]) -> String {
        match self {
            Standard::Fixed(standard) => standard.clone(),
            Standard::PerFolder { folders, default } => {
                for folder in working_folders {
                    if let Some(name) = folder.file_name() {
                        if let Some(standard) = folders.get(name) {
                            return standard.clone();
                        }
                    }
                }
                default.clone().unwrap_or_default()
            }
        }
    }
}

/// Immutable configuration snapshot for one pipeline run.
///
/// Built once per invocation by [`crate::config::ConfigManager`] and passed
/// by reference through every stage; reloading produces a new snapshot and
/// never mutates one an in-flight run can see.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
    /// PHP interpreter used to run both tools; `php -l` does the linting
    pub interpreter_path: Option<String>,

    /// Path to the phpcbf script, passed to the interpreter in fix mode
    pub fixer_path: String,

    /// Coding standard, absent to let phpcbf find `phpcs.xml` itself
    pub standard: Option<Standard>,

    /// Extra arguments appended verbatim to both lint and fix commands
    pub additional_args: Vec<String>,

    /// Run the pipeline automatically from the before-save hook
    pub fix_on_save: bool,

    #[serde(skip)]
    pub platform: Platform,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            interpreter_path: None,
            fixer_path: String::new(),
            standard: None,
            additional_args: Vec::new(),
            fix_on_save: false,
            platform: Platform::current(),
        }
    }
}
