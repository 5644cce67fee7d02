use crate::words::WordList;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};
use std::{env, error, fmt};
use tracing::debug;

#[derive(Debug)]
pub enum SourceError {
    NotFound(PathBuf),
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "'{}' not found", path.display()),
            SourceError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for SourceError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SourceError::NotFound(_) => None,
            SourceError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        SourceError::Io(e)
    }
}

/// A copper list binary on disk, addressed by its absolute path.
#[derive(Clone, Debug, PartialEq)]
pub struct CopperSource {
    path: PathBuf,
}

impl CopperSource {
    /// Resolves `path` against the current directory.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<CopperSource, SourceError> {
        Ok(CopperSource::resolve_from(&env::current_dir()?, path))
    }

    /// Makes `path` absolute against `base` and folds `.` and `..` away.
    /// Purely lexical; symlinks are left alone.
    pub fn resolve_from<P: AsRef<Path>>(base: &Path, path: P) -> CopperSource {
        let joined = base.join(path);

        let path = joined
            .components()
            .fold(PathBuf::new(), |mut acc, cur| {
                match cur {
                    Component::CurDir => {}
                    Component::ParentDir => {
                        acc.pop();
                    }
                    c => acc.push(c.as_os_str()),
                }

                acc
            });

        debug!("resolved input to {}", path.display());

        CopperSource { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name with the directories stripped.
    pub fn name(&self) -> Cow<'_, str> {
        match self.path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => self.path.to_string_lossy(),
        }
    }

    /// Reads the whole file. The handle is closed before this returns.
    pub fn read(&self) -> Result<WordList, SourceError> {
        if !self.path.is_file() {
            debug!("{} is missing or not a regular file", self.path.display());

            return Err(SourceError::NotFound(self.path.clone()));
        }

        let words = WordList::read(BufReader::new(File::open(&self.path)?))?;

        debug!(
            "read {} pairs ({} words) from {}",
            words.len(),
            words.word_count(),
            self.path.display()
        );

        Ok(words)
    }
}
