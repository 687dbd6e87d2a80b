use std::{
    fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::errors::RegistryError;

use super::table::{MalformedRow, Table};

const LIST_FILE_SUFFIX: &str = ".txt";

/// A single place to store all word lists.
///
/// The registry is filled once, before any query is served, and is read-only
/// from then on. It holds no locks: share it behind an [`std::sync::Arc`] and
/// every reader sees the same immutable tables.
///
/// It is based on an [`IndexMap`] kept sorted by list name, so listing the
/// names always gives the same lexicographic order regardless of how the
/// platform enumerates directories.
#[derive(Debug, Default)]
pub struct WordListRegistry {
    registry: IndexMap<String, Table>,
}

pub fn list_name_for(file_name: &str) -> &str {
    //! Derive a list name from a source file name by dropping a trailing
    //! `.txt`, if any.

    file_name
        .strip_suffix(LIST_FILE_SUFFIX)
        .unwrap_or(file_name)
}

fn collect_sources<I>(entries: I) -> Vec<(String, PathBuf)>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    //! Keep the regular files among `entries`, sorted by file name.
    //!
    //! An entry that cannot be read is skipped with a warning.

    let mut sources = Vec::new();

    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(error) => {
                warn!("skipping unreadable directory entry: {}", error);
                continue;
            }
        };

        if !path.is_file() {
            debug!("skipping {}: not a regular file", path.display());
            continue;
        }

        let Some(file_name) = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
        else {
            continue;
        };

        sources.push((file_name, path));
    }

    sources.sort();
    sources
}

fn read_source(path: &Path, list_name: &str) -> Table {
    match fs::read(path) {
        Ok(bytes) => Table::parse(list_name, &String::from_utf8_lossy(&bytes)),
        Err(error) => {
            warn!(
                "could not read word list {} ({}): {}; registering it empty",
                list_name,
                path.display(),
                error
            );
            Table::empty(list_name)
        }
    }
}

impl WordListRegistry {
    pub fn new() -> WordListRegistry {
        //! An empty registry. Fill it with [`WordListRegistry::insert`].

        WordListRegistry {
            registry: IndexMap::new(),
        }
    }

    pub fn build(source_directory: &Path) -> Result<WordListRegistry, RegistryError> {
        //! Load every regular file of `source_directory` as a word list.
        //!
        //! Only failing to open the directory itself is an error. Entries that
        //! cannot be listed are skipped, a file that cannot be read is
        //! registered as an empty list, and malformed lines are dropped by the
        //! parser.

        let directory = fs::read_dir(source_directory).map_err(|source| {
            RegistryError::SourceDirectoryUnavailable {
                path: source_directory.to_path_buf(),
                source,
            }
        })?;

        let entries = collect_sources(directory.map(|entry| entry.map(|entry| entry.path())));

        let mut registry = WordListRegistry::new();
        for (file_name, path) in entries {
            let list_name = list_name_for(&file_name);
            registry.insert(read_source(&path, list_name));
        }

        info!(
            "loaded {} word list(s) with {} row(s) from {}; {} line(s) rejected",
            registry.len(),
            registry.total_rows(),
            source_directory.display(),
            registry.diagnostics().count()
        );

        Ok(registry)
    }

    pub fn insert(&mut self, table: Table) -> Option<Table> {
        //! Register `table` under its own name.
        //!
        //! Returns the table previously stored under that name, if any.

        let name = table.name().to_string();
        let (_, replaced) = self.registry.insert_sorted(name.clone(), table);

        if replaced.is_some() {
            warn!("word list {} was defined more than once; keeping the last", name);
        }

        replaced
    }

    pub fn lookup(&self, name: &str) -> Option<&Table> {
        self.registry.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    pub fn list_names(&self) -> Vec<String> {
        //! Get all list names, sorted.

        self.registry.keys().cloned().collect()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.registry.values()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.tables().map(Table::rows).sum()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &MalformedRow> {
        //! Every line rejected across all lists.

        self.tables().flat_map(Table::rejected)
    }
}
