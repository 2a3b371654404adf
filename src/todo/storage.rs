use super::models::{Task, default_tasks};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>, StorageError>;
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Keeps the task list as a JSON array of `{label, completed}` records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        let content = fs::read_to_string(&self.path)?;
        let tasks = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let data = serde_json::to_string(tasks)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Rename over the target so readers never see a partial file.
        let temp_path = self.temp_path();
        let written = fs::write(&temp_path, data).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            fs::remove_file(&temp_path).ok();
            return Err(e.into());
        }
        Ok(())
    }
}

/// Loads the persisted tasks, substituting the sample list on any failure.
pub fn load_or_default(store: &dyn TaskStore) -> Vec<Task> {
    match store.load() {
        Ok(tasks) => {
            info!("Loaded {} tasks", tasks.len());
            tasks
        }
        Err(e) => {
            warn!("Could not load tasks, using defaults: {}", e);
            default_tasks()
        }
    }
}

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "Failed to access task file: {}", e),
            StorageError::Parse(e) => write!(f, "Failed to parse task file: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join(DEFAULT_TASKS_FILE))
    }

    #[test]
    fn test_save_then_load_preserves_order_and_flags() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let tasks = vec![
            Task {
                label: "A".to_string(),
                completed: false,
            },
            Task {
                label: "B".to_string(),
                completed: true,
            },
            Task {
                label: "Get some ☕".to_string(),
                completed: false,
            },
        ];

        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_writes_plain_json_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[Task {
            label: "Run".to_string(),
            completed: true,
        }]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, r#"[{"label":"Run","completed":true}]"#);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_overwrites_previous_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[Task::new("Old".to_string()), Task::new("Older".to_string())]).unwrap();
        store.save(&[Task::new("New".to_string())]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![Task::new("New".to_string())]);
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("tasks.json"));
        store.save(&[Task::new("Deep".to_string())]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(matches!(store.load(), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_load_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[]").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_or_default_falls_back_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(load_or_default(&store), default_tasks());
    }

    #[test]
    fn test_load_or_default_falls_back_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"label": 3}]"#).unwrap();
        assert_eq!(load_or_default(&store), default_tasks());
    }

    #[test]
    fn test_load_or_default_keeps_persisted_tasks() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let tasks = vec![Task {
            label: "Mine".to_string(),
            completed: true,
        }];
        store.save(&tasks).unwrap();
        assert_eq!(load_or_default(&store), tasks);
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("tasks.json");
        // A non-empty directory can't be replaced by a file.
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();
        let store = JsonFileStore::new(&target);

        assert!(matches!(store.save(&[Task::new("Lost".to_string())]), Err(StorageError::Io(_))));
        assert!(!store.temp_path().exists());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_save_into_unwritable_location_is_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file can't act as a parent directory.
        let store = JsonFileStore::new(blocker.join("tasks.json"));
        assert!(matches!(store.save(&[]), Err(StorageError::Io(_))));
    }
}
