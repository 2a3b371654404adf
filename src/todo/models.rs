use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub label: String,
    pub completed: bool,
}

impl Task {
    pub fn new(label: String) -> Self {
        Self {
            label,
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Sample list used on first launch or when the record file can't be read.
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("Wake up sleeepy head 🛏️ 💤".to_string()),
        Task::new("Brush your teeth 🦷".to_string()),
        Task::new("Get some ☕".to_string()),
    ]
}
