pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks running background tasks so they can be cancelled on shutdown
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task under `task_id`
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.remove(task_id) {
            handle.abort();
        }

        // Drop handles of tasks that already finished
        self.tasks.retain(|_, handle| !handle.is_finished());

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id.to_string(), handle);
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
