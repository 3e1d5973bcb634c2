use super::actions::Action;
use crate::attachment;
use crate::planner::EncodeRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Runs slow work off the UI loop and reports results as [`Action`]s.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Read and encode an attachment; the result comes back as `Action::AttachmentEncoded`
    pub fn spawn_attachment_encode(&mut self, request: EncodeRequest) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Encode attachment {}", request.path.display());

        let handle = tokio::spawn(async move {
            let result = attachment::encode_file(&request.path, request.limit).await;
            if let Err(e) = &result {
                log::warn!("TaskManager: encoding {} failed: {}", request.path.display(), e);
            }
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(Action::AttachmentEncoded {
                generation: request.generation,
                values: request.values,
                result,
            });
        });

        self.tasks.insert(
            task_id,
            BackgroundTask { handle, description },
        );
        task_id
    }

    /// Forget tasks whose handles have completed, returning their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id).map(|task| (id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
