use crate::{clock::new_entity_id, log_debug, models::Task};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            tasks: vec![
                Task::new("1", "Review documents digitally"),
                Task::new("2", "Take screen breaks"),
            ],
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends an eco-friendly, incomplete task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        if text.trim().is_empty() {
            log_debug!("Ignoring blank task");
            return None;
        }
        self.tasks.push(Task::new(new_entity_id(), text));
        self.tasks.last()
    }

    /// Flips `completed`; returns the task after the flip.
    pub fn toggle(&mut self, task_id: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.completed = !task.completed;
        Some(&*task)
    }

    pub fn remove(&mut self, task_id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == task_id)?;
        Some(self.tasks.remove(index))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
