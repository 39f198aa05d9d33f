pub mod goal;
pub mod habit;
pub mod post;
pub mod task;

pub use goal::Goal;
pub use habit::Habit;
pub use post::Post;
pub use task::Task;
