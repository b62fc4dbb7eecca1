pub mod handle;
pub mod manager;
pub mod types;

pub use handle::{
    CancellableTask,
    TaskHandle,
};
pub use manager::TaskManager;
pub use types::{
    Effect,
    TaskResult,
};
