pub mod batch;
pub mod interactive;

pub use batch::run_batch;
pub use interactive::run_interactive;
