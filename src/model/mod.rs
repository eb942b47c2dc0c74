pub mod iteration;
pub mod phase;
pub mod project;
pub mod train;
pub mod version;

pub use iteration::Iteration;
pub use phase::Phase;
pub use project::Project;
pub use train::{Module, ModuleIteration, Train, TrainIteration};
