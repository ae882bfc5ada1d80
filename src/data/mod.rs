mod dataset;
mod loader;

pub use dataset::QuestionDataset;
pub use loader::{LoadError, load_questions_from_json};
