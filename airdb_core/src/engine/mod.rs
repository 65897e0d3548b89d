pub mod format;
pub mod pipeline;
pub mod queries;
pub mod seed;
pub mod source;

pub use format::format_table;
pub use pipeline::{MutationPipeline, Outcome};
pub use queries::{select_all, select_by_column, select_by_key, summary, SummaryReport};
pub use seed::load_seed_data;
pub use source::{Acquired, FieldSource, ScriptedSource};
