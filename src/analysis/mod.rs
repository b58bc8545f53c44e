pub mod aggregator;
pub mod pipeline;
pub mod projects;
pub mod session;

pub use aggregator::{aggregate_languages, LanguageAggregator, LanguageTotals, TOP_LANGUAGES};
pub use pipeline::ProfilePipeline;
pub use projects::{all_tags, most_recent, ProjectFilter, ProjectTransformer, TagFilter};
pub use session::ProfileSession;
