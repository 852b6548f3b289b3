pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod output;

pub use aggregate::{build_chart, Series};
pub use exec::exec;
pub use fetch::{collect_series, source_pairs, Collected, CommitSource, Skip, SourcePair};
pub use output::{file_stem, image_path, output_json, title};
