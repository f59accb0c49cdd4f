pub mod record;

pub use record::{parse_input, read_input, write_output, AlignmentInput, AlignmentOutput, ScoringSchema};
