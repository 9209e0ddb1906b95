pub mod pipeline;
pub mod raw_reader;

pub use pipeline::{JobReport, QuantizePipeline};
pub use raw_reader::{discover_inputs, read_raw, RawImage};
