pub mod label_filter;

pub use label_filter::LabelFilter;
