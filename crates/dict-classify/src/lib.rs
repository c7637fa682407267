pub mod category;
pub mod classify;
pub mod dictionary;
pub mod pipeline;
pub mod report;

pub use crate::category::Category;
pub use crate::classify::{
    classify_dictionary, matching_categories, primary_category, Classification,
};
pub use crate::dictionary::{load_dictionary, Dictionary};
pub use crate::pipeline::{run, Outputs};
pub use crate::report::Statistics;
