mod maths_utils;
pub mod perf;
pub mod time_utils;
mod vec_utils;

pub use time_utils::{TimeUtils, date_span, format_date, format_date_range};

pub(crate) use maths_utils::{average_ranks, mean, mean_of_finite, pct_change, sign};
pub(crate) use vec_utils::{are_all_elements_same, first_unordered_index, paired_finite};
