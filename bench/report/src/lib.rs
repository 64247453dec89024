mod prints;
mod types;
mod utils;

pub use types::*;
pub use utils::ratio_percent;
