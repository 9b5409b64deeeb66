mod param_set;
mod transaction;

pub use param_set::ParamSet;
pub use transaction::{is_settled, response_message};
