mod compare;
mod equal;
mod in_list;

pub use compare::{CompareRdfOp, ComparisonOperator};
pub use equal::equal;
pub use in_list::evaluate_in;
