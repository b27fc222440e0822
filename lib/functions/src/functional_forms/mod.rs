mod and;
mod coalesce;
mod ebv;
mod not;
mod or;

pub use and::evaluate_and;
pub use coalesce::evaluate_coalesce;
pub use ebv::effective_boolean_value;
pub use not::NotRdfOp;
pub use or::evaluate_or;
