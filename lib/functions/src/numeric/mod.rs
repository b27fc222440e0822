mod abs;
mod add;
mod ceil;
mod div;
mod floor;
mod mul;
mod rand;
mod round;
mod sub;
mod unary_minus;
mod unary_plus;

pub use abs::AbsRdfOp;
pub use add::AddRdfOp;
pub use ceil::CeilRdfOp;
pub use div::DivRdfOp;
pub use floor::FloorRdfOp;
pub use mul::MulRdfOp;
pub use self::rand::RandRdfOp;
pub use round::RoundRdfOp;
pub use sub::SubRdfOp;
pub use unary_minus::UnaryMinusRdfOp;
pub use unary_plus::UnaryPlusRdfOp;

use rdf_eval_model::EvalError;

fn overflow() -> EvalError {
    EvalError::evaluation("numeric overflow")
}
