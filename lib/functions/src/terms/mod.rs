mod bnode;
mod datatype;
mod iri;
mod is_blank;
mod is_iri;
mod is_literal;
mod is_numeric;
mod lang;
mod same_term;
mod term_str;
mod strdt;
mod strlang;
mod struuid;
mod uuid;

pub use bnode::BNodeRdfOp;
pub use datatype::DatatypeRdfOp;
pub use iri::IriRdfOp;
pub use is_blank::IsBlankRdfOp;
pub use is_iri::IsIriRdfOp;
pub use is_literal::IsLiteralRdfOp;
pub use is_numeric::IsNumericRdfOp;
pub use lang::LangRdfOp;
pub use same_term::SameTermRdfOp;
pub use term_str::StrRdfOp;
pub use self::uuid::UuidRdfOp;
pub use strdt::StrDtRdfOp;
pub use strlang::StrLangRdfOp;
pub use struuid::StrUuidRdfOp;
