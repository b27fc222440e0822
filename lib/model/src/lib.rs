mod coercion;
mod error;
mod into_term;
mod rdf;
mod rdf_value_arg;
mod term;
mod typed_value;
mod xsd;

pub use coercion::*;
pub use error::*;
pub use into_term::*;
pub use rdf::*;
pub use rdf_value_arg::*;
pub use term::*;
pub use typed_value::*;
pub use xsd::*;

// Re-export the oxigraph data model.
pub use oxiri::{Iri, IriParseError};
pub use oxrdf::vocab;
pub use oxrdf::{
    BlankNode, BlankNodeRef, Literal, LiteralRef, NamedNode, NamedNodeRef, Term, TermRef,
    Variable, VariableRef,
};
pub use oxsdatatypes::{
    Boolean, Date, DateTime, DayTimeDuration, Decimal, Double, Duration, Float, Integer, Time,
    TimezoneOffset, YearMonthDuration,
};
