use crate::equal;
use rdf_eval_model::{EvalResult, Term};

/// Evaluates `needle IN (candidates)`.
///
/// Candidates are consumed until one equals `needle`, which makes the result `true` even if an
/// earlier candidate failed. Without a match, the first error is returned, or `false` if there
/// was none. `NOT IN` is the negation of this result.
pub fn evaluate_in<I>(needle: &Term, candidates: I) -> EvalResult<bool>
where
    I: IntoIterator<Item = EvalResult<Term>>,
{
    let mut first_error = None;
    for candidate in candidates {
        match candidate.and_then(|candidate| equal(needle, &candidate)) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }
    first_error.map_or(Ok(false), Err)
}
