//! Parser for the classifier call's free-text reply.
//!
//! The classifier is asked to answer with exactly one of two forms: the
//! literal token `RESPONDER`, or `BUSCAR:` followed by a search query.
//! Model output is not guaranteed to conform, so the parser never fails:
//! anything that is not a well-formed `BUSCAR:` line routes to the direct
//! answer path.

/// Routing decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The classifier extracted a web search query.
    NeedsSearch(String),
    /// Answer from the model's own knowledge. Also the fallback for any
    /// output that doesn't match the grammar.
    DirectAnswer,
}

/// Prefix the classifier uses to request a search. Case-sensitive, anchored
/// at the start of the trimmed reply.
const SEARCH_PREFIX: &str = "BUSCAR:";

pub fn parse_classification(raw: &str) -> Classification {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix(SEARCH_PREFIX) {
        let query = rest.trim();
        if query.is_empty() {
            // A bare "BUSCAR:" carries no query to run. Explicit policy:
            // treat it the same as RESPONDER rather than erroring out.
            log::warn!("Classifier emitted BUSCAR: with an empty query, falling back to direct answer");
            return Classification::DirectAnswer;
        }
        return Classification::NeedsSearch(query.to_string());
    }

    Classification::DirectAnswer
}
