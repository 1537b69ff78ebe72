//! Fixed prompt templates for the two orchestrator calls.

use serde_json::Value;

/// Template for the classifier call. Instructs the model to emit exactly one
/// of the two grammar forms that `parse_classification` understands.
pub fn build_classifier_prompt(user_prompt: &str) -> String {
    format!(
        "You are the routing step of an assistant. Decide whether answering the \
         user's question requires live information from the web.\n\n\
         Reply with exactly one of these two forms and nothing else:\n\
         RESPONDER\n\
         BUSCAR: <optimized search query>\n\n\
         Use RESPONDER when the question can be answered from general knowledge. \
         Use BUSCAR: when answering requires fresh information such as news, \
         weather, prices, or recent events, replacing <optimized search query> \
         with the best web search query for the question.\n\n\
         User question: {}",
        user_prompt
    )
}

/// Template for the synthesis call after a search. The payload is embedded
/// verbatim, including error payloads from a failed invocation, so the model
/// can decide how to respond when the lookup degraded.
pub fn build_synthesis_prompt(user_prompt: &str, payload: &Value) -> String {
    format!(
        "Answer the user's question using the web search results below. If the \
         results contain an error instead of data, answer as well as you can \
         from your own knowledge and mention that the live lookup was \
         unavailable.\n\n\
         User question: {}\n\n\
         Search results (JSON):\n{}",
        user_prompt, payload
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifier_prompt_embeds_question_and_grammar() {
        let prompt = build_classifier_prompt("What's 2+2?");

        assert!(prompt.contains("What's 2+2?"));
        assert!(prompt.contains("RESPONDER"));
        assert!(prompt.contains("BUSCAR:"));
    }

    #[test]
    fn test_synthesis_prompt_embeds_payload() {
        let payload = json!({"results": [{"title": "Paris weather", "snippet": "18C, cloudy"}]});
        let prompt = build_synthesis_prompt("What's today's weather in Paris?", &payload);

        assert!(prompt.contains("What's today's weather in Paris?"));
        assert!(prompt.contains("Paris weather"));
        assert!(prompt.contains("18C, cloudy"));
    }

    #[test]
    fn test_synthesis_prompt_embeds_error_payload() {
        let payload = json!({
            "error_kind": "request_failed",
            "message": "operation timed out",
            "query": "weather Paris today"
        });
        let prompt = build_synthesis_prompt("What's today's weather in Paris?", &payload);

        assert!(prompt.contains("request_failed"));
        assert!(prompt.contains("operation timed out"));
    }
}
