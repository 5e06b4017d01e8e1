//! Request validation tests

#[cfg(test)]
mod tests {
    use crate::common::{generate_body, user_messages};
    use llm_gateway::utils::data::RequestValidator;
    use serde_json::json;

    #[test]
    fn test_missing_fields_reported_together() {
        let errors = RequestValidator::validate_generate_request(&json!({"options": {}}));
        for expected in [
            "Missing 'provider' field",
            "Missing 'model' field",
            "Missing 'messages' field",
        ] {
            assert!(errors.iter().any(|e| e == expected), "missing {expected:?} in {errors:?}");
        }
    }

    #[test]
    fn test_single_bad_role() {
        let mut body = generate_body("openai", "gpt-4o");
        body["messages"] = json!([
            {"role": "system", "content": "s"},
            {"role": "user", "content": "u"},
            {"role": "moderator", "content": "m"}
        ]);

        let errors = RequestValidator::validate_generate_request(&body);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Message 2: "));
        assert!(errors[0].contains("'role' must be one of: system, user, assistant"));
    }

    #[test]
    fn test_messages_not_a_list() {
        let mut body = generate_body("openai", "gpt-4o");
        body["messages"] = json!("not-a-list");

        assert_eq!(
            RequestValidator::validate_generate_request(&body),
            ["'messages' must be a list"]
        );
    }

    #[test]
    fn test_options_never_validated() {
        for options in [json!(null), json!("x"), json!([1]), json!({"temperature": "hot"})] {
            let mut body = generate_body("google", "gemini-pro");
            body["options"] = options;
            assert!(RequestValidator::validate_generate_request(&body).is_empty());
        }
    }

    #[test]
    fn test_many_valid_messages() {
        let mut body = generate_body("anthropic", "claude-3-haiku-20240307");
        body["messages"] = user_messages(&["a", "b", "c", "d", "e"]);
        assert!(RequestValidator::validate_generate_request(&body).is_empty());
    }
}
