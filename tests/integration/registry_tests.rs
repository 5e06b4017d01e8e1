//! Provider registry tests

#[cfg(test)]
mod tests {
    use crate::common::{FakeProvider, registry_with};
    use llm_gateway::config::{ProviderConfig, ProvidersConfig};
    use llm_gateway::{GatewayError, LLMProvider, ProviderRegistry};
    use std::sync::Arc;

    #[test]
    fn test_register_then_get() {
        let registry = ProviderRegistry::new();
        registry.register(FakeProvider::text("alpha", "hi"));

        let provider = registry.get("alpha").unwrap();
        assert_eq!(provider.name(), "alpha");
        assert!(registry.list_names().contains(&"alpha".to_string()));
    }

    #[test]
    fn test_unregister_then_get_fails() {
        let registry = registry_with(vec![FakeProvider::text("alpha", "hi")]);
        assert!(registry.unregister("alpha").is_some());

        match registry.get("alpha") {
            Err(GatewayError::NotConfigured(name)) => assert_eq!(name, "alpha"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!registry.list_names().contains(&"alpha".to_string()));
    }

    #[test]
    fn test_unregister_absent_is_noop() {
        let registry = registry_with(vec![FakeProvider::text("alpha", "hi")]);
        assert!(registry.unregister("beta").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_same_name_overwrites() {
        let first = FakeProvider::text("alpha", "first");
        let second = FakeProvider::text("alpha", "second");
        let registry = registry_with(vec![first, second.clone()]);

        assert_eq!(registry.len(), 1);
        let current = registry.get("alpha").unwrap();
        let expected: Arc<dyn LLMProvider> = second;
        assert!(Arc::ptr_eq(&current, &expected));
    }

    #[test]
    fn test_list_names_sorted() {
        let registry = registry_with(vec![
            FakeProvider::text("openai", "x"),
            FakeProvider::text("anthropic", "x"),
            FakeProvider::text("google", "x"),
        ]);
        assert_eq!(registry.list_names(), ["anthropic", "google", "openai"]);
    }

    #[test]
    fn test_from_config_registers_only_credentialed_vendors() {
        let config = ProvidersConfig {
            openai: ProviderConfig::with_api_key("sk-test"),
            anthropic: ProviderConfig::default(),
            google: ProviderConfig::with_api_key("g-test"),
            timeout: 30,
        };

        let registry = ProviderRegistry::from_config(&config);
        assert_eq!(registry.list_names(), ["google", "openai"]);
    }

    #[test]
    fn test_from_config_skips_broken_vendor() {
        let config = ProvidersConfig {
            openai: ProviderConfig {
                api_key: Some("sk-test".to_string()),
                api_base: Some("not a url".to_string()),
                api_version: None,
            },
            anthropic: ProviderConfig::with_api_key("sk-ant"),
            google: ProviderConfig::default(),
            timeout: 30,
        };

        let registry = ProviderRegistry::from_config(&config);
        assert_eq!(registry.list_names(), ["anthropic"]);
    }

    #[test]
    fn test_from_config_with_nothing_is_empty() {
        let registry = ProviderRegistry::from_config(&ProvidersConfig::default());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let registry = Arc::new(registry_with(vec![FakeProvider::text("stable", "x")]));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let name = format!("p{}", i);
                    for _ in 0..100 {
                        registry.register(FakeProvider::text(&name, "x"));
                        assert!(registry.get("stable").is_ok());
                        registry.unregister(&name);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.list_names(), ["stable"]);
    }
}
