use std::collections::HashMap;

use boxscore_core::{AgentDescriptor, BoxscoreError};

use crate::catalog;

/// Immutable agent registry.
///
/// Built once from a descriptor list and injected into the dispatcher, so
/// tests can substitute alternate tables without process-wide state.
pub struct AgentRegistry {
    agents: Vec<AgentDescriptor>,
    by_id: HashMap<String, usize>,
}

impl AgentRegistry {
    pub fn new(agents: Vec<AgentDescriptor>) -> Self {
        let by_id = agents
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Self { agents, by_id }
    }

    /// Registry over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(catalog::builtin_agents())
    }

    pub fn get(&self, id: &str) -> Option<&AgentDescriptor> {
        self.by_id.get(id).map(|&i| &self.agents[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentDescriptor> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Resolve an invocation to its descriptor.
    ///
    /// A method other than `invoke` fails the same way an unknown id does:
    /// the caller gets one rejection shape for both.
    pub fn resolve(&self, agent: &str, method: &str) -> Result<&AgentDescriptor, BoxscoreError> {
        if method != "invoke" {
            return Err(BoxscoreError::UnknownAgent {
                agent: agent.to_string(),
                method: method.to_string(),
            });
        }
        self.get(agent).ok_or_else(|| BoxscoreError::UnknownAgent {
            agent: agent.to_string(),
            method: method.to_string(),
        })
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxscore_core::Transport;
    use serde_json::json;

    #[test]
    fn every_catalog_id_resolves() {
        let registry = AgentRegistry::builtin();
        for agent in catalog::builtin_agents() {
            assert!(
                registry.resolve(&agent.id, "invoke").is_ok(),
                "{} did not resolve",
                agent.id
            );
        }
    }

    #[test]
    fn unknown_agent_is_rejected() {
        let registry = AgentRegistry::builtin();
        let err = registry.resolve("nonexistent-agent-xyz", "invoke").unwrap_err();
        match err {
            BoxscoreError::UnknownAgent { agent, method } => {
                assert_eq!(agent, "nonexistent-agent-xyz");
                assert_eq!(method, "invoke");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_invoke_method_is_rejected() {
        let registry = AgentRegistry::builtin();
        let err = registry.resolve("news-brief", "not-invoke").unwrap_err();
        assert!(matches!(err, BoxscoreError::UnknownAgent { .. }));
    }

    #[test]
    fn alternate_tables_can_be_injected() {
        let registry = AgentRegistry::new(vec![AgentDescriptor {
            id: "test-agent".into(),
            name: "TestAgent".into(),
            description: String::new(),
            operation: "test".into(),
            function: "toolsTest".into(),
            transport: Transport::Backend,
            input_schema: json!({"type": "object"}),
        }]);
        assert!(registry.resolve("test-agent", "invoke").is_ok());
        assert!(registry.resolve("news-brief", "invoke").is_err());
    }
}
