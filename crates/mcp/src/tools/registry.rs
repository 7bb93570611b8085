// Tool trait, registry and schema helpers

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments.
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool under its schema name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.clone(), tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name for stable tools/list output.
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<_> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_array(items: serde_json::Value, description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;

    struct FakeTool {
        name: &'static str,
    }

    #[async_trait::async_trait]
    impl Tool for FakeTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.name.to_string(),
                description: "fake".to_string(),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            }
        }

        async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
            Ok(CallToolResult {
                content: vec![ToolContent::text(self.name)],
                is_error: None,
            })
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FakeTool { name: "beta" }));
        registry.register(Arc::new(FakeTool { name: "alpha" }));

        assert!(registry.contains("alpha"));
        assert!(registry.get("beta").is_some());
        assert!(registry.get("gamma").is_none());
    }

    #[test]
    fn test_schemas_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FakeTool { name: "beta" }));
        registry.register(Arc::new(FakeTool { name: "alpha" }));

        let names: Vec<_> = registry
            .list_schemas()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }
}
