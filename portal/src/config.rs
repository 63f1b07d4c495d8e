// portal/src/config.rs
use std::collections::HashMap;

use serde_json::Value;

/// Portal-level configuration, passed explicitly to whichever component
/// needs it. Replaces the module-level mutable globals the portal used to
/// keep for the help widget and per-tenant customization.
#[derive(Debug, Clone, Default)]
pub struct PortalConfig {
    pub help_widget_key: Option<String>,
    pub tenant_customizations: HashMap<String, Value>,
}

impl PortalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_help_widget_key(mut self, key: &str) -> Self {
        self.help_widget_key = Some(key.to_string());
        self
    }

    pub fn with_customization(mut self, key: &str, value: Value) -> Self {
        self.tenant_customizations.insert(key.to_string(), value);
        self
    }

    pub fn customization(&self, key: &str) -> Option<&Value> {
        self.tenant_customizations.get(key)
    }
}
