//! Plugin rule models

use serde::Serialize;

/// What a plugin rule does to matching findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    RecastCritical,
    RecastHigh,
    RecastMedium,
    RecastLow,
    RecastInfo,
    Exclude,
}

/// Body for `POST /plugin-rules` and `PUT /plugin-rules/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct PluginRule {
    pub plugin_id: u64,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Host the rule applies to; empty for all hosts
    pub host: String,
    /// Expiry as a unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plugin_rule_serialization() {
        let rule = PluginRule {
            plugin_id: 19506,
            rule_type: RuleType::RecastLow,
            host: "10.0.0.7".to_string(),
            date: None,
        };

        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({ "plugin_id": 19506, "type": "recast_low", "host": "10.0.0.7" })
        );
    }
}
