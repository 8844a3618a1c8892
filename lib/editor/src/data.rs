//! Typed node data.
//!
//! Node data is a tagged union keyed by the node's type: each palette
//! shape gets an explicit struct, and unknown node types carry their data
//! as a raw JSON map. The node's `type` field is the discriminant, so the
//! union serializes untagged and deserializes type-directed. Keys a
//! variant does not recognize are preserved in its flattened `extra` map.

use crate::node::NodeType;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A JSON object map, used for preserved unknown keys and raw data.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Data for hosted AI model nodes (`gpt4`, `claude`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModelData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_response: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for self-hosted model nodes (`custom-llm`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLlmData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_response: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for CRM connector nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for CMS content nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cms_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for database source nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for Google Sheets source nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSheetsData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for filter nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for transform nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for merge nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for email output nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_via: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for social post output nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for webhook output nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for ad generator nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGeneratorData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_vertical: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for campaign planner nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlannerData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpis: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for content writer nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentWriterData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for lead generator nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadGeneratorData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for outreach sequence nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachSequenceData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization_level: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Data for sales analytics nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalyticsData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// The data payload of a node, shaped by its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeData {
    AiModel(AiModelData),
    CustomLlm(CustomLlmData),
    Crm(CrmData),
    Cms(CmsData),
    Database(DatabaseData),
    GoogleSheets(GoogleSheetsData),
    Filter(FilterData),
    Transform(TransformData),
    Merge(MergeData),
    Email(EmailData),
    Social(SocialData),
    Webhook(WebhookData),
    AdGenerator(AdGeneratorData),
    CampaignPlanner(CampaignPlannerData),
    ContentWriter(ContentWriterData),
    LeadGenerator(LeadGeneratorData),
    OutreachSequence(OutreachSequenceData),
    SalesAnalytics(SalesAnalyticsData),
    /// Raw data for node types not in the palette.
    Custom(JsonMap),
}

impl NodeData {
    /// Decodes a raw JSON value into the data shape for the given node
    /// type. Null is treated as an empty object; unknown node types keep
    /// their data as a raw map.
    pub fn for_type(node_type: &NodeType, value: JsonValue) -> Result<Self, serde_json::Error> {
        let value = if value.is_null() {
            JsonValue::Object(JsonMap::new())
        } else {
            value
        };

        Ok(match node_type {
            NodeType::Gpt4 | NodeType::Claude => Self::AiModel(serde_json::from_value(value)?),
            NodeType::CustomLlm => Self::CustomLlm(serde_json::from_value(value)?),
            NodeType::Crm => Self::Crm(serde_json::from_value(value)?),
            NodeType::Cms => Self::Cms(serde_json::from_value(value)?),
            NodeType::Database => Self::Database(serde_json::from_value(value)?),
            NodeType::GoogleSheets => Self::GoogleSheets(serde_json::from_value(value)?),
            NodeType::Filter => Self::Filter(serde_json::from_value(value)?),
            NodeType::Transform => Self::Transform(serde_json::from_value(value)?),
            NodeType::Merge => Self::Merge(serde_json::from_value(value)?),
            NodeType::Email => Self::Email(serde_json::from_value(value)?),
            NodeType::Social => Self::Social(serde_json::from_value(value)?),
            NodeType::Webhook => Self::Webhook(serde_json::from_value(value)?),
            NodeType::AdGenerator => Self::AdGenerator(serde_json::from_value(value)?),
            NodeType::CampaignPlanner => Self::CampaignPlanner(serde_json::from_value(value)?),
            NodeType::ContentWriter => Self::ContentWriter(serde_json::from_value(value)?),
            NodeType::LeadGenerator => Self::LeadGenerator(serde_json::from_value(value)?),
            NodeType::OutreachSequence => Self::OutreachSequence(serde_json::from_value(value)?),
            NodeType::SalesAnalytics => Self::SalesAnalytics(serde_json::from_value(value)?),
            NodeType::Other(_) => Self::Custom(serde_json::from_value(value)?),
        })
    }

    /// Returns the empty data shape for the given node type, used when a
    /// palette definition carries no default data.
    #[must_use]
    pub fn empty_for(node_type: &NodeType) -> Self {
        match node_type {
            NodeType::Gpt4 | NodeType::Claude => Self::AiModel(AiModelData::default()),
            NodeType::CustomLlm => Self::CustomLlm(CustomLlmData::default()),
            NodeType::Crm => Self::Crm(CrmData::default()),
            NodeType::Cms => Self::Cms(CmsData::default()),
            NodeType::Database => Self::Database(DatabaseData::default()),
            NodeType::GoogleSheets => Self::GoogleSheets(GoogleSheetsData::default()),
            NodeType::Filter => Self::Filter(FilterData::default()),
            NodeType::Transform => Self::Transform(TransformData::default()),
            NodeType::Merge => Self::Merge(MergeData::default()),
            NodeType::Email => Self::Email(EmailData::default()),
            NodeType::Social => Self::Social(SocialData::default()),
            NodeType::Webhook => Self::Webhook(WebhookData::default()),
            NodeType::AdGenerator => Self::AdGenerator(AdGeneratorData::default()),
            NodeType::CampaignPlanner => Self::CampaignPlanner(CampaignPlannerData::default()),
            NodeType::ContentWriter => Self::ContentWriter(ContentWriterData::default()),
            NodeType::LeadGenerator => Self::LeadGenerator(LeadGeneratorData::default()),
            NodeType::OutreachSequence => Self::OutreachSequence(OutreachSequenceData::default()),
            NodeType::SalesAnalytics => Self::SalesAnalytics(SalesAnalyticsData::default()),
            NodeType::Other(_) => Self::Custom(JsonMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gpt4_data_decodes_typed_fields() {
        let value = json!({
            "label": "GPT-4 Model",
            "color": "nodeBlue",
            "name": "GPT-4 Sales Assistant",
            "temperature": 0.7,
            "maxTokens": 2048,
            "modelVersion": "gpt-4-turbo"
        });

        let data = NodeData::for_type(&NodeType::Gpt4, value).expect("decode");
        let NodeData::AiModel(model) = data else {
            panic!("expected AiModel variant");
        };
        assert_eq!(model.label, "GPT-4 Model");
        assert_eq!(model.temperature, Some(0.7));
        assert_eq!(model.max_tokens, Some(2048));
        assert_eq!(model.model_version.as_deref(), Some("gpt-4-turbo"));
    }

    #[test]
    fn claude_data_without_model_version() {
        let value = json!({
            "label": "Claude Agent",
            "color": "nodeAmber",
            "temperature": 0.7
        });

        let data = NodeData::for_type(&NodeType::Claude, value).expect("decode");
        let NodeData::AiModel(model) = data else {
            panic!("expected AiModel variant");
        };
        assert_eq!(model.model_version, None);
    }

    #[test]
    fn unknown_type_keeps_raw_map() {
        let value = json!({ "label": "Widget", "spin": "up" });
        let data = NodeData::for_type(&NodeType::from("quantum-widget"), value).expect("decode");
        let NodeData::Custom(map) = data else {
            panic!("expected Custom variant");
        };
        assert_eq!(map.get("spin"), Some(&json!("up")));
    }

    #[test]
    fn null_data_decodes_as_empty() {
        let data = NodeData::for_type(&NodeType::Crm, JsonValue::Null).expect("decode");
        assert_eq!(data, NodeData::Crm(CrmData::default()));
    }

    #[test]
    fn unrecognized_keys_survive_roundtrip() {
        let value = json!({
            "label": "Lead Filter",
            "color": "primary",
            "condition": "leadScore > 70",
            "addedByNewerVersion": { "nested": true }
        });

        let data = NodeData::for_type(&NodeType::Filter, value.clone()).expect("decode");
        let back = serde_json::to_value(&data).expect("serialize");
        assert_eq!(back, value);
    }

    #[test]
    fn untagged_serialization_has_no_variant_tag() {
        let data = NodeData::Merge(MergeData {
            label: "Merge Data".to_string(),
            merge_strategy: Some("combine".to_string()),
            ..MergeData::default()
        });

        let value = serde_json::to_value(&data).expect("serialize");
        assert_eq!(value.get("label"), Some(&json!("Merge Data")));
        assert_eq!(value.get("mergeStrategy"), Some(&json!("combine")));
        assert!(value.get("Merge").is_none());
    }

    #[test]
    fn non_object_data_is_rejected() {
        let result = NodeData::for_type(&NodeType::from("widget"), json!("just a string"));
        assert!(result.is_err());
    }
}
