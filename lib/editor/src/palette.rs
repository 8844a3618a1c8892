//! The built-in node palette and the drag-and-drop payload format.
//!
//! Palette definitions describe what the sidebar offers: a node type, a
//! display label, a category for grouping, a color token, and the default
//! data stamped onto newly created nodes. The sidebar serializes a
//! definition as JSON onto the drag event; the canvas parses it back and
//! asks the definition to instantiate a node at the drop position.

use crate::data::{
    AdGeneratorData, AiModelData, CampaignPlannerData, CmsData, ContentWriterData, CrmData,
    CustomLlmData, DatabaseData, EmailData, FilterData, GoogleSheetsData, LeadGeneratorData,
    MergeData, NodeData, OutreachSequenceData, SalesAnalyticsData, SocialData, TransformData,
    WebhookData,
};
use crate::error::EditorError;
use crate::node::{Node, NodeType, Position};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Drag event format carrying the bare node type string.
pub const DRAG_TYPE_FORMAT: &str = "application/reactflow/type";

/// Drag event format carrying the full JSON node definition.
pub const DRAG_DEFINITION_FORMAT: &str = "application/reactflow/nodeDefinition";

/// Sidebar grouping for palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Ai,
    Data,
    Processing,
    Output,
    Sales,
    Marketing,
}

impl NodeCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Data => "data",
            Self::Processing => "processing",
            Self::Output => "output",
            Self::Sales => "sales",
            Self::Marketing => "marketing",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A palette entry: everything needed to present and stamp one node type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDefinition {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub category: NodeCategory,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_data: Option<NodeData>,
}

impl NodeDefinition {
    /// Stamps a new node from this definition at the given position.
    ///
    /// The node gets a fresh id and a by-value copy of the default data,
    /// so later edits to the node never feed back into the palette. A
    /// definition without a type is rejected.
    pub fn instantiate(&self, position: Position) -> Result<Node, EditorError> {
        if self.node_type.as_str().is_empty() {
            return Err(EditorError::MissingNodeType);
        }

        let data = match &self.default_data {
            Some(data) => data.clone(),
            None => NodeData::empty_for(&self.node_type),
        };
        Ok(Node::new(self.node_type.clone(), position, data))
    }

    /// Parses the JSON payload placed on a drag event under
    /// [`DRAG_DEFINITION_FORMAT`].
    pub fn from_drag_payload(payload: &str) -> Result<Self, EditorError> {
        serde_json::from_str(payload).map_err(|e| EditorError::MalformedPayload {
            details: e.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for NodeDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawDefinition {
            #[serde(rename = "type")]
            node_type: NodeType,
            label: String,
            category: NodeCategory,
            color: String,
            #[serde(default)]
            default_data: Option<JsonValue>,
        }

        let raw = RawDefinition::deserialize(deserializer)?;
        let default_data = match raw.default_data {
            Some(value) if !value.is_null() => {
                Some(NodeData::for_type(&raw.node_type, value).map_err(D::Error::custom)?)
            }
            _ => None,
        };

        Ok(Self {
            node_type: raw.node_type,
            label: raw.label,
            category: raw.category,
            color: raw.color,
            default_data,
        })
    }
}

/// Returns the built-in palette in sidebar order.
#[must_use]
pub fn built_in_definitions() -> Vec<NodeDefinition> {
    vec![
        NodeDefinition {
            node_type: NodeType::Gpt4,
            label: "GPT-4 Model".to_string(),
            category: NodeCategory::Ai,
            color: "nodeBlue".to_string(),
            default_data: Some(NodeData::AiModel(AiModelData {
                label: "GPT-4 Model".to_string(),
                color: "nodeBlue".to_string(),
                name: Some("GPT-4 Sales Assistant".to_string()),
                system_prompt: Some(
                    "You are a sales assistant. Analyze the lead data and generate a \
                     personalized outreach message. Focus on their industry needs and \
                     pain points."
                        .to_string(),
                ),
                temperature: Some(0.7),
                max_tokens: Some(2048),
                model_version: Some("gpt-4-turbo".to_string()),
                stream_response: Some(true),
                response_format: Some("text".to_string()),
                ..AiModelData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::AdGenerator,
            label: "Ad Generator".to_string(),
            category: NodeCategory::Marketing,
            color: "primary".to_string(),
            default_data: Some(NodeData::AdGenerator(AdGeneratorData {
                label: "Ad Generator".to_string(),
                color: "primary".to_string(),
                name: Some("Social Media Ad Creator".to_string()),
                platform: Some("facebook".to_string()),
                ad_type: Some("image".to_string()),
                audience: Some("professionals".to_string()),
                cta: Some("Learn More".to_string()),
                industry_vertical: Some("technology".to_string()),
                ..AdGeneratorData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::CampaignPlanner,
            label: "Campaign Planner".to_string(),
            category: NodeCategory::Marketing,
            color: "nodeBlue".to_string(),
            default_data: Some(NodeData::CampaignPlanner(CampaignPlannerData {
                label: "Campaign Planner".to_string(),
                color: "nodeBlue".to_string(),
                name: Some("Marketing Campaign Planner".to_string()),
                campaign_type: Some("product-launch".to_string()),
                duration: Some("4 weeks".to_string()),
                channels: Some(vec![
                    "email".to_string(),
                    "social".to_string(),
                    "paid-ads".to_string(),
                ]),
                budget: Some(5000.0),
                kpis: Some(vec![
                    "leads".to_string(),
                    "conversions".to_string(),
                    "engagement".to_string(),
                ]),
                ..CampaignPlannerData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::ContentWriter,
            label: "Content Writer".to_string(),
            category: NodeCategory::Marketing,
            color: "nodeAmber".to_string(),
            default_data: Some(NodeData::ContentWriter(ContentWriterData {
                label: "Content Writer".to_string(),
                color: "nodeAmber".to_string(),
                name: Some("AI Content Creator".to_string()),
                content_type: Some("blog-post".to_string()),
                tone: Some("professional".to_string()),
                target_word_count: Some(1200),
                seo_keywords: Some(Vec::new()),
                include_images: Some(true),
                ..ContentWriterData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::LeadGenerator,
            label: "Lead Generator".to_string(),
            category: NodeCategory::Sales,
            color: "nodeGreen".to_string(),
            default_data: Some(NodeData::LeadGenerator(LeadGeneratorData {
                label: "Lead Generator".to_string(),
                color: "nodeGreen".to_string(),
                name: Some("Sales Lead Generator".to_string()),
                source: Some("google-sheets".to_string()),
                target_audience: Some("enterprise".to_string()),
                minimum_score: Some(80),
                output_format: Some("prioritized".to_string()),
                ..LeadGeneratorData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::OutreachSequence,
            label: "Outreach Sequence".to_string(),
            category: NodeCategory::Sales,
            color: "nodeBlue".to_string(),
            default_data: Some(NodeData::OutreachSequence(OutreachSequenceData {
                label: "Outreach Sequence".to_string(),
                color: "nodeBlue".to_string(),
                name: Some("Sales Outreach Sequence".to_string()),
                steps: Some(3),
                channel: Some("email".to_string()),
                follow_up_days: Some(3),
                personalization_level: Some("high".to_string()),
                ..OutreachSequenceData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::SalesAnalytics,
            label: "Sales Analytics".to_string(),
            category: NodeCategory::Sales,
            color: "primary".to_string(),
            default_data: Some(NodeData::SalesAnalytics(SalesAnalyticsData {
                label: "Sales Analytics".to_string(),
                color: "primary".to_string(),
                name: Some("Sales Performance Analyzer".to_string()),
                metrics: Some(vec![
                    "conversion".to_string(),
                    "revenue".to_string(),
                    "pipeline".to_string(),
                ]),
                period: Some("monthly".to_string()),
                visualization: Some("chart".to_string()),
                ..SalesAnalyticsData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::GoogleSheets,
            label: "Google Sheets".to_string(),
            category: NodeCategory::Data,
            color: "nodeGreen".to_string(),
            default_data: Some(NodeData::GoogleSheets(GoogleSheetsData {
                label: "Google Sheets".to_string(),
                color: "nodeGreen".to_string(),
                name: Some("Leads Data Source".to_string()),
                sheet_id: Some(String::new()),
                range: Some("A1:Z1000".to_string()),
                authentication: Some("oauth".to_string()),
                refresh_interval: Some("hourly".to_string()),
                ..GoogleSheetsData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Claude,
            label: "Claude Agent".to_string(),
            category: NodeCategory::Ai,
            color: "nodeAmber".to_string(),
            default_data: Some(NodeData::AiModel(AiModelData {
                label: "Claude Agent".to_string(),
                color: "nodeAmber".to_string(),
                name: Some("Claude Assistant".to_string()),
                system_prompt: Some(
                    "You are Claude, an AI assistant for sales. Help generate sales content."
                        .to_string(),
                ),
                temperature: Some(0.7),
                max_tokens: Some(2048),
                stream_response: Some(true),
                response_format: Some("text".to_string()),
                ..AiModelData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::CustomLlm,
            label: "Custom LLM".to_string(),
            category: NodeCategory::Ai,
            color: "secondary".to_string(),
            default_data: Some(NodeData::CustomLlm(CustomLlmData {
                label: "Custom LLM".to_string(),
                color: "secondary".to_string(),
                name: Some("Custom Language Model".to_string()),
                model_url: Some("https://api.company.ai/v1/models/sales-1".to_string()),
                api_key: Some(String::new()),
                stream_response: Some(false),
                response_format: Some("json".to_string()),
                ..CustomLlmData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Crm,
            label: "CRM Connector".to_string(),
            category: NodeCategory::Data,
            color: "nodeGreen".to_string(),
            default_data: Some(NodeData::Crm(CrmData {
                label: "CRM Connector".to_string(),
                color: "nodeGreen".to_string(),
                name: Some("Salesforce CRM".to_string()),
                source: Some("Salesforce".to_string()),
                entity: Some("Leads".to_string()),
                ..CrmData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Cms,
            label: "CMS Content".to_string(),
            category: NodeCategory::Data,
            color: "nodeGreen".to_string(),
            default_data: Some(NodeData::Cms(CmsData {
                label: "CMS Content".to_string(),
                color: "nodeGreen".to_string(),
                name: Some("WordPress Content".to_string()),
                cms_type: Some("WordPress".to_string()),
                content_type: Some("Blog Posts".to_string()),
                ..CmsData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Database,
            label: "Database".to_string(),
            category: NodeCategory::Data,
            color: "nodeGreen".to_string(),
            default_data: Some(NodeData::Database(DatabaseData {
                label: "Database".to_string(),
                color: "nodeGreen".to_string(),
                name: Some("PostgreSQL Database".to_string()),
                database: Some("PostgreSQL".to_string()),
                table: Some("customers".to_string()),
                ..DatabaseData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Filter,
            label: "Filter Data".to_string(),
            category: NodeCategory::Processing,
            color: "primary".to_string(),
            default_data: Some(NodeData::Filter(FilterData {
                label: "Filter Data".to_string(),
                color: "primary".to_string(),
                name: Some("Lead Filter".to_string()),
                condition: Some("leadScore > 70 && lastContact < 30 days".to_string()),
                ..FilterData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Transform,
            label: "Transform".to_string(),
            category: NodeCategory::Processing,
            color: "primary".to_string(),
            default_data: Some(NodeData::Transform(TransformData {
                label: "Transform".to_string(),
                color: "primary".to_string(),
                name: Some("Data Transformer".to_string()),
                transformation: Some("data => ({ ...data, score: data.score * 1.5 })".to_string()),
                ..TransformData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Merge,
            label: "Merge Data".to_string(),
            category: NodeCategory::Processing,
            color: "primary".to_string(),
            default_data: Some(NodeData::Merge(MergeData {
                label: "Merge Data".to_string(),
                color: "primary".to_string(),
                name: Some("Data Merger".to_string()),
                merge_strategy: Some("combine".to_string()),
                ..MergeData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Email,
            label: "Email Generator".to_string(),
            category: NodeCategory::Output,
            color: "nodeAmber".to_string(),
            default_data: Some(NodeData::Email(EmailData {
                label: "Email Generator".to_string(),
                color: "nodeAmber".to_string(),
                name: Some("Email Outreach".to_string()),
                template: Some("Outreach-B2B".to_string()),
                send_via: Some("Marketing Cloud".to_string()),
                ..EmailData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Social,
            label: "Social Media Post".to_string(),
            category: NodeCategory::Output,
            color: "nodeAmber".to_string(),
            default_data: Some(NodeData::Social(SocialData {
                label: "Social Media Post".to_string(),
                color: "nodeAmber".to_string(),
                name: Some("LinkedIn Post".to_string()),
                platform: Some("LinkedIn".to_string()),
                post_type: Some("Article".to_string()),
                ..SocialData::default()
            })),
        },
        NodeDefinition {
            node_type: NodeType::Webhook,
            label: "Webhook".to_string(),
            category: NodeCategory::Output,
            color: "secondary".to_string(),
            default_data: Some(NodeData::Webhook(WebhookData {
                label: "Webhook".to_string(),
                color: "secondary".to_string(),
                name: Some("API Webhook".to_string()),
                webhook_url: Some("https://example.com/webhook".to_string()),
                method: Some("POST".to_string()),
                ..WebhookData::default()
            })),
        },
    ]
}
