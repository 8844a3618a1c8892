//! Agent definitions and per-agent configuration.
//!
//! The marketing crew is a fixed roster of six agents. Each agent has a
//! static definition (label, tools, default configuration) and a runtime
//! configuration users can override before a run.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};
use std::collections::HashMap;
use std::fmt;

/// The six members of the marketing crew, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentKind {
    /// Plans content strategy, tone, and calendar.
    Strategy,
    /// Generates captions, hooks, and hashtags.
    CopyGen,
    /// Creates static visuals, carousels, and memes.
    Design,
    /// Generates or edits short videos and reels.
    VideoGen,
    /// Routes drafts for internal and client approval.
    Approval,
    /// Schedules and posts content across platforms.
    Scheduler,
}

impl AgentKind {
    /// All agents in roster order.
    pub const ALL: [Self; 6] = [
        Self::Strategy,
        Self::CopyGen,
        Self::Design,
        Self::VideoGen,
        Self::Approval,
        Self::Scheduler,
    ];

    /// The wire identifier for this agent.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::CopyGen => "copyGen",
            Self::Design => "design",
            Self::VideoGen => "videoGen",
            Self::Approval => "approval",
            Self::Scheduler => "scheduler",
        }
    }

    /// Position of this agent in the roster.
    #[must_use]
    pub fn roster_index(&self) -> usize {
        match self {
            Self::Strategy => 0,
            Self::CopyGen => 1,
            Self::Design => 2,
            Self::VideoGen => 3,
            Self::Approval => 4,
            Self::Scheduler => 5,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories an agent can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentCategory {
    Marketing,
}

/// Static description of an agent in the crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    pub kind: AgentKind,
    pub label: String,
    pub emoji: String,
    pub category: AgentCategory,
    pub color: String,
    pub description: String,
    /// External tools and APIs this agent can reach for.
    pub tools: Vec<String>,
    pub default_config: AgentConfig,
}

/// Runtime configuration for one agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub api_keys: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub properties: JsonValue,
}

fn tool_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// The built-in marketing crew roster, in pipeline order.
#[must_use]
pub fn marketing_agents() -> Vec<AgentDefinition> {
    vec![
        AgentDefinition {
            kind: AgentKind::Strategy,
            label: "Strategy Agent".to_string(),
            emoji: "🧠".to_string(),
            category: AgentCategory::Marketing,
            color: "blue".to_string(),
            description: "Plans content strategy, tone, and calendar".to_string(),
            tools: tool_names(&[
                "OpenAI GPT-4",
                "Claude",
                "Gemini",
                "Google Calendar",
                "Notion",
                "Trello",
                "Airtable",
            ]),
            default_config: AgentConfig {
                name: "Content Strategy Planner".to_string(),
                description: Some(
                    "Plans content strategy, tone, and calendar for marketing campaigns"
                        .to_string(),
                ),
                active: true,
                model: Some("gpt-4".to_string()),
                temperature: Some(0.7),
                max_tokens: Some(2048),
                api_keys: HashMap::new(),
                properties: json!({
                    "planningHorizon": "3 months",
                    "contentTypes": ["blog", "social", "email", "video"],
                    "targetAudience": "professionals",
                    "contentGoals": ["engagement", "conversion", "brand awareness"],
                }),
            },
        },
        AgentDefinition {
            kind: AgentKind::CopyGen,
            label: "Copy Generation Agent".to_string(),
            emoji: "✍️".to_string(),
            category: AgentCategory::Marketing,
            color: "amber".to_string(),
            description: "Generates captions, hooks, hashtags".to_string(),
            tools: tool_names(&[
                "OpenAI GPT-4",
                "Claude",
                "Gemini",
                "RiteTag API",
                "Grammarly API",
            ]),
            default_config: AgentConfig {
                name: "Content Copy Generator".to_string(),
                description: Some(
                    "Generates engaging captions, hooks, and hashtags for marketing content"
                        .to_string(),
                ),
                active: true,
                model: Some("gpt-4".to_string()),
                temperature: Some(0.8),
                max_tokens: Some(1024),
                api_keys: HashMap::new(),
                properties: json!({
                    "toneOfVoice": "professional",
                    "contentLength": "medium",
                    "includeHashtags": true,
                    "hashtagCount": 5,
                    "includeEmojis": true,
                }),
            },
        },
        AgentDefinition {
            kind: AgentKind::Design,
            label: "Design Agent".to_string(),
            emoji: "🎨".to_string(),
            category: AgentCategory::Marketing,
            color: "green".to_string(),
            description: "Creates static visuals, carousels, memes".to_string(),
            tools: tool_names(&[
                "Canva API",
                "DALL·E",
                "Midjourney",
                "Stable Diffusion",
                "Remove.bg",
                "Cleanup.pictures",
                "Brandfetch API",
            ]),
            default_config: AgentConfig {
                name: "Visual Content Designer".to_string(),
                description: Some(
                    "Creates static visuals, carousels, and memes for marketing campaigns"
                        .to_string(),
                ),
                active: true,
                model: None,
                temperature: None,
                max_tokens: None,
                api_keys: HashMap::new(),
                properties: json!({
                    "designStyle": "modern",
                    "colorPalette": "brand",
                    "imageRatio": "1:1",
                    "includeText": true,
                    "textPlacement": "center",
                    "outputFormats": ["png", "jpg"],
                }),
            },
        },
        AgentDefinition {
            kind: AgentKind::VideoGen,
            label: "Video Generation Agent".to_string(),
            emoji: "🎬".to_string(),
            category: AgentCategory::Marketing,
            color: "red".to_string(),
            description: "Generates or edits short videos, reels".to_string(),
            tools: tool_names(&[
                "Descript API",
                "Runway ML API",
                "Lumen5",
                "Pictory",
                "ElevenLabs",
                "Play.ht",
                "Synthesia",
                "HeyGen",
            ]),
            default_config: AgentConfig {
                name: "Video Content Creator".to_string(),
                description: Some(
                    "Generates or edits short videos and reels for marketing campaigns".to_string(),
                ),
                active: true,
                model: None,
                temperature: None,
                max_tokens: None,
                api_keys: HashMap::new(),
                properties: json!({
                    "videoDuration": "30 seconds",
                    "resolution": "1080p",
                    "aspectRatio": "9:16",
                    "includeSubtitles": true,
                    "includeVoiceover": true,
                    "voiceGender": "female",
                    "musicType": "upbeat",
                }),
            },
        },
        AgentDefinition {
            kind: AgentKind::Approval,
            label: "Approval Agent".to_string(),
            emoji: "✅".to_string(),
            category: AgentCategory::Marketing,
            color: "purple".to_string(),
            description: "Routes drafts for internal/client approval".to_string(),
            tools: tool_names(&[
                "Slack API",
                "Discord API",
                "Gmail API",
                "Notion",
                "Trello",
                "Airtable",
                "Google Sheets",
            ]),
            default_config: AgentConfig {
                name: "Content Approval Manager".to_string(),
                description: Some("Routes drafts for internal and client approval".to_string()),
                active: true,
                model: None,
                temperature: None,
                max_tokens: None,
                api_keys: HashMap::new(),
                properties: json!({
                    "approvalWorkflow": "sequential",
                    "approvers": ["internal-team", "client"],
                    "notificationChannel": "slack",
                    "reminderFrequency": "24 hours",
                    "autoApproveAfter": "72 hours",
                }),
            },
        },
        AgentDefinition {
            kind: AgentKind::Scheduler,
            label: "Scheduler Agent".to_string(),
            emoji: "📆".to_string(),
            category: AgentCategory::Marketing,
            color: "indigo".to_string(),
            description: "Schedules and posts content across platforms".to_string(),
            tools: tool_names(&[
                "Buffer API",
                "Hootsuite API",
                "Meta Graph API",
                "Twitter API",
                "LinkedIn API",
                "YouTube API",
                "TikTok API",
            ]),
            default_config: AgentConfig {
                name: "Content Publishing Scheduler".to_string(),
                description: Some("Schedules and posts content across multiple platforms".to_string()),
                active: true,
                model: None,
                temperature: None,
                max_tokens: None,
                api_keys: HashMap::new(),
                properties: json!({
                    "platforms": ["instagram", "facebook", "twitter", "linkedin"],
                    "postFrequency": "optimal",
                    "timeZone": "UTC",
                    "bestTimeToPost": true,
                    "recycleContent": false,
                }),
            },
        },
    ]
}
