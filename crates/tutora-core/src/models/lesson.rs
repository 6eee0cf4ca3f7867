use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The structured output of one lesson generation.
///
/// Produced once per request by the response parser, optionally amended
/// with a `video_url`, then read-only: the UI displays it and the PDF
/// renderer only reads it. Field names follow the wire shape the model is
/// instructed to emit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LessonDocument {
    pub title: String,
    pub introduction: String,
    pub key_points: Vec<String>,
    pub activities: Vec<String>,
    pub resources: Vec<String>,
    pub video_script: String,
    pub detailed_content: String,

    // Subject-gated extras. Which of these survive parsing depends on the
    // request subject and the permissive field gate in tutora-bedrock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_arts_images: Option<Vec<VisualArtsImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_lyrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_chords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_data: Option<FinancialData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_data: Option<ScientificData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Chart description for Visual Arts lessons (or any lesson that asked
/// for visual-arts augmentation).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartData {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartPayload,
}

impl ChartData {
    /// Every dataset must carry one value per label. The parser does not
    /// enforce this; renderers and tests can.
    pub fn is_consistent(&self) -> bool {
        self.data
            .datasets
            .iter()
            .all(|dataset| dataset.data.len() == self.data.labels.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// One suggested visual reference in a Visual Arts lesson.
///
/// `kind` is free-form ("painting", "sculpture", ...) — the UI only
/// special-cases a couple of values for iconography.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VisualArtsImage {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Budget breakdown for Financial Literacy lessons.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub estimated_costs: Vec<EstimatedCost>,
    pub total_estimate: f64,
    pub timeframe: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedCost {
    pub category: String,
    pub amount: f64,
}

/// Formula, reaction, or law highlighted in a Science lesson.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScientificData {
    #[serde(rename = "type")]
    pub kind: ScientificKind,
    pub content: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ScientificKind {
    Formula,
    Reaction,
    Law,
}

impl ScientificKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScientificKind::Formula => "formula",
            ScientificKind::Reaction => "reaction",
            ScientificKind::Law => "law",
        }
    }
}

impl std::fmt::Display for ScientificKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
