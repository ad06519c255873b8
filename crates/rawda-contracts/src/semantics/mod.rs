mod lexicon;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::detection::RawDetection;
use lexicon::{fallback_relevance, LexiconEntry, ENV_HINTS, EXCLUDED_TERMS, LEXICON};

/// Functional grouping of a recognized element, rendered in Arabic for the
/// downstream formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalCategory {
    Seating,
    Surface,
    SleepArea,
    SoftFurnishing,
    FloorCovering,
    Storage,
    Structure,
    PlayObject,
    Instrument,
    Learning,
    ArtSupply,
    Tableware,
    Clothing,
    Appliance,
    Decor,
    Household,
}

impl FunctionalCategory {
    pub fn label_ar(self) -> &'static str {
        match self {
            FunctionalCategory::Seating => "مقاعد",
            FunctionalCategory::Surface => "أسطح عمل",
            FunctionalCategory::SleepArea => "منطقة نوم",
            FunctionalCategory::SoftFurnishing => "مفروشات طرية",
            FunctionalCategory::FloorCovering => "فرش أرضي",
            FunctionalCategory::Storage => "تخزين",
            FunctionalCategory::Structure => "عناصر إنشائية",
            FunctionalCategory::PlayObject => "أدوات لعب",
            FunctionalCategory::Instrument => "آلات إيقاعية",
            FunctionalCategory::Learning => "أدوات تعلم",
            FunctionalCategory::ArtSupply => "أدوات فنية",
            FunctionalCategory::Tableware => "أدوات مائدة",
            FunctionalCategory::Clothing => "ملابس",
            FunctionalCategory::Appliance => "أجهزة منزلية",
            FunctionalCategory::Decor => "ديكور",
            FunctionalCategory::Household => "أغراض منزلية",
        }
    }
}

/// How directly a child can act on the element. Tangible objects surface
/// before passive background in every ordering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionPriority {
    Background,
    Neutral,
    Tangible,
}

impl InteractionPriority {
    pub fn rank(self) -> u8 {
        match self {
            InteractionPriority::Background => 0,
            InteractionPriority::Neutral => 1,
            InteractionPriority::Tangible => 2,
        }
    }
}

/// A detector label resolved into a real-world interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonedElement {
    pub raw_label: String,
    pub name_ar: String,
    pub category: FunctionalCategory,
    pub interpretation_ar: String,
    /// Blend of detector probability and curated relevance, rounded to two
    /// decimals, never above 1.
    pub confidence: f64,
    pub priority: InteractionPriority,
}

/// Lowercase, first comma segment, collapsed whitespace. Detector taxonomies
/// emit labels like "studio couch, day bed"; only the head names the object.
pub fn normalize_label(raw: &str) -> String {
    let head = raw.split(',').next().unwrap_or(raw);
    head.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

fn lookup<'a>(label: &str, table: &'a [LexiconEntry]) -> Option<&'a LexiconEntry> {
    table
        .iter()
        .filter(|entry| label.contains(entry.term))
        .max_by_key(|entry| entry.term.len())
}

fn blended_confidence(probability: f64, relevance: f64) -> f64 {
    let blended = probability * 0.6 + relevance * 0.4;
    ((blended * 100.0).round() / 100.0).min(1.0)
}

/// Map filtered detections to reasoned elements: curated lexicon first, then
/// environment-term synthesis, then a hedged fallback for moderately
/// plausible unknowns; everything else (including the exclusion list) emits
/// nothing. Deduplicates by normalized label, first occurrence wins, and
/// orders tangible objects before background.
pub fn reason_about_detections(
    detections: &[RawDetection],
    config: &PipelineConfig,
) -> Vec<ReasonedElement> {
    let mut seen: Vec<String> = Vec::new();
    let mut reasoned: Vec<ReasonedElement> = Vec::new();

    for detection in detections {
        let label = normalize_label(&detection.class_name);
        if label.is_empty() || seen.contains(&label) {
            continue;
        }
        seen.push(label.clone());

        if EXCLUDED_TERMS.iter().any(|term| label.contains(term)) {
            continue;
        }

        let element = if let Some(entry) = lookup(&label, LEXICON) {
            element_from_entry(&label, detection.probability, entry)
        } else if let Some(entry) = lookup(&label, ENV_HINTS) {
            element_from_entry(&label, detection.probability, entry)
        } else {
            let relevance = fallback_relevance(&label);
            if relevance < 0.5 {
                continue;
            }
            ReasonedElement {
                raw_label: label.clone(),
                name_ar: format!("غرض منزلي ({label})"),
                category: FunctionalCategory::Household,
                interpretation_ar: "غرض منزلي غير مصنف يحتاج تقديرا من المشرف".to_string(),
                confidence: blended_confidence(detection.probability, relevance),
                priority: InteractionPriority::Neutral,
            }
        };

        if element.confidence < config.reasoner_min_confidence {
            continue;
        }
        reasoned.push(element);
    }

    sort_by_interaction_priority(&mut reasoned);
    reasoned
}

fn element_from_entry(label: &str, probability: f64, entry: &LexiconEntry) -> ReasonedElement {
    ReasonedElement {
        raw_label: label.to_string(),
        name_ar: entry.name_ar.to_string(),
        category: entry.category,
        interpretation_ar: entry.note_ar.to_string(),
        confidence: blended_confidence(probability, entry.relevance),
        priority: entry.priority,
    }
}

/// Two-level ordering shared by the reasoner and the element validator:
/// interaction priority descending, then confidence descending.
pub fn sort_by_interaction_priority(elements: &mut [ReasonedElement]) {
    elements.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}

/// Stable label → Arabic display name map handed to the formatter.
pub fn display_name_map(elements: &[ReasonedElement]) -> IndexMap<String, String> {
    let mut names = IndexMap::new();
    for element in elements {
        names
            .entry(element.raw_label.clone())
            .or_insert_with(|| element.name_ar.clone());
    }
    names
}
