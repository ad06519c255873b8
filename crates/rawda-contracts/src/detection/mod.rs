mod keywords;

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use keywords::{matches_any, GENERIC_TERMS, PERSON_TERMS};

/// One raw classification from the upstream vision model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    #[serde(alias = "className")]
    pub class_name: String,
    pub probability: f64,
}

impl RawDetection {
    pub fn new(class_name: impl Into<String>, probability: f64) -> Self {
        Self {
            class_name: class_name.into(),
            probability,
        }
    }
}

/// First pass over raw detector output: drop people and generic labels, keep
/// confident detections, backfill toward the minimum count from the
/// next-best candidates, cap the total. Total for every input; an empty or
/// fully-rejected input yields an empty list.
pub fn filter_detections(
    detections: &[RawDetection],
    config: &PipelineConfig,
) -> Vec<RawDetection> {
    let mut candidates: Vec<RawDetection> = detections
        .iter()
        .filter(|detection| {
            let label = detection.class_name.trim().to_lowercase();
            !label.is_empty()
                && !matches_any(&label, PERSON_TERMS)
                && !matches_any(&label, GENERIC_TERMS)
        })
        .cloned()
        .collect();
    candidates.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<RawDetection> = candidates
        .iter()
        .filter(|detection| detection.probability >= config.confidence_threshold)
        .cloned()
        .collect();

    if kept.len() < config.min_detections {
        for detection in &candidates {
            if kept.len() >= config.min_detections {
                break;
            }
            if detection.probability >= config.confidence_threshold
                || detection.probability < config.low_confidence_floor
            {
                continue;
            }
            kept.push(detection.clone());
        }
    }

    kept.truncate(config.max_detections);
    kept
}

#[cfg(test)]
mod tests {
    use crate::config::PipelineConfig;

    use super::{filter_detections, RawDetection};

    fn detection(label: &str, probability: f64) -> RawDetection {
        RawDetection::new(label, probability)
    }

    #[test]
    fn drops_people_and_keeps_objects() {
        let config = PipelineConfig::default();
        let kept = filter_detections(
            &[detection("person", 0.95), detection("ball", 0.8)],
            &config,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].class_name, "ball");
    }

    #[test]
    fn drops_generic_labels_even_at_high_confidence() {
        let config = PipelineConfig::default();
        let kept = filter_detections(
            &[detection("object", 0.99), detection("sofa", 0.5)],
            &config,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].class_name, "sofa");
    }

    #[test]
    fn backfills_below_threshold_in_descending_order() {
        let config = PipelineConfig::default();
        let kept = filter_detections(
            &[
                detection("sofa", 0.9),
                detection("table", 0.2),
                detection("ball", 0.22),
                detection("rug", 0.19),
            ],
            &config,
        );
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].class_name, "sofa");
        assert_eq!(kept[1].class_name, "ball");
        assert_eq!(kept[2].class_name, "table");
    }

    #[test]
    fn backfill_never_reaches_below_the_floor() {
        let config = PipelineConfig::default();
        let kept = filter_detections(
            &[detection("sofa", 0.9), detection("curtain", 0.05)],
            &config,
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn caps_at_max_detections() {
        let config = PipelineConfig {
            max_detections: 4,
            ..PipelineConfig::default()
        };
        let many: Vec<RawDetection> = (0..10)
            .map(|index| detection(&format!("label{index}"), 0.9 - index as f64 * 0.01))
            .collect();
        let kept = filter_detections(&many, &config);
        assert_eq!(kept.len(), 4);
        assert_eq!(kept[0].class_name, "label0");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let config = PipelineConfig::default();
        assert!(filter_detections(&[], &config).is_empty());
    }

    #[test]
    fn output_is_sorted_by_confidence_descending() {
        let config = PipelineConfig::default();
        let kept = filter_detections(
            &[
                detection("rug", 0.4),
                detection("sofa", 0.9),
                detection("table", 0.6),
            ],
            &config,
        );
        let labels: Vec<&str> = kept.iter().map(|d| d.class_name.as_str()).collect();
        assert_eq!(labels, vec!["sofa", "table", "rug"]);
    }
}
