use std::collections::BTreeMap;
use std::env;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{SecondsFormat, Utc};
use image::imageops::FilterType;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rawda_contracts::config::{Audience, PipelineConfig};
use rawda_contracts::detection::{filter_detections, RawDetection};
use rawda_contracts::environment::{
    analyze_environment, build_activities_from_environment, EnvironmentElement,
};
use rawda_contracts::events::{EventPayload, EventWriter};
use rawda_contracts::refine::{refine_activities, RefinedActivity};
use rawda_contracts::report::{write_report, AnalysisReport};
use rawda_contracts::safety::validate_activity_safety;
use rawda_contracts::semantics::{display_name_map, reason_about_detections};
use rawda_contracts::validation::validate_detected_elements;
use reqwest::blocking::{Client as HttpClient, Response as HttpResponse};
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

/// Side the classifier expects its input on. Images are resampled to a
/// square of this size before upload.
const DETECTOR_INPUT_SIZE: u32 = 224;

#[derive(Debug, Clone)]
pub struct DetectorRequest {
    pub image_path: PathBuf,
    pub top_k: u64,
    pub options: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct DetectorResponse {
    pub provider_request: Map<String, Value>,
    pub provider_response: Map<String, Value>,
    pub warnings: Vec<String>,
    pub detections: Vec<RawDetection>,
}

/// Black-box object classifier. Implementations are stateless per call; the
/// registry holding them is created once per process and shared.
pub trait ObjectDetector: Send + Sync {
    fn name(&self) -> &str;
    fn detect(&self, request: &DetectorRequest) -> Result<DetectorResponse>;
}

#[derive(Default)]
pub struct DetectorRegistry {
    detectors: BTreeMap<String, Box<dyn ObjectDetector>>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<D: ObjectDetector + 'static>(&mut self, detector: D) {
        self.detectors
            .insert(detector.name().to_string(), Box::new(detector));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ObjectDetector> {
        self.detectors.get(name).map(|detector| detector.as_ref())
    }

    pub fn names(&self) -> Vec<String> {
        self.detectors.keys().cloned().collect()
    }
}

pub fn default_detector_registry() -> DetectorRegistry {
    let mut registry = DetectorRegistry::new();
    registry.register(DryrunDetector);
    registry.register(RemoteDetector::new());
    registry
}

/// Process-wide registry handle: built lazily on first use, reused by every
/// request afterwards.
pub fn shared_detector_registry() -> &'static DetectorRegistry {
    static REGISTRY: OnceLock<DetectorRegistry> = OnceLock::new();
    REGISTRY.get_or_init(default_detector_registry)
}

/// Plausible classifier outputs for offline runs, in taxonomy form with
/// comma tails the way the real model reports them.
const DRYRUN_LABEL_POOL: &[&str] = &[
    "studio couch, day bed",
    "coffee table, cocktail table",
    "soccer ball",
    "bookcase",
    "rocking chair",
    "quilt, comforter",
    "carpet, rug",
    "wooden block",
    "teddy, teddy bear",
    "basket, handbasket",
    "crib, cot",
    "jigsaw puzzle",
    "drum, membranophone",
    "bath towel",
    "pillow",
    "tray",
];

struct DryrunDetector;

impl ObjectDetector for DryrunDetector {
    fn name(&self) -> &str {
        "dryrun"
    }

    fn detect(&self, request: &DetectorRequest) -> Result<DetectorResponse> {
        let bytes = std::fs::read(&request.image_path).with_context(|| {
            format!("failed to read image {}", request.image_path.display())
        })?;
        let digest = Sha256::digest(&bytes);

        let start = digest[0] as usize % DRYRUN_LABEL_POOL.len();
        let count = (4 + digest[1] as usize % 3).min(request.top_k.max(1) as usize);
        let mut detections = Vec::with_capacity(count);
        for index in 0..count {
            let label = DRYRUN_LABEL_POOL[(start + index) % DRYRUN_LABEL_POOL.len()];
            let jitter = f64::from(digest[2 + index] % 7) / 100.0;
            let probability = (0.93 - index as f64 * 0.07 - jitter).max(0.05);
            detections.push(RawDetection::new(label, probability));
        }

        Ok(DetectorResponse {
            provider_request: map_object(json!({
                "detector": "dryrun",
                "image": request.image_path.display().to_string(),
                "top_k": request.top_k,
            })),
            provider_response: map_object(json!({
                "status": "ok",
                "digest": hex::encode(&digest[..6]),
                "count": detections.len(),
            })),
            warnings: Vec::new(),
            detections,
        })
    }
}

struct RemoteDetector {
    api_base: String,
    http: HttpClient,
}

impl RemoteDetector {
    fn new() -> Self {
        Self {
            api_base: env::var("RAWDA_DETECTOR_API_BASE")
                .ok()
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "https://api.rawda.app/v1".to_string()),
            http: HttpClient::new(),
        }
    }

    fn api_key() -> Option<String> {
        non_empty_env("RAWDA_DETECTOR_API_KEY")
    }

    fn classify_endpoint(&self) -> String {
        format!("{}/classify", self.api_base)
    }
}

impl ObjectDetector for RemoteDetector {
    fn name(&self) -> &str {
        "remote"
    }

    fn detect(&self, request: &DetectorRequest) -> Result<DetectorResponse> {
        let Some(api_key) = Self::api_key() else {
            bail!("RAWDA_DETECTOR_API_KEY is not set");
        };

        let png = encode_detector_input(&request.image_path)?;
        let endpoint = self.classify_endpoint();
        let payload = json!({
            "image": BASE64.encode(&png),
            "top_k": request.top_k,
        });

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&api_key)
            .json(&payload)
            .send()
            .with_context(|| format!("detector request failed ({endpoint})"))?;
        let body = response_json_or_error("detector", response)?;

        let rows = body
            .get("detections")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let mut warnings = Vec::new();
        let mut detections = Vec::new();
        for row in rows {
            match serde_json::from_value::<RawDetection>(row) {
                Ok(detection) if (0.0..=1.0).contains(&detection.probability) => {
                    detections.push(detection);
                }
                Ok(detection) => warnings.push(format!(
                    "dropping detection '{}' with probability {} outside [0, 1]",
                    detection.class_name, detection.probability
                )),
                Err(err) => warnings.push(format!("skipping malformed detection: {err}")),
            }
        }

        Ok(DetectorResponse {
            provider_request: map_object(json!({
                "endpoint": endpoint,
                "top_k": request.top_k,
            })),
            provider_response: map_object(json!({
                "status": "ok",
                "count": detections.len(),
            })),
            warnings,
            detections,
        })
    }
}

/// Decode, resample to the classifier's square input and re-encode as PNG.
fn encode_detector_input(path: &Path) -> Result<Vec<u8>> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    let resized = image::imageops::resize(
        &decoded.to_rgba8(),
        DETECTOR_INPUT_SIZE,
        DETECTOR_INPUT_SIZE,
        FilterType::Triangle,
    );
    let mut buffer = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .context("failed to encode detector input")?;
    Ok(buffer)
}

/// Everything the downstream formatter needs: the refined activities, the
/// analyzed elements, and the Arabic display names resolved per label.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub request_id: String,
    pub age: u8,
    pub audience: Audience,
    pub elements: Vec<EnvironmentElement>,
    pub activities: Vec<RefinedActivity>,
    pub display_names: IndexMap<String, String>,
}

pub fn outcome_to_json(outcome: &AnalysisOutcome) -> Result<Value> {
    let mut names = Map::new();
    for (label, name) in &outcome.display_names {
        names.insert(label.clone(), Value::String(name.clone()));
    }
    Ok(json!({
        "request_id": outcome.request_id,
        "age": outcome.age,
        "audience": outcome.audience.as_str(),
        "elements": serde_json::to_value(&outcome.elements)?,
        "activities": serde_json::to_value(&outcome.activities)?,
        "display_names": Value::Object(names),
    }))
}

/// Per-request orchestrator: runs the detection → activities pipeline,
/// emitting one event per stage, and rolls the totals into `report.json` on
/// `finish`.
pub struct AnalysisEngine {
    config: PipelineConfig,
    events: EventWriter,
    detector: String,
    out_dir: PathBuf,
    rng: StdRng,
    started_at: String,
    total_detections: u64,
    total_elements: u64,
    total_activities: u64,
    activity_rows: Vec<Map<String, Value>>,
}

impl AnalysisEngine {
    pub fn new(
        out_dir: &Path,
        events_path: &Path,
        detector: Option<String>,
        settings: Option<&Map<String, Value>>,
    ) -> Result<Self> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        let request_id = uuid::Uuid::new_v4().to_string();
        let config = settings
            .map(PipelineConfig::from_settings)
            .unwrap_or_default();
        let rng = match settings
            .and_then(|settings| settings.get("shuffle_seed"))
            .and_then(Value::as_u64)
        {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config,
            events: EventWriter::new(events_path, request_id),
            detector: detector.unwrap_or_else(|| "dryrun".to_string()),
            out_dir: out_dir.to_path_buf(),
            rng,
            started_at: now_utc_iso(),
            total_detections: 0,
            total_elements: 0,
            total_activities: 0,
            activity_rows: Vec::new(),
        })
    }

    pub fn event_writer(&self) -> EventWriter {
        self.events.clone()
    }

    pub fn request_id(&self) -> &str {
        self.events.request_id()
    }

    /// Full path: photograph in, refined activities out.
    pub fn analyze_image(
        &mut self,
        image_path: &Path,
        age: u8,
        audience: Audience,
    ) -> Result<AnalysisOutcome> {
        self.emit(
            "analysis_started",
            json!({
                "source": image_path.display().to_string(),
                "age": age,
                "audience": audience.as_str(),
                "detector": self.detector,
            }),
        )?;

        let registry = shared_detector_registry();
        let Some(detector) = registry.get(&self.detector) else {
            bail!(
                "unknown detector '{}' (available: {})",
                self.detector,
                registry.names().join(", ")
            );
        };
        let request = DetectorRequest {
            image_path: image_path.to_path_buf(),
            top_k: self.config.max_detections as u64,
            options: Map::new(),
        };
        let response = detector
            .detect(&request)
            .context("object detection failed")?;
        self.emit(
            "detections_received",
            json!({
                "detector": self.detector,
                "count": response.detections.len(),
                "warnings": response.warnings,
            }),
        )?;

        self.run_pipeline(response.detections, age, audience)
    }

    /// Detector-bypass path for callers that already hold labels.
    pub fn analyze_detections(
        &mut self,
        detections: Vec<RawDetection>,
        age: u8,
        audience: Audience,
    ) -> Result<AnalysisOutcome> {
        self.emit(
            "analysis_started",
            json!({
                "source": "detections",
                "age": age,
                "audience": audience.as_str(),
                "count": detections.len(),
            }),
        )?;
        self.run_pipeline(detections, age, audience)
    }

    fn run_pipeline(
        &mut self,
        detections: Vec<RawDetection>,
        age: u8,
        audience: Audience,
    ) -> Result<AnalysisOutcome> {
        let filtered = filter_detections(&detections, &self.config);
        self.emit(
            "detections_filtered",
            json!({
                "kept": filtered.len(),
                "dropped": detections.len().saturating_sub(filtered.len()),
            }),
        )?;

        let reasoned = reason_about_detections(&filtered, &self.config);
        self.emit(
            "elements_reasoned",
            json!({
                "count": reasoned.len(),
                "labels": reasoned
                    .iter()
                    .map(|element| element.raw_label.clone())
                    .collect::<Vec<String>>(),
            }),
        )?;

        let validated = validate_detected_elements(&reasoned, age, &self.config);
        self.emit("elements_validated", json!({ "labels": validated.labels }))?;

        let elements = analyze_environment(&validated.labels, &self.config);
        self.emit("environment_analyzed", json!({ "count": elements.len() }))?;

        let candidates = build_activities_from_environment(
            &elements,
            self.config.target_activities,
            &mut self.rng,
        );
        self.emit("activities_built", json!({ "count": candidates.len() }))?;

        let checked = validate_activity_safety(candidates, &elements, age);
        self.emit("activities_validated", json!({ "count": checked.len() }))?;

        let activities = refine_activities(checked, age);
        self.emit("activities_refined", json!({ "count": activities.len() }))?;

        self.total_detections += detections.len() as u64;
        self.total_elements += elements.len() as u64;
        self.total_activities += activities.len() as u64;
        for activity in &activities {
            self.activity_rows.push(map_object(json!({
                "object_label": activity.object_label,
                "focus": activity.focus.as_str(),
                "specific_skill_seed": activity.specific_skill_seed,
                "humanize_offset": activity.humanize_offset,
            })));
        }

        let display_names = display_name_map(&validated.elements);
        Ok(AnalysisOutcome {
            request_id: self.events.request_id().to_string(),
            age,
            audience,
            elements,
            activities,
            display_names,
        })
    }

    /// Write `report.json` and close the event stream.
    pub fn finish(&mut self) -> Result<()> {
        let report = AnalysisReport {
            request_id: self.events.request_id().to_string(),
            started_at: self.started_at.clone(),
            finished_at: now_utc_iso(),
            total_detections: self.total_detections,
            total_elements: self.total_elements,
            total_activities: self.total_activities,
            activities: self.activity_rows.clone(),
        };
        write_report(&self.out_dir.join("report.json"), &report, None)?;
        self.emit(
            "analysis_finished",
            json!({
                "total_detections": self.total_detections,
                "total_elements": self.total_elements,
                "total_activities": self.total_activities,
            }),
        )?;
        Ok(())
    }

    fn emit(&self, event_type: &str, payload: Value) -> Result<()> {
        let payload: EventPayload = map_object(payload);
        self.events.emit(event_type, payload)?;
        Ok(())
    }
}

fn map_object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn response_json_or_error(provider: &str, response: HttpResponse) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .with_context(|| format!("{provider} response unreadable"))?;
    if !status.is_success() {
        bail!("{provider} request failed with {status}: {body}");
    }
    serde_json::from_str(&body).with_context(|| format!("{provider} returned non-JSON body"))
}

fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use rawda_contracts::config::Audience;
    use rawda_contracts::detection::RawDetection;
    use rawda_contracts::focus::TherapeuticFocus;
    use serde_json::{json, Map, Value};

    use super::{
        outcome_to_json, AnalysisEngine, DetectorRequest, DryrunDetector, ObjectDetector,
    };

    fn write_test_image(dir: &Path) -> PathBuf {
        let path = dir.join("scene.png");
        let image = image::RgbImage::from_pixel(8, 8, image::Rgb([180, 140, 90]));
        image.save(&path).expect("write test image");
        path
    }

    fn seeded_settings() -> Map<String, Value> {
        let mut settings = Map::new();
        settings.insert("shuffle_seed".to_string(), json!(11));
        settings
    }

    #[test]
    fn dryrun_detector_is_deterministic_per_image() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let image_path = write_test_image(temp.path());
        let request = DetectorRequest {
            image_path,
            top_k: 50,
            options: Map::new(),
        };
        let first = DryrunDetector.detect(&request)?;
        let second = DryrunDetector.detect(&request)?;
        assert_eq!(first.detections, second.detections);
        assert!(first.detections.len() >= 4);
        Ok(())
    }

    #[test]
    fn analyze_image_produces_bounded_outcome_and_ordered_events() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let image_path = write_test_image(temp.path());

        let settings = seeded_settings();
        let mut engine =
            AnalysisEngine::new(&out_dir, &events_path, None, Some(&settings))?;
        let outcome = engine.analyze_image(&image_path, 5, Audience::Parent)?;
        engine.finish()?;

        assert!(outcome.elements.len() <= 5);
        assert!(!outcome.activities.is_empty());
        for activity in &outcome.activities {
            assert!(outcome
                .display_names
                .contains_key(&activity.object_label));
        }

        let raw = std::fs::read_to_string(events_path)?;
        let types: Vec<String> = raw
            .lines()
            .filter_map(|line| serde_json::from_str::<Value>(line).ok())
            .filter_map(|row| row.get("type").and_then(Value::as_str).map(str::to_string))
            .collect();
        let order = [
            "analysis_started",
            "detections_received",
            "detections_filtered",
            "elements_reasoned",
            "elements_validated",
            "environment_analyzed",
            "activities_built",
            "activities_validated",
            "activities_refined",
            "analysis_finished",
        ];
        let mut previous = None;
        for event_type in order {
            let position = types
                .iter()
                .position(|value| value == event_type)
                .unwrap_or_else(|| panic!("missing {event_type}"));
            if let Some(previous) = previous {
                assert!(previous < position, "{event_type} out of order");
            }
            previous = Some(position);
        }

        assert!(out_dir.join("report.json").exists());
        Ok(())
    }

    #[test]
    fn empty_detections_flow_through_without_error() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let mut engine = AnalysisEngine::new(&out_dir, &events_path, None, None)?;
        let outcome = engine.analyze_detections(Vec::new(), 4, Audience::Therapist)?;
        engine.finish()?;
        assert!(outcome.elements.is_empty());
        assert!(outcome.activities.is_empty());
        assert!(outcome.display_names.is_empty());
        Ok(())
    }

    #[test]
    fn heavy_only_scene_yields_non_contact_focuses() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let settings = seeded_settings();
        let mut engine =
            AnalysisEngine::new(&out_dir, &events_path, None, Some(&settings))?;
        let outcome = engine.analyze_detections(
            vec![RawDetection::new("sofa", 0.9)],
            5,
            Audience::Parent,
        )?;
        for activity in &outcome.activities {
            assert!(matches!(
                activity.focus,
                TherapeuticFocus::GrossMotor | TherapeuticFocus::SensoryRegulation
            ));
        }
        Ok(())
    }

    #[test]
    fn person_detections_never_reach_the_outcome() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let settings = seeded_settings();
        let mut engine =
            AnalysisEngine::new(&out_dir, &events_path, None, Some(&settings))?;
        let outcome = engine.analyze_detections(
            vec![
                RawDetection::new("person", 0.95),
                RawDetection::new("ball", 0.8),
            ],
            5,
            Audience::Parent,
        )?;
        assert_eq!(outcome.elements.len(), 1);
        assert_eq!(outcome.elements[0].object_label, "ball");
        Ok(())
    }

    #[test]
    fn unknown_detector_is_rejected_with_available_names() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let image_path = write_test_image(temp.path());
        let mut engine = AnalysisEngine::new(
            &out_dir,
            &events_path,
            Some("imaginary".to_string()),
            None,
        )?;
        let err = engine
            .analyze_image(&image_path, 5, Audience::Parent)
            .err()
            .map(|err| err.to_string())
            .unwrap_or_default();
        assert!(err.contains("unknown detector"));
        assert!(err.contains("dryrun"));
        Ok(())
    }

    #[test]
    fn outcome_json_carries_the_formatter_contract() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let settings = seeded_settings();
        let mut engine =
            AnalysisEngine::new(&out_dir, &events_path, None, Some(&settings))?;
        let outcome = engine.analyze_detections(
            vec![
                RawDetection::new("ball", 0.9),
                RawDetection::new("sofa", 0.8),
            ],
            6,
            Audience::Therapist,
        )?;
        let payload = outcome_to_json(&outcome)?;
        assert_eq!(payload["audience"], json!("therapist"));
        assert_eq!(payload["age"], json!(6));
        assert!(payload["activities"]
            .as_array()
            .map(|rows| !rows.is_empty())
            .unwrap_or(false));
        assert_eq!(payload["display_names"]["ball"], json!("الكرة"));
        Ok(())
    }
}
