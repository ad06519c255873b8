use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rawda_contracts::config::{Audience, AGE_ADVANCED_MIN};
use rawda_contracts::detection::RawDetection;
use rawda_contracts::focus::TherapeuticFocus;
use rawda_contracts::refine::RefinedActivity;
use rawda_engine::{
    outcome_to_json, shared_detector_registry, AnalysisEngine, AnalysisOutcome, DetectorRequest,
};
use serde_json::{json, Map, Value};

#[derive(Debug, Parser)]
#[command(name = "rawda-rs", version, about = "Rawda environment analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a photo of the child's environment and print activity
    /// suggestions.
    Analyze(AnalyzeArgs),
    /// Build suggestions from already-detected labels, bypassing the
    /// detector.
    Suggest(SuggestArgs),
    /// Dump raw detector output for an image.
    Detect(DetectArgs),
}

#[derive(Debug, Parser)]
struct AnalyzeArgs {
    #[arg(long)]
    image: PathBuf,
    #[arg(long)]
    age: u8,
    #[arg(long, default_value = "parent")]
    audience: String,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    events: Option<PathBuf>,
    #[arg(long)]
    detector: Option<String>,
    #[arg(long)]
    shuffle_seed: Option<u64>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Parser)]
struct SuggestArgs {
    /// Object labels, highest confidence first.
    #[arg(required = true)]
    labels: Vec<String>,
    #[arg(long)]
    age: u8,
    #[arg(long, default_value = "parent")]
    audience: String,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    events: Option<PathBuf>,
    #[arg(long)]
    shuffle_seed: Option<u64>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Parser)]
struct DetectArgs {
    #[arg(long)]
    image: PathBuf,
    #[arg(long, default_value = "dryrun")]
    detector: String,
    #[arg(long, default_value_t = 10)]
    top_k: u64,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("rawda-rs error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Detect(args) => run_detect(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<i32> {
    let audience = parse_audience(&args.audience)?;
    let events_path = args
        .events
        .clone()
        .unwrap_or_else(|| args.out.join("events.jsonl"));
    let settings = engine_settings(args.shuffle_seed);
    let mut engine =
        AnalysisEngine::new(&args.out, &events_path, args.detector.clone(), Some(&settings))?;

    let outcome = engine.analyze_image(&args.image, args.age, audience)?;
    engine.finish()?;
    print_outcome(&outcome, args.json)?;
    Ok(0)
}

fn run_suggest(args: SuggestArgs) -> Result<i32> {
    let audience = parse_audience(&args.audience)?;
    let events_path = args
        .events
        .clone()
        .unwrap_or_else(|| args.out.join("events.jsonl"));
    let settings = engine_settings(args.shuffle_seed);
    let mut engine = AnalysisEngine::new(&args.out, &events_path, None, Some(&settings))?;

    let detections = detections_from_labels(&args.labels);
    let outcome = engine.analyze_detections(detections, args.age, audience)?;
    engine.finish()?;
    print_outcome(&outcome, args.json)?;
    Ok(0)
}

fn run_detect(args: DetectArgs) -> Result<i32> {
    let registry = shared_detector_registry();
    let Some(detector) = registry.get(&args.detector) else {
        bail!(
            "unknown detector '{}' (available: {})",
            args.detector,
            registry.names().join(", ")
        );
    };
    let response = detector
        .detect(&DetectorRequest {
            image_path: args.image,
            top_k: args.top_k,
            options: Map::new(),
        })
        .context("object detection failed")?;

    for warning in &response.warnings {
        eprintln!("warning: {warning}");
    }
    for detection in &response.detections {
        println!("{:.3}  {}", detection.probability, detection.class_name);
    }
    Ok(0)
}

fn parse_audience(raw: &str) -> Result<Audience> {
    match Audience::parse(raw) {
        Some(audience) => Ok(audience),
        None => bail!("audience must be 'parent' or 'therapist', got '{raw}'"),
    }
}

fn engine_settings(shuffle_seed: Option<u64>) -> Map<String, Value> {
    let mut settings = Map::new();
    if let Some(seed) = shuffle_seed {
        settings.insert("shuffle_seed".to_string(), json!(seed));
    }
    settings
}

/// Synthetic confidence ladder for label-only input: the caller's order is
/// treated as descending confidence.
fn detections_from_labels(labels: &[String]) -> Vec<RawDetection> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            RawDetection::new(label.clone(), (0.9 - index as f64 * 0.05).max(0.3))
        })
        .collect()
}

fn print_outcome(outcome: &AnalysisOutcome, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome_to_json(outcome)?)?);
    } else {
        println!("{}", render_outcome_text(outcome));
    }
    Ok(())
}

const PARENT_OPENERS: [&str; 3] = ["جرب مع طفلك:", "اقترح على طفلك:", "شجع طفلك أن:"];
const THERAPIST_OPENERS: [&str; 3] = ["نشاط مقترح:", "تدريب موجه:", "هدف الجلسة:"];

fn render_outcome_text(outcome: &AnalysisOutcome) -> String {
    if outcome.activities.is_empty() {
        return "لم يتم التعرف على عناصر مناسبة في الصورة. جرب صورة أوضح لمساحة اللعب."
            .to_string();
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "اقتراحات أنشطة لعمر {} سنوات ({} عناصر من البيئة):",
        outcome.age,
        outcome.elements.len()
    ));
    for (index, activity) in outcome.activities.iter().enumerate() {
        lines.push(format!(
            "{}. {}",
            index + 1,
            format_activity(activity, outcome)
        ));
    }
    lines.join("\n")
}

/// One rendered suggestion. Variant choice is driven entirely by the seeds
/// computed upstream, so the same outcome always renders the same text.
fn format_activity(activity: &RefinedActivity, outcome: &AnalysisOutcome) -> String {
    let name = outcome
        .display_names
        .get(&activity.object_label)
        .cloned()
        .unwrap_or_else(|| format!("عنصر ({})", activity.object_label));

    let body = if activity.element.safety.use_safe_alternatives_only {
        safe_alternative_phrase(activity, &name)
    } else {
        let bank = activity_phrases(activity.focus);
        let variant = activity.specific_skill_seed as usize % bank.len();
        bank[variant].replace("{name}", &name)
    };

    let mut line = match outcome.audience {
        Audience::Parent => {
            let opener = PARENT_OPENERS[activity.humanize_offset as usize % PARENT_OPENERS.len()];
            format!("{opener} {body}")
        }
        Audience::Therapist => {
            let opener =
                THERAPIST_OPENERS[activity.humanize_offset as usize % THERAPIST_OPENERS.len()];
            format!("{opener} {body} (المجال: {})", activity.focus.name_ar())
        }
    };

    if outcome.audience == Audience::Therapist && !activity.element.risks_ar.is_empty() {
        line.push_str(&format!(" — تنبيه: {}", activity.element.risks_ar.join("، ")));
    }
    if outcome.age >= AGE_ADVANCED_MIN {
        line.push_str(" ويمكن رفع التحدي بإضافة عد تنازلي أو توقيت.");
    }
    line
}

/// Restricted elements are only ever described through non-contact actions
/// drawn from their safe-action hints.
fn safe_alternative_phrase(activity: &RefinedActivity, name: &str) -> String {
    let hints = &activity.element.safety.safe_action_hints;
    if hints.is_empty() {
        return format!("اقترب من {name} وسم ما تراه حوله دون لمسه");
    }
    let hint = hints[activity.specific_skill_seed as usize % hints.len()];
    format!(
        "عند {name}، تدرب على {} مع إبقاء القطعة ثابتة في مكانها",
        hint.phrase_ar()
    )
}

fn activity_phrases(focus: TherapeuticFocus) -> &'static [&'static str] {
    match focus {
        TherapeuticFocus::SensoryRegulation => &[
            "اجلس بهدوء قرب {name} وتحسس ملمسه مع أخذ نفس عميق",
            "المس {name} براحة اليد وصف ملمسه بكلمة واحدة",
            "انظر إلى {name} وسم ثلاثة تفاصيل أو ألوان تراها فيه",
        ],
        TherapeuticFocus::MotorPlanning => &[
            "خطط مسارا يبدأ من {name} ويمر بثلاث محطات ثم يعود إليه",
            "رتب خطوات استخدام {name} ثم نفذها خطوة خطوة",
            "انتقل نحو {name} بثلاث طرق مختلفة: مشيا ثم زحفا ثم على أطراف الأصابع",
        ],
        TherapeuticFocus::ExecutiveFunction => &[
            "رتب أغراضا صغيرة حول {name} حسب الحجم ثم أعدها بالترتيب المعاكس",
            "اتفقا على قاعدة بسيطة للعب مع {name} وتبادلا الأدوار",
            "سم ثلاثة استخدامات مختلفة لـ{name} ثم جربا أفضلها",
        ],
        TherapeuticFocus::FineMotor => &[
            "التقط قطعا صغيرة وضعها على {name} واحدة تلو الأخرى",
            "تتبع حواف {name} بإصبع السبابة ببطء ثم بسرعة",
            "أمسك {name} بأطراف الأصابع وحركه دون أن يسقط",
        ],
        TherapeuticFocus::GrossMotor => &[
            "امش نحو {name} ثم ارجع إلى نقطة البداية بخطوات واسعة",
            "قف بجانب {name} واقفز في مكانك خمس مرات",
            "در حول {name} مرتين دون أن تلمسه",
        ],
        TherapeuticFocus::BilateralCoordination => &[
            "استخدم اليدين معا لحمل {name} وتحريكه ببطء",
            "مرر {name} من يد إلى يد عشر مرات متتالية",
            "ثبت {name} بيد واعمل عليه باليد الأخرى",
        ],
    }
}

#[cfg(test)]
mod tests {
    use rawda_contracts::config::Audience;
    use rawda_contracts::detection::RawDetection;
    use rawda_engine::{AnalysisEngine, AnalysisOutcome};
    use serde_json::{json, Map};

    use super::{detections_from_labels, render_outcome_text};

    fn outcome_for(
        labels: &[&str],
        age: u8,
        audience: Audience,
    ) -> anyhow::Result<AnalysisOutcome> {
        let temp = tempfile::tempdir()?;
        let out_dir = temp.path().join("request");
        let events_path = out_dir.join("events.jsonl");
        let mut settings = Map::new();
        settings.insert("shuffle_seed".to_string(), json!(21));
        let mut engine = AnalysisEngine::new(&out_dir, &events_path, None, Some(&settings))?;
        let detections: Vec<RawDetection> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| RawDetection::new(*label, 0.9 - index as f64 * 0.05))
            .collect();
        let outcome = engine.analyze_detections(detections, age, audience)?;
        engine.finish()?;
        Ok(outcome)
    }

    #[test]
    fn rendering_is_deterministic_for_a_fixed_outcome() -> anyhow::Result<()> {
        let outcome = outcome_for(&["ball", "puzzle", "carpet"], 5, Audience::Parent)?;
        assert_eq!(render_outcome_text(&outcome), render_outcome_text(&outcome));
        Ok(())
    }

    #[test]
    fn heavy_elements_render_safe_alternative_phrasing() -> anyhow::Result<()> {
        let outcome = outcome_for(&["sofa"], 5, Audience::Parent)?;
        let text = render_outcome_text(&outcome);
        assert!(text.contains("الأريكة"));
        // Non-contact phrasing keeps the furniture in place.
        assert!(text.contains("ثابتة في مكانها") || text.contains("دون لمسه"));
        Ok(())
    }

    #[test]
    fn therapist_register_names_the_focus_domain() -> anyhow::Result<()> {
        let outcome = outcome_for(&["ball", "puzzle"], 6, Audience::Therapist)?;
        let text = render_outcome_text(&outcome);
        assert!(text.contains("المجال:"));
        Ok(())
    }

    #[test]
    fn empty_outcome_renders_a_fallback_message() -> anyhow::Result<()> {
        let outcome = outcome_for(&[], 4, Audience::Parent)?;
        let text = render_outcome_text(&outcome);
        assert!(text.contains("لم يتم التعرف"));
        Ok(())
    }

    #[test]
    fn label_ladder_descends_from_the_front() {
        let detections = detections_from_labels(&[
            "ball".to_string(),
            "rug".to_string(),
            "box".to_string(),
        ]);
        assert_eq!(detections[0].probability, 0.9);
        assert!(detections[0].probability > detections[2].probability);
    }
}
