//! Curated interpretation table for household-object labels. Keyed by
//! substring against the normalized label; the longest matching term wins so
//! "coffee table" beats "table".

use super::{FunctionalCategory, InteractionPriority};

#[derive(Clone, Copy, Debug)]
pub(crate) struct LexiconEntry {
    pub term: &'static str,
    pub name_ar: &'static str,
    pub category: FunctionalCategory,
    pub note_ar: &'static str,
    pub relevance: f64,
    pub priority: InteractionPriority,
}

const fn entry(
    term: &'static str,
    name_ar: &'static str,
    category: FunctionalCategory,
    note_ar: &'static str,
    relevance: f64,
    priority: InteractionPriority,
) -> LexiconEntry {
    LexiconEntry {
        term,
        name_ar,
        category,
        note_ar,
        relevance,
        priority,
    }
}

use super::FunctionalCategory::*;
use super::InteractionPriority::{Background, Neutral, Tangible};

pub(crate) const LEXICON: &[LexiconEntry] = &[
    // seating
    entry("sofa", "الأريكة", Seating, "مقعد منخفض واسع يصلح للاتكاء والتنقل حوله", 0.9, Tangible),
    entry("couch", "الكنبة", Seating, "مقعد منخفض واسع يصلح للاتكاء والتنقل حوله", 0.9, Tangible),
    entry("armchair", "الكرسي ذو الذراعين", Seating, "مقعد بذراعين يدعم الجلوس المسنود", 0.8, Tangible),
    entry("rocking chair", "الكرسي الهزاز", Seating, "مقعد متحرك ينبه الجهاز الدهليزي", 0.8, Tangible),
    entry("chair", "الكرسي", Seating, "مقعد فردي يصلح لتمارين الجلوس والنهوض", 0.85, Tangible),
    entry("stool", "المقعد الصغير", Seating, "مقعد بلا ظهر يتطلب توازنا أثناء الجلوس", 0.75, Tangible),
    entry("bench", "المقعد الطويل", Seating, "مقعد طويل يصلح للجلوس الجانبي والتنقل عليه", 0.75, Tangible),
    entry("ottoman", "مقعد القدمين", Seating, "قطعة منخفضة تصلح نقطة عبور أثناء اللعب", 0.7, Tangible),
    // surfaces
    entry("coffee table", "طاولة القهوة", Surface, "سطح منخفض مناسب لأنشطة الوقوف المسنود", 0.85, Tangible),
    entry("dining table", "طاولة الطعام", Surface, "سطح مرتفع يجمع الأسرة لأنشطة المائدة", 0.8, Tangible),
    entry("desk", "المكتب", Surface, "سطح عمل مناسب لأنشطة الجلوس الدقيقة", 0.85, Tangible),
    entry("table", "الطاولة", Surface, "سطح عمل بارتفاع مناسب للأنشطة اليدوية", 0.85, Tangible),
    entry("counter", "سطح المطبخ", Surface, "سطح مرتفع ثابت بمحاذاة منطقة الإعداد", 0.55, Neutral),
    // sleep area
    entry("mattress", "المرتبة", SleepArea, "سطح طري يمتص القفز والتدحرج بأمان", 0.8, Tangible),
    entry("crib", "سرير الرضيع", SleepArea, "سرير محاط بقضبان يحدد مساحة آمنة", 0.7, Tangible),
    entry("cradle", "المهد", SleepArea, "مهد متأرجح يهدئ عبر الحركة الإيقاعية", 0.7, Tangible),
    entry("bed", "السرير", SleepArea, "سطح نوم منخفض يصلح للأنشطة الهادئة", 0.8, Tangible),
    // soft furnishings
    entry("cushion", "الوسادة الأرضية", SoftFurnishing, "وسادة طرية تصلح للجلوس وبناء مسارات", 0.85, Tangible),
    entry("pillow", "المخدة", SoftFurnishing, "مخدة خفيفة يسهل حملها ورصها", 0.85, Tangible),
    entry("blanket", "البطانية", SoftFurnishing, "غطاء قماشي يصلح للف والسحب والاختباء", 0.8, Tangible),
    entry("quilt", "اللحاف", SoftFurnishing, "غطاء مبطن يوفر ملمسا دافئا متجانسا", 0.75, Tangible),
    entry("towel", "المنشفة", SoftFurnishing, "قماش ماص يصلح للف والضغط العميق", 0.75, Tangible),
    entry("curtain", "الستارة", SoftFurnishing, "قماش معلق يتحرك مع الهواء ويحجب الضوء", 0.5, Neutral),
    // floor coverings
    entry("carpet", "السجادة", FloorCovering, "فرش أرضي وبري يحدد مساحة لعب واضحة", 0.85, Tangible),
    entry("rug", "البساط", FloorCovering, "بساط صغير يصلح نقطة بداية ونهاية للمسارات", 0.85, Tangible),
    entry("mat", "الحصيرة", FloorCovering, "حصيرة رقيقة تناسب أنشطة الأرضية", 0.8, Tangible),
    // storage
    entry("bookshelf", "رف الكتب", Storage, "رف مرتفع مثبت يعرض الكتب على مستويات", 0.6, Neutral),
    entry("bookcase", "خزانة الكتب", Storage, "خزانة مفتوحة مرتفعة لعرض الكتب", 0.6, Neutral),
    entry("shelf", "الرف", Storage, "رف مثبت يحدد مستويات وصول مختلفة", 0.6, Neutral),
    entry("cabinet", "الخزانة", Storage, "خزانة مغلقة بأبواب تفتح وتغلق", 0.6, Neutral),
    entry("cupboard", "الدولاب", Storage, "دولاب تخزين بأبواب في متناول اليد", 0.6, Neutral),
    entry("wardrobe", "خزانة الملابس", Storage, "خزانة ملابس كبيرة مثبتة بالحائط", 0.55, Neutral),
    entry("dresser", "التسريحة", Storage, "خزانة بأدراج تسحب وتدفع", 0.6, Neutral),
    entry("drawer", "الدرج", Storage, "درج يسحب ويدفع بمقبض صغير", 0.65, Tangible),
    entry("basket", "السلة", Storage, "سلة خفيفة تصلح للجمع والفرز والحمل", 0.85, Tangible),
    entry("box", "الصندوق", Storage, "صندوق يفتح ويغلق ويخبئ الأغراض", 0.85, Tangible),
    entry("bucket", "الدلو", Storage, "دلو بمقبض يصلح للتعبئة والتفريغ", 0.8, Tangible),
    entry("container", "الحاوية", Storage, "وعاء بغطاء يناسب أنشطة الفتح والإغلاق", 0.75, Tangible),
    // structure
    entry("stairs", "الدرج المنزلي", Structure, "درجات متكررة تتطلب تخطيطا لكل خطوة", 0.7, Neutral),
    entry("staircase", "سلم المنزل", Structure, "سلم داخلي بدرابزين جانبي", 0.7, Neutral),
    entry("step", "الدرجة", Structure, "درجة واحدة تصلح لتمرين الصعود والنزول", 0.65, Neutral),
    entry("railing", "الدرابزين", Structure, "مسند إمساك ثابت بمحاذاة الدرج", 0.5, Background),
    entry("door", "الباب", Structure, "فاصل متحرك بين الغرف بمقبض دوار", 0.45, Background),
    entry("window", "النافذة", Structure, "فتحة إضاءة مرتفعة تطل على الخارج", 0.4, Background),
    entry("wall", "الجدار", Structure, "سطح رأسي ثابت يصلح مسندا للظهر", 0.4, Background),
    entry("floor", "الأرضية", Structure, "مساحة الحركة الأساسية في الغرفة", 0.45, Background),
    entry("ceiling", "السقف", Structure, "سطح علوي خارج متناول الطفل", 0.3, Background),
    // play objects
    entry("balloon", "البالون", PlayObject, "جسم خفيف بطيء الهبوط يسهل تتبعه", 0.85, Tangible),
    entry("ball", "الكرة", PlayObject, "كرة تدحرج وترمى وتلتقط بكلتا اليدين", 0.95, Tangible),
    entry("teddy", "الدبدوب", PlayObject, "دمية قطيفة مطمئنة سهلة الحضن", 0.85, Tangible),
    entry("doll", "الدمية", PlayObject, "دمية تصلح للعب التمثيلي والتسمية", 0.85, Tangible),
    entry("toy", "اللعبة", PlayObject, "لعبة يدوية في متناول الطفل", 0.9, Tangible),
    entry("block", "المكعبات", PlayObject, "مكعبات بناء تتراص وتتوازن", 0.9, Tangible),
    entry("cube", "المكعب", PlayObject, "مكعب صغير يقبض ويدار بالأصابع", 0.85, Tangible),
    entry("puzzle", "الأحجية", PlayObject, "قطع تركيب تتطلب مطابقة وترتيبا", 0.9, Tangible),
    entry("jigsaw", "أحجية الصور", PlayObject, "قطع صور متداخلة تركب في إطار", 0.85, Tangible),
    entry("bead", "الخرز", PlayObject, "خرزات صغيرة تنظم على خيط", 0.8, Tangible),
    entry("marble", "البلية", PlayObject, "كرات زجاجية صغيرة تدحرج بدقة", 0.75, Tangible),
    entry("swing", "الأرجوحة", PlayObject, "أرجوحة معلقة تنبه التوازن بقوة", 0.8, Tangible),
    entry("slide", "الزحليقة", PlayObject, "منحدر لعب يتطلب صعودا ثم انزلاقا", 0.8, Tangible),
    entry("tricycle", "الدراجة الثلاثية", PlayObject, "دراجة ثلاثية العجلات تدفع بالقدمين", 0.8, Tangible),
    entry("bicycle", "الدراجة", PlayObject, "دراجة توازن تتطلب تنسيقا كاملا", 0.75, Tangible),
    entry("train", "القطار اللعبة", PlayObject, "قطار صغير يجر على مسار", 0.8, Tangible),
    entry("kite", "الطائرة الورقية", PlayObject, "طائرة ورقية تتبع بالنظر والشد", 0.7, Tangible),
    // instruments
    entry("tambourine", "الدف", Instrument, "دف يهز ويقرع على الإيقاع", 0.8, Tangible),
    entry("xylophone", "الإكسيليفون", Instrument, "صفائح ملونة تقرع بمضرب صغير", 0.8, Tangible),
    entry("drum", "الطبلة", Instrument, "طبلة تقرع باليدين بالتناوب", 0.8, Tangible),
    entry("piano", "البيانو", Instrument, "آلة مفاتيح كبيرة ثابتة في مكانها", 0.65, Tangible),
    entry("guitar", "الجيتار", Instrument, "آلة وترية تحتضن وتعزف بكلتا اليدين", 0.7, Tangible),
    // learning
    entry("notebook", "الدفتر", Learning, "دفتر صفحات يقلب ويرسم فيه", 0.8, Tangible),
    entry("magazine", "المجلة", Learning, "مجلة مصورة تقلب صفحاتها بخفة", 0.7, Tangible),
    entry("book", "الكتاب", Learning, "كتاب يقلب ويقرأ ويصنف على الرف", 0.85, Tangible),
    // art supplies
    entry("crayon", "أقلام التلوين الشمعية", ArtSupply, "أقلام شمعية سميكة تناسب القبضة الصغيرة", 0.85, Tangible),
    entry("pencil", "قلم الرصاص", ArtSupply, "قلم رفيع يتطلب قبضة ثلاثية", 0.8, Tangible),
    entry("marker", "القلم اللباد", ArtSupply, "قلم عريض بغطاء يفتح ويغلق", 0.8, Tangible),
    entry("chalk", "الطباشير", ArtSupply, "طباشير يرسم بها على أسطح خشنة", 0.75, Tangible),
    entry("scissors", "المقص", ArtSupply, "مقص أطفال يتطلب فتحا وإغلاقا منتظمين", 0.75, Tangible),
    entry("brush", "الفرشاة", ArtSupply, "فرشاة تلوين تمسك وتمرر بخفة", 0.75, Tangible),
    entry("pen", "القلم", ArtSupply, "قلم حبر للخربشة الحرة", 0.7, Tangible),
    // tableware
    entry("bottle", "الزجاجة", Tableware, "زجاجة بغطاء يبرم فتحا وإغلاقا", 0.75, Tangible),
    entry("spoon", "الملعقة", Tableware, "ملعقة تغرف وتنقل بثبات", 0.75, Tangible),
    entry("plate", "الطبق", Tableware, "طبق مسطح يحمل بكلتا اليدين", 0.7, Tangible),
    entry("bowl", "الزبدية", Tableware, "وعاء عميق يملأ ويفرغ", 0.75, Tangible),
    entry("tray", "الصينية", Tableware, "صينية تحمل أغراضا مع الحفاظ على توازنها", 0.7, Tangible),
    entry("cup", "الكوب", Tableware, "كوب بمقبض يرفع ويوضع بدقة", 0.75, Tangible),
    // clothing
    entry("backpack", "حقيبة الظهر", Clothing, "حقيبة بسحابات وأحزمة تفتح وتغلق", 0.8, Tangible),
    entry("jacket", "السترة", Clothing, "سترة بأزرار أو سحاب للارتداء والخلع", 0.7, Tangible),
    entry("shirt", "القميص", Clothing, "قميص بأزرار يدرب ارتداء الملابس", 0.7, Tangible),
    entry("shoe", "الحذاء", Clothing, "حذاء برباط أو لاصق يلبس ويخلع", 0.75, Tangible),
    entry("sock", "الجورب", Clothing, "جورب مرن يشد ويطوى", 0.7, Tangible),
    entry("hat", "القبعة", Clothing, "قبعة تلبس وتخلع أمام المرآة", 0.65, Tangible),
    // appliances and electronics
    entry("television", "التلفاز", Appliance, "شاشة كبيرة ثابتة في مكانها", 0.5, Neutral),
    entry("refrigerator", "الثلاجة", Appliance, "جهاز تبريد ضخم بباب ثقيل", 0.5, Neutral),
    entry("washing machine", "الغسالة", Appliance, "جهاز غسيل ثقيل ذو باب دائري", 0.5, Neutral),
    entry("microwave", "الميكروويف", Appliance, "جهاز مطبخ مرتفع خارج متناول الطفل", 0.45, Neutral),
    entry("sink", "المغسلة", Appliance, "مغسلة ثابتة بصنبور ماء", 0.5, Neutral),
    entry("lamp", "المصباح", Appliance, "مصباح قابل للانقلاب يضيء الركن", 0.5, Neutral),
    entry("fan", "المروحة", Appliance, "مروحة هواء متحركة الأجزاء", 0.45, Neutral),
    entry("clock", "الساعة", Appliance, "ساعة حائط بعقارب تتحرك", 0.5, Neutral),
    entry("remote", "جهاز التحكم", Appliance, "جهاز تحكم صغير بأزرار مرقمة", 0.6, Tangible),
    // decor
    entry("mirror", "المرآة", Decor, "مرآة تعكس الحركة وتعزز الوعي بالجسم", 0.65, Neutral),
    entry("picture", "اللوحة", Decor, "صورة معلقة تصلح للوصف والتسمية", 0.55, Neutral),
    entry("painting", "اللوحة الفنية", Decor, "لوحة ملونة تعلق على الجدار", 0.55, Neutral),
    entry("vase", "المزهرية", Decor, "مزهرية قابلة للكسر توضع عاليا", 0.45, Neutral),
    entry("plant", "النبتة المنزلية", Decor, "نبتة في أصيص ذات أوراق تتحسس بلطف", 0.55, Neutral),
];

/// Secondary rules for labels that name a room or environment rather than an
/// object. Matched only when no curated entry fits.
pub(crate) const ENV_HINTS: &[LexiconEntry] = &[
    entry("playroom", "غرفة اللعب", Structure, "مساحة مخصصة للعب تتسع للحركة", 0.6, Neutral),
    entry("nursery", "غرفة الأطفال", Structure, "غرفة نوم وأنشطة مخصصة للطفل", 0.6, Neutral),
    entry("bedroom", "غرفة النوم", Structure, "غرفة هادئة تناسب الأنشطة الختامية", 0.55, Neutral),
    entry("living", "غرفة المعيشة", Structure, "مساحة العائلة الرئيسية للعب المشترك", 0.55, Neutral),
    entry("kitchen", "ركن المطبخ", Structure, "منطقة إعداد تتطلب إشرافا لصيقا", 0.45, Neutral),
    entry("hall", "الممر", Structure, "ممر مستقيم يصلح لمسارات المشي", 0.5, Neutral),
    entry("room", "مساحة الغرفة", Structure, "مساحة داخلية عامة قابلة للترتيب", 0.5, Neutral),
    entry("interior", "المساحة الداخلية", Structure, "مشهد داخلي عام من المنزل", 0.45, Neutral),
    entry("furniture", "قطعة أثاث", Structure, "قطعة أثاث منزلية غير محددة", 0.5, Neutral),
    entry("home", "مساحة المنزل", Structure, "مشهد منزلي عام", 0.45, Neutral),
];

/// Labels that never belong in a child's activity plan regardless of
/// confidence.
pub(crate) const EXCLUDED_TERMS: &[&str] = &[
    "weapon",
    "gun",
    "rifle",
    "pistol",
    "revolver",
    "holster",
    "sword",
    "dagger",
    "bayonet",
    "grenade",
    "missile",
    "bullet",
    "cigarette",
    "cigar",
    "tobacco",
    "ashtray",
    "lighter",
    "alcohol",
    "beer",
    "wine",
    "whiskey",
    "vodka",
    "cocktail",
    "casino",
    "slot machine",
    "nightclub",
    "swastika",
    "guillotine",
    "gallows",
    "coffin",
    "syringe",
];

/// Terms that make an otherwise-unknown label plausible for a child's home.
const LIKELY_CHILD_TERMS: &[&str] = &[
    "play", "child", "kids", "baby", "soft", "plush", "plastic", "wooden", "mini", "game", "craft",
];

/// Household-ish suffixes that keep an unknown label in the maybe bucket.
const HOUSEHOLD_HINTS: &[&str] = &["ware", "cloth", "board", "stand", "holder", "rack", "case"];

/// Relevance weight for labels with no curated or environment entry. At or
/// above 0.5 the reasoner emits a hedge-named element; below, nothing.
pub(crate) fn fallback_relevance(label: &str) -> f64 {
    if LIKELY_CHILD_TERMS.iter().any(|term| label.contains(term)) {
        return 0.7;
    }
    if HOUSEHOLD_HINTS.iter().any(|term| label.contains(term)) {
        return 0.55;
    }
    let single_word = !label.contains(' ');
    if single_word && label.len() <= 12 && label.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return 0.5;
    }
    0.3
}
