//! Static attribute tables for environment elements, keyed by substring
//! against the normalized label. Per-object behavior stays declarative data
//! rather than a type hierarchy; unmatched labels fall back to defaults in
//! the analyzer.

use crate::focus::TherapeuticFocus;
use crate::focus::TherapeuticFocus::{
    BilateralCoordination, ExecutiveFunction, FineMotor, GrossMotor, MotorPlanning,
    SensoryRegulation,
};

use super::{HeightBand, Stability};

pub(crate) const HEIGHT_TABLE: &[(&str, HeightBand)] = &[
    ("coffee table", HeightBand::Low),
    ("dining table", HeightBand::Table),
    ("table", HeightBand::Table),
    ("desk", HeightBand::Table),
    ("counter", HeightBand::Table),
    ("sofa", HeightBand::Low),
    ("couch", HeightBand::Low),
    ("armchair", HeightBand::Low),
    ("chair", HeightBand::Low),
    ("stool", HeightBand::Low),
    ("bench", HeightBand::Low),
    ("ottoman", HeightBand::Low),
    ("bed", HeightBand::Low),
    ("crib", HeightBand::Low),
    ("mattress", HeightBand::Floor),
    ("cushion", HeightBand::Floor),
    ("pillow", HeightBand::Low),
    ("carpet", HeightBand::Floor),
    ("rug", HeightBand::Floor),
    ("mat", HeightBand::Floor),
    ("stairs", HeightBand::Elevated),
    ("staircase", HeightBand::Elevated),
    ("step", HeightBand::Elevated),
    ("bookshelf", HeightBand::Elevated),
    ("bookcase", HeightBand::Elevated),
    ("shelf", HeightBand::Elevated),
    ("window", HeightBand::Elevated),
    ("swing", HeightBand::Elevated),
    ("slide", HeightBand::Elevated),
    ("cabinet", HeightBand::Mid),
    ("wardrobe", HeightBand::Mid),
    ("dresser", HeightBand::Mid),
    ("door", HeightBand::Mid),
    ("wall", HeightBand::Mid),
    ("mirror", HeightBand::Mid),
    ("television", HeightBand::Mid),
    ("lamp", HeightBand::Mid),
    ("ball", HeightBand::Floor),
    ("blanket", HeightBand::Floor),
    ("basket", HeightBand::Floor),
    ("box", HeightBand::Floor),
];

pub(crate) const STABILITY_TABLE: &[(&str, Stability)] = &[
    ("wall", Stability::Fixed),
    ("door", Stability::Fixed),
    ("window", Stability::Fixed),
    ("floor", Stability::Fixed),
    ("stairs", Stability::Fixed),
    ("staircase", Stability::Fixed),
    ("railing", Stability::Fixed),
    ("counter", Stability::Fixed),
    ("sink", Stability::Fixed),
    ("wardrobe", Stability::Fixed),
    ("bookcase", Stability::Fixed),
    ("bookshelf", Stability::Fixed),
    ("ball", Stability::Mobile),
    ("balloon", Stability::Mobile),
    ("toy", Stability::Mobile),
    ("doll", Stability::Mobile),
    ("chair", Stability::Mobile),
    ("stool", Stability::Mobile),
    ("basket", Stability::Mobile),
    ("box", Stability::Mobile),
    ("bucket", Stability::Mobile),
    ("cushion", Stability::Mobile),
    ("pillow", Stability::Mobile),
    ("blanket", Stability::Mobile),
    ("swing", Stability::Mobile),
    ("tricycle", Stability::Mobile),
    ("bicycle", Stability::Mobile),
];

pub(crate) const TEXTURE_TABLE: &[(&str, &str)] = &[
    ("sofa", "قماش منجد ناعم"),
    ("couch", "قماش منجد ناعم"),
    ("armchair", "قماش منجد ناعم"),
    ("cushion", "إسفنج طري"),
    ("pillow", "إسفنج طري"),
    ("mattress", "إسفنج مرن"),
    ("blanket", "قماش دافئ"),
    ("towel", "قطن ماص خشن قليلا"),
    ("carpet", "نسيج وبري"),
    ("rug", "نسيج وبري قصير"),
    ("mat", "سطح مطاطي متماسك"),
    ("table", "خشب أملس صلب"),
    ("desk", "خشب أملس صلب"),
    ("chair", "خشب أو بلاستيك صلب"),
    ("stairs", "سطح صلب بحواف"),
    ("ball", "مطاط مرن"),
    ("balloon", "مطاط رقيق مشدود"),
    ("block", "خشب مصقول"),
    ("mirror", "زجاج أملس بارد"),
    ("basket", "خوص مضفر"),
    ("book", "ورق وغلاف أملس"),
    ("curtain", "قماش خفيف منسدل"),
];

pub(crate) const MOTOR_TABLE: &[(&str, &[TherapeuticFocus])] = &[
    ("sofa", &[GrossMotor, SensoryRegulation]),
    ("couch", &[GrossMotor, SensoryRegulation]),
    ("armchair", &[GrossMotor, SensoryRegulation]),
    ("chair", &[GrossMotor, MotorPlanning]),
    ("stool", &[GrossMotor, MotorPlanning]),
    ("bench", &[GrossMotor, BilateralCoordination]),
    ("coffee table", &[GrossMotor, MotorPlanning]),
    ("table", &[FineMotor, ExecutiveFunction, BilateralCoordination]),
    ("desk", &[FineMotor, ExecutiveFunction]),
    ("bed", &[GrossMotor, SensoryRegulation]),
    ("mattress", &[GrossMotor, SensoryRegulation, MotorPlanning]),
    ("cushion", &[SensoryRegulation, GrossMotor, BilateralCoordination]),
    ("pillow", &[SensoryRegulation, BilateralCoordination]),
    ("blanket", &[SensoryRegulation, BilateralCoordination]),
    ("towel", &[BilateralCoordination, SensoryRegulation]),
    ("carpet", &[SensoryRegulation, GrossMotor, FineMotor]),
    ("rug", &[SensoryRegulation, GrossMotor]),
    ("mat", &[GrossMotor, MotorPlanning, SensoryRegulation]),
    ("stairs", &[GrossMotor, MotorPlanning]),
    ("staircase", &[GrossMotor, MotorPlanning]),
    ("step", &[GrossMotor, MotorPlanning]),
    ("shelf", &[ExecutiveFunction, FineMotor]),
    ("bookshelf", &[ExecutiveFunction, FineMotor]),
    ("bookcase", &[ExecutiveFunction, FineMotor]),
    ("cabinet", &[ExecutiveFunction, FineMotor]),
    ("drawer", &[FineMotor, ExecutiveFunction]),
    ("basket", &[BilateralCoordination, MotorPlanning, GrossMotor]),
    ("box", &[BilateralCoordination, ExecutiveFunction]),
    ("bucket", &[BilateralCoordination, GrossMotor]),
    ("ball", &[GrossMotor, BilateralCoordination, MotorPlanning]),
    ("balloon", &[GrossMotor, BilateralCoordination, SensoryRegulation]),
    ("toy", &[FineMotor, ExecutiveFunction, SensoryRegulation]),
    ("doll", &[FineMotor, ExecutiveFunction]),
    ("teddy", &[SensoryRegulation, FineMotor]),
    ("block", &[FineMotor, BilateralCoordination, ExecutiveFunction]),
    ("cube", &[FineMotor, BilateralCoordination]),
    ("puzzle", &[FineMotor, ExecutiveFunction]),
    ("jigsaw", &[FineMotor, ExecutiveFunction]),
    ("bead", &[FineMotor, BilateralCoordination]),
    ("book", &[FineMotor, ExecutiveFunction]),
    ("notebook", &[FineMotor, ExecutiveFunction]),
    ("crayon", &[FineMotor, BilateralCoordination]),
    ("pencil", &[FineMotor]),
    ("marker", &[FineMotor, BilateralCoordination]),
    ("scissors", &[FineMotor, BilateralCoordination]),
    ("brush", &[FineMotor, BilateralCoordination]),
    ("cup", &[FineMotor, MotorPlanning]),
    ("bottle", &[FineMotor, BilateralCoordination]),
    ("spoon", &[FineMotor, MotorPlanning]),
    ("bowl", &[FineMotor, BilateralCoordination]),
    ("tray", &[BilateralCoordination, MotorPlanning]),
    ("shirt", &[FineMotor, MotorPlanning, BilateralCoordination]),
    ("shoe", &[FineMotor, MotorPlanning]),
    ("sock", &[FineMotor, BilateralCoordination]),
    ("backpack", &[MotorPlanning, ExecutiveFunction, BilateralCoordination]),
    ("drum", &[BilateralCoordination, SensoryRegulation, MotorPlanning]),
    ("tambourine", &[BilateralCoordination, SensoryRegulation]),
    ("xylophone", &[FineMotor, BilateralCoordination]),
    ("piano", &[FineMotor, BilateralCoordination]),
    ("mirror", &[SensoryRegulation, ExecutiveFunction]),
    ("swing", &[SensoryRegulation, GrossMotor]),
    ("slide", &[GrossMotor, MotorPlanning]),
    ("tricycle", &[GrossMotor, BilateralCoordination, MotorPlanning]),
    ("curtain", &[SensoryRegulation, FineMotor]),
    ("plant", &[SensoryRegulation, FineMotor]),
];

pub(crate) const RISK_TABLE: &[(&str, &str)] = &[
    ("stairs", "خطر السقوط من الدرجات"),
    ("staircase", "خطر السقوط من الدرجات"),
    ("step", "خطر التعثر على الدرجة"),
    ("stool", "خطر فقدان التوازن عند الوقوف عليه"),
    ("shelf", "خطر سقوط الأغراض من الرف"),
    ("bookshelf", "خطر سقوط الأغراض من الرف"),
    ("window", "خطر الاقتراب من النافذة دون إشراف"),
    ("scissors", "خطر الأدوات الحادة"),
    ("balloon", "خطر الاختناق إذا انفجر"),
    ("bead", "خطر بلع القطع الصغيرة"),
    ("marble", "خطر بلع القطع الصغيرة"),
    ("ball", "خطر الانزلاق عند الدوس عليها"),
    ("swing", "خطر السقوط أثناء التأرجح"),
    ("slide", "خطر الاندفاع بسرعة عند النزول"),
    ("lamp", "خطر انقلاب المصباح وسلكه"),
    ("television", "خطر انقلاب الشاشة إذا شدت"),
    ("mirror", "خطر انكسار الزجاج"),
    ("bicycle", "خطر السقوط دون واق"),
];

/// Small play objects default to floor height when no height entry matches.
pub(crate) const SMALL_PLAY_TERMS: &[&str] = &[
    "ball", "toy", "block", "cube", "doll", "teddy", "puzzle", "bead", "marble", "crayon", "train",
];
