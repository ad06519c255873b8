//! Allow/block keyword lists for the element validator. The blocklist wins
//! over everything; the allowlist is the defense-in-depth floor beneath the
//! reasoner's curated table.

/// Common misdetections and scenes that have no place in a child-environment
/// plan. Any substring match excludes the label outright.
pub(crate) const BLOCKED_PATTERNS: &[&str] = &[
    "menu",
    "website",
    "web site",
    "billboard",
    "storefront",
    "street sign",
    "traffic light",
    "scoreboard",
    "seashore",
    "lakeside",
    "sandbar",
    "promontory",
    "alp",
    "volcano",
    "cliff",
    "valley",
    "desert",
    "prison",
    "theater curtain",
    "restaurant",
    "grocery store",
    "barbershop",
    "weapon",
    "gun",
    "rifle",
    "revolver",
    "knife",
    "razor",
    "chainsaw",
    "axe",
    "matchstick",
    "stove",
    "oven",
];

/// Plausible child-environment objects. A label must match at least one of
/// these to survive validation.
pub(crate) const ALLOWED_PATTERNS: &[&str] = &[
    "sofa",
    "couch",
    "armchair",
    "chair",
    "stool",
    "bench",
    "ottoman",
    "seat",
    "table",
    "desk",
    "counter",
    "bed",
    "crib",
    "cradle",
    "mattress",
    "cushion",
    "pillow",
    "blanket",
    "quilt",
    "towel",
    "curtain",
    "carpet",
    "rug",
    "mat",
    "shelf",
    "bookshelf",
    "bookcase",
    "cabinet",
    "cupboard",
    "wardrobe",
    "dresser",
    "drawer",
    "basket",
    "box",
    "bucket",
    "container",
    "stairs",
    "staircase",
    "step",
    "railing",
    "door",
    "window",
    "wall",
    "floor",
    "room",
    "hall",
    "nursery",
    "interior",
    "furniture",
    "home",
    "ball",
    "balloon",
    "toy",
    "doll",
    "teddy",
    "block",
    "cube",
    "puzzle",
    "jigsaw",
    "bead",
    "marble",
    "swing",
    "slide",
    "tricycle",
    "bicycle",
    "train",
    "kite",
    "drum",
    "tambourine",
    "xylophone",
    "piano",
    "guitar",
    "book",
    "notebook",
    "magazine",
    "crayon",
    "pencil",
    "pen",
    "marker",
    "chalk",
    "scissors",
    "brush",
    "cup",
    "bottle",
    "plate",
    "bowl",
    "spoon",
    "tray",
    "shirt",
    "shoe",
    "sock",
    "jacket",
    "hat",
    "backpack",
    "television",
    "lamp",
    "clock",
    "mirror",
    "picture",
    "plant",
];

/// Minimum age (inclusive) before a label is allowed at all. Everything here
/// is a small-part or sharp-edge hazard below the stated age.
pub(crate) const AGE_GATED_TERMS: &[(&str, u8)] = &[
    ("scissors", 3),
    ("balloon", 3),
    ("bead", 4),
    ("marble", 4),
    ("button", 4),
    ("coin", 5),
];
