use crate::recipe::DietaryTag;

const MEAT: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "bacon", "ham", "sausage", "turkey", "duck", "veal",
    "prosciutto", "salami", "chorizo", "pancetta", "steak", "mince",
];

const SEAFOOD: &[&str] = &[
    "fish", "salmon", "tuna", "shrimp", "prawn", "cod", "crab", "lobster", "anchov", "clam",
    "mussel", "scallop", "squid", "oyster", "sardine",
];

const DAIRY: &[&str] = &[
    "cheese", "butter", "milk", "cream", "yogurt", "yoghurt", "ghee", "parmesan", "mozzarella",
    "feta", "ricotta", "paneer",
];

const OTHER_ANIMAL: &[&str] = &["egg", "honey", "gelatin", "mayonnaise"];

const GLUTEN: &[&str] = &[
    "wheat", "flour", "pasta", "spaghetti", "noodle", "bread", "breadcrumb", "couscous", "barley",
    "rye", "seitan", "soy sauce", "tortilla",
];

const NUTS: &[&str] = &[
    "almond", "peanut", "cashew", "walnut", "pecan", "pistachio", "hazelnut", "macadamia",
    "pine nut",
];

const HIGH_CARB: &[&str] = &[
    "sugar", "rice", "potato", "pasta", "spaghetti", "bread", "flour", "noodle", "corn", "oats",
    "tortilla", "couscous",
];

const PLANT_MILKS: &[&str] = &[
    "coconut milk",
    "coconut cream",
    "almond milk",
    "oat milk",
    "soy milk",
    "peanut butter",
    "almond butter",
    "cashew butter",
    "cocoa butter",
    "butternut",
    "butter beans",
];

const MEAT_LOOKALIKES: &[&str] = &[
    "champignon",
    "chamomile",
    "graham",
    "lamb's lettuce",
    "lambs lettuce",
];

const SEAFOOD_LOOKALIKES: &[&str] = &["avocado"];

const EGG_LOOKALIKES: &[&str] = &["eggplant", "veggie"];

const NUT_LOOKALIKES: &[&str] = &["nutmeg", "coconut", "butternut", "chestnut", "water chestnut"];

const CARB_LOOKALIKES: &[&str] = &["cauliflower rice", "peppercorn", "goat", "licorice"];

/// Keyword rule for one dietary tag. Exempt phrases are masked out of the
/// ingredient before the banned keywords are checked.
struct DietRule {
    banned: &'static [&'static [&'static str]],
    exempt: &'static [&'static [&'static str]],
}

fn rule_for(tag: DietaryTag) -> DietRule {
    match tag {
        DietaryTag::Vegetarian => DietRule {
            banned: &[MEAT, SEAFOOD],
            exempt: &[MEAT_LOOKALIKES, SEAFOOD_LOOKALIKES],
        },
        DietaryTag::Vegan => DietRule {
            banned: &[MEAT, SEAFOOD, DAIRY, OTHER_ANIMAL],
            exempt: &[
                MEAT_LOOKALIKES,
                SEAFOOD_LOOKALIKES,
                PLANT_MILKS,
                EGG_LOOKALIKES,
            ],
        },
        DietaryTag::Pescatarian => DietRule {
            banned: &[MEAT],
            exempt: &[MEAT_LOOKALIKES],
        },
        DietaryTag::GlutenFree => DietRule {
            banned: &[GLUTEN],
            exempt: &[],
        },
        DietaryTag::DairyFree => DietRule {
            banned: &[DAIRY],
            exempt: &[PLANT_MILKS],
        },
        DietaryTag::NutFree => DietRule {
            banned: &[NUTS],
            exempt: &[NUT_LOOKALIKES],
        },
        DietaryTag::LowCarb => DietRule {
            banned: &[HIGH_CARB],
            exempt: &[CARB_LOOKALIKES],
        },
    }
}

impl DietRule {
    fn bans(&self, lowered: &str) -> bool {
        let mut masked = lowered.to_string();
        for phrase in self.exempt.iter().flat_map(|list| list.iter()) {
            if masked.contains(phrase) {
                masked = masked.replace(phrase, " ");
            }
        }
        self.banned
            .iter()
            .flat_map(|list| list.iter())
            .any(|kw| masked.contains(kw))
    }
}

/// Whether a single ingredient survives every active tag.
pub fn is_allowed(ingredient: &str, tags: &[DietaryTag]) -> bool {
    let lowered = ingredient.to_lowercase();
    !tags.iter().any(|tag| rule_for(*tag).bans(&lowered))
}

/// Drop every ingredient banned by any active tag. Order is preserved.
///
/// An ingredient is dropped when its lowercase form contains a keyword from
/// the ban list of at least one tag, so tag rules compose by union.
pub fn filter_ingredients<S: AsRef<str>>(ingredients: &[S], tags: &[DietaryTag]) -> Vec<String> {
    ingredients
        .iter()
        .map(AsRef::as_ref)
        .filter(|ing| is_allowed(ing, tags))
        .map(str::to_string)
        .collect()
}
