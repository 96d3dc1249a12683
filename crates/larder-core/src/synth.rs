//! Heuristic recipe synthesis.
//!
//! Everything random is drawn from a caller-supplied [`Rng`], so a seeded
//! generator reproduces a recipe exactly, id included.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calories::estimate_calories;
use crate::diet::filter_ingredients;
use crate::recipe::{clamp_servings, Cuisine, DietaryTag, Recipe, RecipeRequest};

/// Used as the main ingredient when the pantry is empty after filtering.
pub const FALLBACK_MAIN: &str = "seasonal vegetables";

pub const STEP_COUNT: usize = 6;
pub const MAX_PANTRY_PICKS: usize = 6;
pub const STAPLE_PICKS: usize = 4;
pub const MIN_TIME_MINUTES: u32 = 20;
pub const MAX_TIME_MINUTES: u32 = 55;
pub const DEFAULT_FUSION_PROBABILITY: f64 = 0.1;

const MAIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "salmon", "shrimp", "prawn", "fish", "cod",
    "tofu", "tempeh", "paneer", "chickpea", "lentil", "bean", "egg", "mushroom", "eggplant",
    "cauliflower", "potato", "squash", "spinach",
];

const STAPLES: &[&str] = &[
    "olive oil",
    "salt",
    "black pepper",
    "garlic",
    "onion",
    "lemon",
    "fresh herbs",
    "chili flakes",
];

const SERVING_STYLES: &[&str] = &[
    "bowl", "skillet", "traybake", "wraps", "stew", "salad", "stir-fry", "bake",
];

const TECHNIQUES: &[&str] = &[
    "sear", "roast", "sauté", "braise", "grill", "stir-fry", "poach",
];

const TITLE_TEMPLATES: &[&str] = &[
    "{flavor} {main} {style}",
    "{main} {style} with {flavor} Notes",
    "Weeknight {flavor} {main}",
    "One-Pan {flavor} {main} {style}",
    "{flavor} {main} & Greens {style}",
];

const TIPS: &[&str] = &[
    "Pat proteins dry before cooking for a better sear.",
    "Salt in layers: a little at each stage builds deeper flavor.",
    "Finish with a squeeze of citrus to brighten the dish.",
    "Let the pan get properly hot before anything goes in.",
    "Leftovers keep for up to three days in an airtight container.",
    "Toast whole spices briefly to wake up their aroma.",
    "Rest cooked meat for five minutes before slicing.",
    "Swap in whatever greens you have; the method stays the same.",
];

fn flavors(cuisine: Cuisine) -> &'static [&'static str] {
    match cuisine {
        Cuisine::Italian => &["Tuscan", "Garlic-Herb", "Lemon-Basil", "Sun-Dried Tomato"],
        Cuisine::Mexican => &["Chipotle", "Lime-Cilantro", "Smoky Ancho", "Salsa Verde"],
        Cuisine::Indian => &["Garam Masala", "Tandoori", "Coconut Curry", "Cumin-Spiced"],
        Cuisine::Chinese => &["Ginger-Scallion", "Sichuan", "Garlic-Chili", "Five-Spice"],
        Cuisine::Japanese => &["Miso-Glazed", "Teriyaki", "Yuzu-Sesame", "Ginger-Soy"],
        Cuisine::Thai => &["Lemongrass", "Green Curry", "Basil-Chili", "Peanut-Lime"],
        Cuisine::French => &["Herbes de Provence", "Dijon", "Shallot-Thyme", "Provençal"],
        Cuisine::Mediterranean => &["Lemon-Oregano", "Za'atar", "Olive & Herb", "Garlic-Lemon"],
        Cuisine::American => &["Smoky BBQ", "Cajun", "Honey-Mustard", "Southern-Style"],
        Cuisine::Korean => &["Gochujang", "Sesame-Garlic", "Bulgogi-Style", "Kimchi"],
        Cuisine::MiddleEastern => &["Sumac", "Harissa", "Tahini-Lemon", "Baharat"],
        Cuisine::Fusion => &["Sweet-Heat", "Umami-Bomb", "Citrus-Chili", "Smoky-Sweet"],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Chance that the recorded cuisine label becomes `Fusion`.
    pub fusion_probability: f64,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            fusion_probability: DEFAULT_FUSION_PROBABILITY,
        }
    }
}

/// Owns a random source so callers can re-roll without threading it through.
pub struct Synthesizer<R> {
    rng: R,
    options: SynthesisOptions,
}

impl<R: Rng> Synthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self::with_options(rng, SynthesisOptions::default())
    }

    pub fn with_options(rng: R, options: SynthesisOptions) -> Self {
        Self { rng, options }
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    pub fn generate(&mut self, request: &RecipeRequest) -> Recipe {
        synthesize(&mut self.rng, request, &self.options)
    }
}

/// Synthesize a recipe using the thread-local generator and default options.
pub fn generate_recipe(request: &RecipeRequest) -> Recipe {
    synthesize(&mut rand::thread_rng(), request, &SynthesisOptions::default())
}

/// Compose a recipe from the request. Total: never fails, even on an empty pantry.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    request: &RecipeRequest,
    options: &SynthesisOptions,
) -> Recipe {
    let dietary = request.unique_dietary();
    let cleaned: Vec<&str> = request
        .pantry
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let pantry = filter_ingredients(&cleaned, &dietary);

    let main = pick_main(&pantry);
    let flavor = pick(rng, flavors(request.cuisine));
    let style = pick(rng, SERVING_STYLES);
    let template = pick(rng, TITLE_TEMPLATES);
    let title = template
        .replace("{flavor}", flavor)
        .replace("{main}", &title_case(&main))
        .replace("{style}", &title_case(style));

    let time_minutes = rng.gen_range(MIN_TIME_MINUTES..=MAX_TIME_MINUTES);
    let mut description = format!(
        "A {} {} {} built around {}, ready in about {} minutes.",
        flavor.to_lowercase(),
        request.cuisine.display_name(),
        style,
        main,
        time_minutes
    );
    if let Some(notes) = request.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        description.push_str(" Notes: ");
        description.push_str(notes);
    }

    let ingredients = compose_ingredients(rng, &pantry, &dietary);
    let technique = pick(rng, TECHNIQUES);
    let steps = compose_steps(&main, technique, style);

    let tip_count = rng.gen_range(2..=3);
    let tips: Vec<String> = TIPS
        .choose_multiple(rng, tip_count)
        .map(|t| t.to_string())
        .collect();

    let calories = estimate_calories(&ingredients);

    let p = options.fusion_probability.clamp(0.0, 1.0);
    let cuisine = if p > 0.0 && rng.gen_bool(p) {
        Cuisine::Fusion
    } else {
        request.cuisine
    };

    let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

    Recipe {
        id: id.to_string(),
        title,
        description,
        cuisine,
        servings: clamp_servings(request.servings),
        time_minutes,
        dietary,
        ingredients,
        steps,
        tips: Some(tips),
        calories_per_serving: Some(calories),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &'a [&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// First pantry entry that looks like a protein or hearty vegetable, else
/// the first entry, else [`FALLBACK_MAIN`].
fn pick_main(pantry: &[String]) -> String {
    pantry
        .iter()
        .find(|ing| {
            let lowered = ing.to_lowercase();
            MAIN_KEYWORDS.iter().any(|kw| lowered.contains(kw))
        })
        .or_else(|| pantry.first())
        .cloned()
        .unwrap_or_else(|| FALLBACK_MAIN.to_string())
}

fn compose_ingredients<R: Rng + ?Sized>(
    rng: &mut R,
    pantry: &[String],
    dietary: &[DietaryTag],
) -> Vec<String> {
    let staples = filter_ingredients(STAPLES, dietary);
    let from_pantry: Vec<&String> = pantry.choose_multiple(rng, MAX_PANTRY_PICKS).collect();
    let from_staples: Vec<&String> = staples.choose_multiple(rng, STAPLE_PICKS).collect();

    let mut out: Vec<String> = Vec::new();
    for ing in from_pantry.into_iter().chain(from_staples) {
        if !ing.is_empty() && !out.contains(ing) {
            out.push(ing.clone());
        }
    }
    out
}

fn compose_steps(main: &str, technique: &str, style: &str) -> Vec<String> {
    vec![
        format!("Prep everything first: rinse, pat dry and cut the {main} into even pieces."),
        format!("Season the {main} with salt, pepper and a pinch of the aromatics."),
        format!("Heat a heavy pan over medium-high heat and {technique} the {main} until golden and cooked through."),
        "Add the remaining ingredients and cook until just tender, stirring now and then.".to_string(),
        "Taste, adjust the seasoning and brighten with citrus or fresh herbs.".to_string(),
        format!("Serve as a {style} while hot."),
    ]
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::calories::CALORIE_FLOOR;
    use crate::diet::is_allowed;
    use crate::recipe::{MAX_SERVINGS, MIN_SERVINGS};

    fn request(pantry: &[&str]) -> RecipeRequest {
        RecipeRequest::new(
            pantry.iter().map(|s| s.to_string()).collect(),
            Cuisine::Mediterranean,
        )
    }

    #[test]
    fn mediterranean_dairy_free_example() {
        let mut req = request(&["chicken", "garlic", "lemon", "spinach", "rice"]);
        req.servings = 2;
        req.dietary = vec![DietaryTag::DairyFree];

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let recipe = synthesize(&mut rng, &req, &SynthesisOptions::default());
            assert_eq!(recipe.servings, 2);
            assert!(recipe.calories_per_serving.unwrap() >= 120);
            for ing in &recipe.ingredients {
                let lowered = ing.to_lowercase();
                for banned in ["cheese", "butter", "milk", "cream", "yogurt"] {
                    assert!(!lowered.contains(banned), "{ing} should be filtered");
                }
            }
            assert_eq!(recipe.dietary, vec![DietaryTag::DairyFree]);
        }
    }

    #[test]
    fn structural_shape_holds() {
        let req = request(&["salmon", "asparagus", "dill"]);
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let recipe = synthesize(&mut rng, &req, &SynthesisOptions::default());
            assert!(!recipe.id.is_empty());
            assert!(!recipe.title.is_empty());
            assert_eq!(recipe.steps.len(), STEP_COUNT);
            let tips = recipe.tips.as_ref().unwrap();
            assert!((2..=3).contains(&tips.len()));
            let unique_tips: HashSet<&String> = tips.iter().collect();
            assert_eq!(unique_tips.len(), tips.len());
            assert!((MIN_TIME_MINUTES..=MAX_TIME_MINUTES).contains(&recipe.time_minutes));
            assert!(recipe.ingredients.len() <= MAX_PANTRY_PICKS + STAPLE_PICKS);
        }
    }

    #[test]
    fn ingredients_have_no_duplicates_or_blanks() {
        // "garlic" and "lemon" are also staples
        let req = request(&["garlic", "lemon", "  ", "", "tofu", "garlic"]);
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let recipe = synthesize(&mut rng, &req, &SynthesisOptions::default());
            let unique: HashSet<&String> = recipe.ingredients.iter().collect();
            assert_eq!(unique.len(), recipe.ingredients.len());
            assert!(recipe.ingredients.iter().all(|i| !i.trim().is_empty()));
        }
    }

    #[test]
    fn servings_are_clamped() {
        for (asked, expected) in [(-3, MIN_SERVINGS), (0, MIN_SERVINGS), (5, 5), (40, MAX_SERVINGS)] {
            let mut req = request(&["tofu"]);
            req.servings = asked;
            let mut rng = StdRng::seed_from_u64(7);
            let recipe = synthesize(&mut rng, &req, &SynthesisOptions::default());
            assert_eq!(recipe.servings, expected);
        }
    }

    #[test]
    fn empty_pantry_falls_back() {
        let req = request(&[]);
        let mut rng = StdRng::seed_from_u64(1);
        let recipe = synthesize(&mut rng, &req, &SynthesisOptions::default());
        assert!(recipe.steps[0].contains(FALLBACK_MAIN));
        assert!(recipe.title.contains("Seasonal Vegetables"));
        assert!(recipe.calories_per_serving.unwrap() >= CALORIE_FLOOR);
        assert_eq!(recipe.ingredients.len(), STAPLE_PICKS);
    }

    #[test]
    fn main_prefers_protein_over_first_entry() {
        let pantry = vec!["rice".to_string(), "scallions".to_string(), "tofu".to_string()];
        assert_eq!(pick_main(&pantry), "tofu");
        let pantry = vec!["rice".to_string(), "scallions".to_string()];
        assert_eq!(pick_main(&pantry), "rice");
        assert_eq!(pick_main(&[]), FALLBACK_MAIN);
    }

    #[test]
    fn dietary_filter_applies_before_main_pick() {
        let mut req = request(&["bacon", "mushrooms", "thyme"]);
        req.dietary = vec![DietaryTag::Vegetarian];
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let recipe = synthesize(&mut rng, &req, &SynthesisOptions::default());
            assert!(recipe.steps[0].contains("mushrooms"));
            assert!(recipe
                .ingredients
                .iter()
                .all(|i| is_allowed(i, &[DietaryTag::Vegetarian])));
        }
    }

    #[test]
    fn same_seed_same_recipe() {
        let mut req = request(&["beef", "peppers", "onion"]);
        req.notes = Some("extra spicy".into());
        let a = synthesize(&mut StdRng::seed_from_u64(99), &req, &SynthesisOptions::default());
        let b = synthesize(&mut StdRng::seed_from_u64(99), &req, &SynthesisOptions::default());
        assert_eq!(a, b);
        assert!(a.description.ends_with("Notes: extra spicy"));
    }

    #[test]
    fn synthesizer_rerolls_produce_new_recipes() {
        let req = request(&["chicken", "lemon"]);
        let mut synth = Synthesizer::new(StdRng::seed_from_u64(3));
        let first = synth.generate(&req);
        let second = synth.generate(&req);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn fusion_probability_bounds() {
        let req = request(&["tofu"]);
        let never = SynthesisOptions { fusion_probability: 0.0 };
        let always = SynthesisOptions { fusion_probability: 1.0 };
        for seed in 0..32 {
            let r = synthesize(&mut StdRng::seed_from_u64(seed), &req, &never);
            assert_eq!(r.cuisine, Cuisine::Mediterranean);
            let r = synthesize(&mut StdRng::seed_from_u64(seed), &req, &always);
            assert_eq!(r.cuisine, Cuisine::Fusion);
        }
    }

    #[test]
    fn fusion_label_does_not_change_flavor_source() {
        let req = request(&["tofu"]);
        let always = SynthesisOptions { fusion_probability: 1.0 };
        let r = synthesize(&mut StdRng::seed_from_u64(5), &req, &always);
        assert!(r.description.contains("Mediterranean"));
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("chicken thighs"), "Chicken Thighs");
        assert_eq!(title_case("stir-fry"), "Stir-fry");
        assert_eq!(title_case(""), "");
    }
}
