/// Starting per-serving estimate before any ingredient adjustments.
pub const BASE_CALORIES: i64 = 320;
/// No estimate ever goes below this.
pub const CALORIE_FLOOR: u32 = 120;

const DENSE_INCREMENT: i64 = 85;
const LEAN_DECREMENT: i64 = 30;

const DENSE: &[&str] = &[
    "cheese", "butter", "cream", "oil", "bacon", "sausage", "pork", "beef", "lamb", "pasta",
    "rice", "noodle", "bread", "sugar", "avocado", "coconut", "nut", "almond", "peanut", "chorizo",
];

const LEAN: &[&str] = &[
    "spinach", "lettuce", "kale", "broccoli", "zucchini", "cucumber", "tomato", "celery",
    "cabbage", "mushroom", "lemon", "lime", "herb", "tofu", "chicken breast", "cauliflower",
];

/// Heuristic per-serving calorie estimate for a list of ingredients.
///
/// Each ingredient adds one increment if it names anything calorie-dense and
/// takes off one decrement if it names anything lean; both can apply.
pub fn estimate_calories<S: AsRef<str>>(ingredients: &[S]) -> u32 {
    let mut total = BASE_CALORIES;
    for ing in ingredients {
        let lowered = ing.as_ref().to_lowercase();
        if DENSE.iter().any(|kw| lowered.contains(kw)) {
            total += DENSE_INCREMENT;
        }
        if LEAN.iter().any(|kw| lowered.contains(kw)) {
            total -= LEAN_DECREMENT;
        }
    }
    total.max(CALORIE_FLOOR as i64) as u32
}
