use crate::error::LarderError;
use crate::recipe::Recipe;

/// Lowercase ASCII alphanumerics joined by single hyphens.
///
/// Any run of other characters becomes one hyphen; leading and trailing
/// hyphens are dropped, so punctuation-only input yields an empty string.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// File name for a downloaded recipe: `<slug>.json`, or `recipe.json` when
/// the title has no usable characters.
pub fn export_file_name(recipe: &Recipe) -> String {
    let slug = slugify(&recipe.title);
    if slug.is_empty() {
        "recipe.json".to_string()
    } else {
        format!("{slug}.json")
    }
}

pub fn to_export_json(recipe: &Recipe) -> Result<String, LarderError> {
    Ok(serde_json::to_string_pretty(recipe)?)
}

/// Plain-text rendering handed to clipboard, share and print targets.
pub fn to_plain_text(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&recipe.title);
    out.push('\n');
    if !recipe.description.is_empty() {
        out.push_str(&recipe.description);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&format!("Cuisine: {}\n", recipe.cuisine));
    out.push_str(&format!("Servings: {}\n", recipe.servings));
    out.push_str(&format!("Time: {} min\n", recipe.time_minutes));
    if !recipe.dietary.is_empty() {
        let tags: Vec<&str> = recipe.dietary.iter().map(|t| t.display_name()).collect();
        out.push_str(&format!("Dietary: {}\n", tags.join(", ")));
    }
    if let Some(kcal) = recipe.calories_per_serving {
        out.push_str(&format!("Calories: ~{kcal} kcal per serving\n"));
    }

    out.push_str("\nIngredients:\n");
    for ing in &recipe.ingredients {
        out.push_str(&format!("- {ing}\n"));
    }

    out.push_str("\nSteps:\n");
    for (i, step) in recipe.steps.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }

    if let Some(tips) = recipe.tips.as_ref().filter(|t| !t.is_empty()) {
        out.push_str("\nTips:\n");
        for tip in tips {
            out.push_str(&format!("- {tip}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Cuisine, DietaryTag};

    fn sample() -> Recipe {
        Recipe {
            id: "r-1".into(),
            title: "Lemon-Oregano Chicken Bowl".into(),
            description: "Bright and quick.".into(),
            cuisine: Cuisine::Mediterranean,
            servings: 2,
            time_minutes: 30,
            dietary: vec![DietaryTag::DairyFree, DietaryTag::GlutenFree],
            ingredients: vec!["chicken".into(), "lemon".into()],
            steps: vec!["Cook.".into(), "Serve.".into()],
            tips: Some(vec!["Rest the meat.".into()]),
            calories_per_serving: Some(410),
        }
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Lemon-Oregano Chicken Bowl"), "lemon-oregano-chicken-bowl");
        assert_eq!(slugify("  Za'atar   Tofu & Greens!! "), "za-atar-tofu-greens");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("Crème Brûlée 2"), "cr-me-br-l-e-2");
    }

    #[test]
    fn slugify_is_idempotent_and_well_formed() {
        let inputs = [
            "",
            "!!!",
            "Hello, World",
            "--a--b--",
            "Weeknight Harissa Lamb & Greens Stew",
            "日本語 ramen",
            "a",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert_eq!(slugify(&slug), slug);
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
            assert!(!slug.contains("--"));
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn export_file_name_falls_back() {
        let mut recipe = sample();
        assert_eq!(export_file_name(&recipe), "lemon-oregano-chicken-bowl.json");
        recipe.title = "???".into();
        assert_eq!(export_file_name(&recipe), "recipe.json");
    }

    #[test]
    fn export_json_is_pretty() {
        let json = to_export_json(&sample()).unwrap();
        assert!(json.contains("\n  \"title\": \"Lemon-Oregano Chicken Bowl\""));
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn plain_text_layout() {
        let text = to_plain_text(&sample());
        assert!(text.starts_with("Lemon-Oregano Chicken Bowl\nBright and quick.\n"));
        assert!(text.contains("Servings: 2\n"));
        assert!(text.contains("Time: 30 min\n"));
        assert!(text.contains("Dietary: Dairy-free, Gluten-free\n"));
        assert!(text.contains("Ingredients:\n- chicken\n- lemon\n"));
        assert!(text.contains("Steps:\n1. Cook.\n2. Serve.\n"));
        assert!(text.contains("Tips:\n- Rest the meat.\n"));
    }

    #[test]
    fn plain_text_omits_empty_sections() {
        let mut recipe = sample();
        recipe.tips = None;
        recipe.dietary.clear();
        recipe.calories_per_serving = None;
        let text = to_plain_text(&recipe);
        assert!(!text.contains("Tips:"));
        assert!(!text.contains("Dietary:"));
        assert!(!text.contains("Calories:"));
    }
}
