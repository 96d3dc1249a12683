//! Cleanup for recipe dumps scraped from the web, where list-valued columns
//! arrive as R vectors (`c("a", "b")`), JSON arrays or bare strings.

use serde::Deserialize;
use serde_json::Value;

use crate::calories::{estimate_calories, CALORIE_FLOOR};
use crate::error::LarderError;
use crate::recipe::{clamp_servings, Cuisine, DietaryTag, Recipe};
use crate::share::slugify;

const DEFAULT_TIME_MINUTES: u32 = 30;
const DEFAULT_SERVINGS: i64 = 4;

/// Split a list-valued field into its items.
///
/// Blank input is an empty list; anything that is not a recognizable list
/// comes back as a single item.
pub fn parse_list_field(raw: &str) -> Vec<String> {
    let s = raw.trim();
    if s.is_empty() {
        return Vec::new();
    }

    if let Some(inner) = s.strip_prefix("c(").and_then(|rest| rest.strip_suffix(')')) {
        return quoted_items(inner);
    }

    if s.starts_with('[') && s.ends_with(']') {
        if let Ok(items) = serde_json::from_str::<Vec<Value>>(s) {
            return items.iter().map(value_to_string).collect();
        }
        // Python-style lists use single quotes, which JSON rejects.
        let items = quoted_items(&s[1..s.len() - 1]);
        if !items.is_empty() {
            return items;
        }
    }

    vec![s.to_string()]
}

/// Non-empty strings between matching single or double quotes.
fn quoted_items(content: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '"' && c != '\'' {
            continue;
        }
        let item: String = chars.by_ref().take_while(|&next| next != c).collect();
        if !item.is_empty() {
            items.push(item);
        }
    }
    items
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_to_list(v: &Value) -> Vec<String> {
    match v {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        Value::String(s) => parse_list_field(s),
        other => vec![other.to_string()],
    }
}

fn value_to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn clean_ingredient(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Break raw instructions into steps. A single blob is split on newlines,
/// or on sentence periods when it has no line breaks.
pub fn split_instructions(raw: &str) -> Vec<String> {
    let mut steps = parse_list_field(raw);
    if steps.len() == 1 && (steps[0].contains('\n') || steps[0].contains('.')) {
        let blob = steps.remove(0);
        let mut chunks: Vec<String> = blob
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        if chunks.len() < 2 {
            chunks = blob
                .split('.')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }
        steps = chunks;
    }
    steps
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Numbered, newline-separated steps: `"1. ...\n2. ..."`.
pub fn normalize_instructions(raw: &str) -> String {
    split_instructions(raw)
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {s}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Minutes in an ISO-8601 duration such as `PT1H20M`. Seconds are dropped.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let rest = raw.trim().strip_prefix("PT")?;
    let mut minutes: u32 = 0;
    let mut digits = String::new();
    let mut saw_unit = false;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let n: u32 = digits.parse().ok()?;
        digits.clear();
        match c {
            'H' => minutes = minutes.checked_add(n.checked_mul(60)?)?,
            'M' => minutes = minutes.checked_add(n)?,
            'S' => {}
            _ => return None,
        }
        saw_unit = true;
    }
    (saw_unit && digits.is_empty()).then_some(minutes)
}

/// One row of an external recipe dump. Column names from the common
/// scraped-dataset layout are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "RecipeId")]
    pub id: Option<Value>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "RecipeIngredientParts")]
    pub ingredients: Value,
    #[serde(default, alias = "RecipeInstructions")]
    pub instructions: Value,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default, alias = "RecipeCuisine")]
    pub cuisine: Option<String>,
    #[serde(default, alias = "TotalTime")]
    pub total_time: Option<String>,
    #[serde(default, alias = "RecipeServings")]
    pub servings: Value,
    #[serde(default, alias = "Calories")]
    pub calories: Value,
    #[serde(default, alias = "Keywords")]
    pub keywords: Value,
}

impl RawRecord {
    pub fn cleaned_ingredients(&self) -> Vec<String> {
        value_to_list(&self.ingredients)
            .iter()
            .map(|i| clean_ingredient(i))
            .filter(|i| !i.is_empty())
            .collect()
    }

    pub fn steps(&self) -> Vec<String> {
        match &self.instructions {
            Value::String(s) => split_instructions(s),
            other => value_to_list(other)
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn into_recipe(self) -> Recipe {
        let title = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Untitled recipe")
            .to_string();
        let id = match &self.id {
            Some(Value::Null) | None => format!("import-{}", slugify(&title)),
            Some(v) => value_to_string(v),
        };

        let ingredients = {
            let mut unique: Vec<String> = Vec::new();
            for ing in self.cleaned_ingredients() {
                if !unique.contains(&ing) {
                    unique.push(ing);
                }
            }
            unique
        };

        let mut dietary: Vec<DietaryTag> = Vec::new();
        for tag in value_to_list(&self.keywords)
            .iter()
            .filter_map(|k| DietaryTag::parse_str(k))
        {
            if !dietary.contains(&tag) {
                dietary.push(tag);
            }
        }

        let calories = value_to_f64(&self.calories)
            .filter(|c| c.is_finite() && *c >= 0.0)
            .map(|c| (c.round() as u32).max(CALORIE_FLOOR))
            .unwrap_or_else(|| estimate_calories(&ingredients));

        let servings = value_to_f64(&self.servings)
            .filter(|s| s.is_finite())
            .map(|s| s.round() as i64)
            .unwrap_or(DEFAULT_SERVINGS);

        Recipe {
            steps: self.steps(),
            id,
            title,
            description: self.description.unwrap_or_default().trim().to_string(),
            cuisine: self
                .cuisine
                .as_deref()
                .and_then(Cuisine::parse_str)
                .unwrap_or(Cuisine::Fusion),
            servings: clamp_servings(servings),
            time_minutes: self
                .total_time
                .as_deref()
                .and_then(parse_duration_minutes)
                .unwrap_or(DEFAULT_TIME_MINUTES),
            dietary,
            ingredients,
            tips: None,
            calories_per_serving: Some(calories),
        }
    }
}

/// Parse a JSON array of raw records into catalog recipes.
pub fn import_records(json: &str) -> Result<Vec<Recipe>, LarderError> {
    let records: Vec<RawRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(RawRecord::into_recipe).collect())
}
