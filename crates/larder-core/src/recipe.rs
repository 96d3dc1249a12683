use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LarderError;

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    Italian,
    Mexican,
    Indian,
    Chinese,
    Japanese,
    Thai,
    French,
    Mediterranean,
    American,
    Korean,
    #[serde(rename = "Middle Eastern")]
    MiddleEastern,
    Fusion,
}

impl Cuisine {
    /// The cuisines a user can request. `Fusion` is only ever a label.
    pub const NAMED: &[Cuisine] = &[
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Indian,
        Cuisine::Chinese,
        Cuisine::Japanese,
        Cuisine::Thai,
        Cuisine::French,
        Cuisine::Mediterranean,
        Cuisine::American,
        Cuisine::Korean,
        Cuisine::MiddleEastern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Italian => "italian",
            Cuisine::Mexican => "mexican",
            Cuisine::Indian => "indian",
            Cuisine::Chinese => "chinese",
            Cuisine::Japanese => "japanese",
            Cuisine::Thai => "thai",
            Cuisine::French => "french",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::American => "american",
            Cuisine::Korean => "korean",
            Cuisine::MiddleEastern => "middle_eastern",
            Cuisine::Fusion => "fusion",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Japanese => "Japanese",
            Cuisine::Thai => "Thai",
            Cuisine::French => "French",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::American => "American",
            Cuisine::Korean => "Korean",
            Cuisine::MiddleEastern => "Middle Eastern",
            Cuisine::Fusion => "Fusion",
        }
    }

    /// Accepts `middle_eastern`, `middle-eastern` or `Middle Eastern`.
    pub fn parse_str(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "italian" => Some(Cuisine::Italian),
            "mexican" => Some(Cuisine::Mexican),
            "indian" => Some(Cuisine::Indian),
            "chinese" => Some(Cuisine::Chinese),
            "japanese" => Some(Cuisine::Japanese),
            "thai" => Some(Cuisine::Thai),
            "french" => Some(Cuisine::French),
            "mediterranean" => Some(Cuisine::Mediterranean),
            "american" => Some(Cuisine::American),
            "korean" => Some(Cuisine::Korean),
            "middle_eastern" => Some(Cuisine::MiddleEastern),
            "fusion" => Some(Cuisine::Fusion),
            _ => None,
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Cuisine {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::parse_str(s).ok_or_else(|| {
            let known: Vec<&str> = Cuisine::NAMED.iter().map(|c| c.as_str()).collect();
            LarderError::InvalidInput(format!(
                "unknown cuisine '{s}' (expected one of: {})",
                known.join(", ")
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    Pescatarian,
    GlutenFree,
    DairyFree,
    NutFree,
    LowCarb,
}

impl DietaryTag {
    pub const ALL: &[DietaryTag] = &[
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::Pescatarian,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
        DietaryTag::NutFree,
        DietaryTag::LowCarb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::Pescatarian => "pescatarian",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
            DietaryTag::NutFree => "nut-free",
            DietaryTag::LowCarb => "low-carb",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::Vegan => "Vegan",
            DietaryTag::Pescatarian => "Pescatarian",
            DietaryTag::GlutenFree => "Gluten-free",
            DietaryTag::DairyFree => "Dairy-free",
            DietaryTag::NutFree => "Nut-free",
            DietaryTag::LowCarb => "Low-carb",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "vegetarian" => Some(DietaryTag::Vegetarian),
            "vegan" => Some(DietaryTag::Vegan),
            "pescatarian" => Some(DietaryTag::Pescatarian),
            "gluten-free" => Some(DietaryTag::GlutenFree),
            "dairy-free" => Some(DietaryTag::DairyFree),
            "nut-free" => Some(DietaryTag::NutFree),
            "low-carb" => Some(DietaryTag::LowCarb),
            _ => None,
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryTag {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryTag::parse_str(s).ok_or_else(|| {
            let known: Vec<&str> = DietaryTag::ALL.iter().map(|t| t.as_str()).collect();
            LarderError::InvalidInput(format!(
                "unknown dietary tag '{s}' (expected one of: {})",
                known.join(", ")
            ))
        })
    }
}

/// A finished recipe. Never mutated once built; a re-roll produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cuisine: Cuisine,
    pub servings: u32,
    pub time_minutes: u32,
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_serving: Option<u32>,
}

/// Inputs collected for one synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub pantry: Vec<String>,
    pub cuisine: Cuisine,
    pub servings: i64,
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RecipeRequest {
    pub fn new(pantry: Vec<String>, cuisine: Cuisine) -> Self {
        Self {
            pantry,
            cuisine,
            servings: 2,
            dietary: Vec::new(),
            notes: None,
        }
    }

    /// Dietary tags with duplicates removed, first occurrence wins.
    pub fn unique_dietary(&self) -> Vec<DietaryTag> {
        let mut tags = Vec::with_capacity(self.dietary.len());
        for tag in &self.dietary {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
        tags
    }
}

pub fn clamp_servings(requested: i64) -> u32 {
    requested.clamp(MIN_SERVINGS as i64, MAX_SERVINGS as i64) as u32
}
