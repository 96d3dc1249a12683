use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LarderError;
use crate::recipe::Recipe;

/// Saved recipes, unique by id, most recently added first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front. An existing entry with the same id is replaced
    /// and moves to the front.
    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.retain(|r| r.id != recipe.id);
        self.recipes.insert(0, recipe);
    }

    /// Returns `true` if something was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        self.recipes.len() != before
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn to_json(&self) -> Result<String, LarderError> {
        Ok(serde_json::to_string(&self.recipes)?)
    }

    /// Parse a persisted blob. Duplicate ids keep their first occurrence.
    pub fn try_from_json(raw: &str) -> Result<Self, LarderError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`Favorites::try_from_json`], but anything unreadable is an empty list.
    pub fn from_json(raw: &str) -> Self {
        Self::try_from_json(raw).unwrap_or_default()
    }
}

/// Keeps the given order. Duplicate ids keep their first occurrence.
impl From<Vec<Recipe>> for Favorites {
    fn from(recipes: Vec<Recipe>) -> Self {
        let mut unique: Vec<Recipe> = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            if !unique.iter().any(|r| r.id == recipe.id) {
                unique.push(recipe);
            }
        }
        Self { recipes: unique }
    }
}

impl<'de> Deserialize<'de> for Favorites {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Recipe>::deserialize(deserializer).map(Favorites::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Cuisine;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            title: format!("Recipe {id}"),
            description: String::new(),
            cuisine: Cuisine::Korean,
            servings: 4,
            time_minutes: 25,
            dietary: vec![],
            ingredients: vec!["tofu".into()],
            steps: vec!["Cook.".into()],
            tips: None,
            calories_per_serving: None,
        }
    }

    #[test]
    fn add_puts_newest_first_and_dedupes() {
        let mut favs = Favorites::new();
        favs.add(recipe("a"));
        favs.add(recipe("b"));
        favs.add(recipe("a"));
        let ids: Vec<&str> = favs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn roundtrip_through_json() {
        let mut favs = Favorites::new();
        favs.add(recipe("x"));
        let json = favs.to_json().unwrap();
        let reloaded = Favorites::from_json(&json);
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains("x"));
        assert_eq!(reloaded, favs);
    }

    #[test]
    fn remove_and_clear() {
        let mut favs = Favorites::from(vec![recipe("a"), recipe("b")]);
        assert!(favs.remove("a"));
        assert!(!favs.remove("a"));
        assert!(!favs.contains("a"));
        assert!(favs.contains("b"));
        favs.clear();
        assert!(favs.is_empty());
        assert_eq!(favs.to_json().unwrap(), "[]");
    }

    #[test]
    fn from_vec_keeps_given_order() {
        let favs = Favorites::from(vec![recipe("a"), recipe("b"), recipe("c")]);
        let ids: Vec<&str> = favs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn corrupt_blob_is_empty() {
        assert!(Favorites::from_json("").is_empty());
        assert!(Favorites::from_json("{not json").is_empty());
        assert!(Favorites::from_json("{\"id\": 1}").is_empty());
        assert!(Favorites::try_from_json("[{]").is_err());
    }

    #[test]
    fn duplicate_ids_in_blob_collapse() {
        let mut second = recipe("a");
        second.title = "Second copy".into();
        let json = serde_json::to_string(&vec![recipe("a"), recipe("b"), second]).unwrap();
        assert_eq!(Favorites::from_json(&json).len(), 2);

        let direct: Favorites = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = direct.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(direct.get("a").unwrap().title, "Recipe a");
    }
}
