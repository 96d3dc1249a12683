use crate::error::LarderError;
use crate::recipe::{Cuisine, DietaryTag, Recipe};

struct DemoRecipe {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    cuisine: Cuisine,
    servings: u32,
    time_minutes: u32,
    dietary: &'static [DietaryTag],
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    tips: &'static [&'static str],
    calories: u32,
}

impl DemoRecipe {
    fn to_recipe(&self) -> Recipe {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            cuisine: self.cuisine,
            servings: self.servings,
            time_minutes: self.time_minutes,
            dietary: self.dietary.to_vec(),
            ingredients: owned(self.ingredients),
            steps: owned(self.steps),
            tips: (!self.tips.is_empty()).then(|| owned(self.tips)),
            calories_per_serving: Some(self.calories),
        }
    }
}

const DEMOS: &[DemoRecipe] = &[
    DemoRecipe {
        id: "demo-lemon-herb-chicken",
        title: "Lemon-Herb Chicken Traybake",
        description: "Juicy chicken thighs roasted with potatoes, lemon and oregano.",
        cuisine: Cuisine::Mediterranean,
        servings: 4,
        time_minutes: 50,
        dietary: &[DietaryTag::GlutenFree, DietaryTag::DairyFree],
        ingredients: &[
            "chicken thighs",
            "baby potatoes",
            "lemon",
            "garlic",
            "dried oregano",
            "olive oil",
        ],
        steps: &[
            "Heat the oven to 220C.",
            "Toss potatoes with oil, salt and oregano and roast for 15 minutes.",
            "Add the chicken, garlic and lemon wedges and roast 30 minutes more.",
            "Rest for five minutes and serve with the pan juices.",
        ],
        tips: &["Use bone-in thighs for the juiciest result."],
        calories: 520,
    },
    DemoRecipe {
        id: "demo-chickpea-curry",
        title: "Weeknight Chickpea Coconut Curry",
        description: "A creamy, mildly spiced curry built on pantry staples.",
        cuisine: Cuisine::Indian,
        servings: 4,
        time_minutes: 30,
        dietary: &[DietaryTag::Vegan, DietaryTag::GlutenFree],
        ingredients: &[
            "chickpeas",
            "coconut milk",
            "chopped tomatoes",
            "onion",
            "ginger",
            "garam masala",
            "spinach",
        ],
        steps: &[
            "Soften the onion and ginger in a little oil.",
            "Stir in garam masala and cook for a minute.",
            "Add tomatoes, chickpeas and coconut milk and simmer 15 minutes.",
            "Wilt in the spinach and season to taste.",
        ],
        tips: &["Finish with lime juice to lift the sauce."],
        calories: 430,
    },
    DemoRecipe {
        id: "demo-miso-salmon",
        title: "Miso-Glazed Salmon Rice Bowl",
        description: "Sweet-savory salmon over rice with quick-pickled cucumber.",
        cuisine: Cuisine::Japanese,
        servings: 2,
        time_minutes: 25,
        dietary: &[DietaryTag::DairyFree, DietaryTag::Pescatarian],
        ingredients: &[
            "salmon fillets",
            "white miso",
            "mirin",
            "short-grain rice",
            "cucumber",
            "rice vinegar",
            "sesame seeds",
        ],
        steps: &[
            "Cook the rice.",
            "Mix miso and mirin and brush over the salmon.",
            "Grill the salmon for 8 to 10 minutes until caramelized.",
            "Toss sliced cucumber with rice vinegar and a pinch of salt.",
            "Serve salmon over rice with cucumber and sesame seeds.",
        ],
        tips: &[],
        calories: 610,
    },
    DemoRecipe {
        id: "demo-black-bean-tacos",
        title: "Smoky Black Bean Tacos",
        description: "Chipotle black beans with crunchy slaw in warm corn tortillas.",
        cuisine: Cuisine::Mexican,
        servings: 3,
        time_minutes: 20,
        dietary: &[DietaryTag::Vegetarian, DietaryTag::NutFree],
        ingredients: &[
            "black beans",
            "chipotle in adobo",
            "corn tortillas",
            "red cabbage",
            "lime",
            "cilantro",
            "sour cream",
        ],
        steps: &[
            "Warm the beans with chopped chipotle and a splash of water.",
            "Shred the cabbage and toss with lime juice and salt.",
            "Char the tortillas in a dry pan.",
            "Fill with beans, slaw, cilantro and a spoon of sour cream.",
        ],
        tips: &[
            "Mash a third of the beans for a creamier filling.",
            "Swap sour cream for avocado to keep it dairy-free.",
        ],
        calories: 390,
    },
    DemoRecipe {
        id: "demo-gochujang-tofu",
        title: "Gochujang Tofu Stir-Fry",
        description: "Crispy tofu tossed in a sticky, spicy Korean glaze.",
        cuisine: Cuisine::Korean,
        servings: 2,
        time_minutes: 30,
        dietary: &[DietaryTag::Vegan],
        ingredients: &[
            "firm tofu",
            "gochujang",
            "soy sauce",
            "maple syrup",
            "broccoli",
            "scallions",
            "sesame oil",
        ],
        steps: &[
            "Press and cube the tofu, then pan-fry until crisp.",
            "Whisk gochujang, soy sauce and maple syrup.",
            "Stir-fry the broccoli until bright green.",
            "Return the tofu, add the glaze and toss until sticky.",
        ],
        tips: &["Cornstarch on the tofu makes it extra crunchy."],
        calories: 360,
    },
    DemoRecipe {
        id: "demo-mushroom-risotto",
        title: "Creamy Mushroom Risotto",
        description: "Slow-stirred arborio with browned mushrooms and parmesan.",
        cuisine: Cuisine::Italian,
        servings: 4,
        time_minutes: 45,
        dietary: &[DietaryTag::Vegetarian, DietaryTag::GlutenFree],
        ingredients: &[
            "arborio rice",
            "mushrooms",
            "vegetable stock",
            "shallot",
            "white wine",
            "parmesan",
            "butter",
        ],
        steps: &[
            "Brown the mushrooms in butter and set aside.",
            "Sweat the shallot, then toast the rice for a minute.",
            "Deglaze with wine and add stock a ladle at a time, stirring.",
            "Fold in mushrooms, parmesan and a knob of butter.",
        ],
        tips: &["Keep the stock at a simmer so the rice cooks evenly."],
        calories: 540,
    },
];

/// The built-in demo recipes, in display order.
pub fn demo_catalog() -> Vec<Recipe> {
    DEMOS.iter().map(DemoRecipe::to_recipe).collect()
}

/// Look up a demo recipe by id.
pub fn find_demo(id: &str) -> Result<Recipe, LarderError> {
    DEMOS
        .iter()
        .find(|d| d.id == id)
        .map(DemoRecipe::to_recipe)
        .ok_or_else(|| LarderError::NotFound(format!("catalog recipe '{id}'")))
}

/// Case-insensitive substring search over title, description, cuisine,
/// dietary tags and ingredients. A blank query matches everything.
pub fn search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.iter().collect();
    }
    recipes.iter().filter(|r| matches(r, &needle)).collect()
}

fn matches(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe.cuisine.display_name().to_lowercase().contains(needle)
        || recipe.dietary.iter().any(|t| t.as_str().contains(needle))
        || recipe
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(needle))
}
