use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use larder_core::catalog::{demo_catalog, find_demo, search};
use larder_core::ingest::import_records;
use larder_core::share::{export_file_name, to_export_json, to_plain_text};
use larder_core::{filter_ingredients, Recipe, RecipeRequest, Recommender, Synthesizer};
use larder_store::{export_recipe, FavoritesRepo, ObjectStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{
    CatalogArgs, ExportArgs, FavoritesCommand, FilterArgs, GenerateArgs, RecommendArgs, ShowArgs,
};

pub struct App {
    pub store: Arc<dyn ObjectStore>,
    pub favorites: FavoritesRepo,
}

impl App {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        let favorites = FavoritesRepo::new(store.clone());
        Self { store, favorites }
    }

    /// Favorites first, then the demo catalog.
    async fn find_recipe(&self, id: &str) -> Option<Recipe> {
        if let Some(recipe) = self.favorites.load().await.get(id) {
            return Some(recipe.clone());
        }
        find_demo(id).ok()
    }
}

fn print_recipe(recipe: &Recipe, json: bool) -> Result<()> {
    if json {
        println!("{}", to_export_json(recipe)?);
    } else {
        println!("{}", to_plain_text(recipe));
    }
    Ok(())
}

fn print_summary(recipe: &Recipe) {
    let tags: Vec<&str> = recipe.dietary.iter().map(|t| t.as_str()).collect();
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };
    println!(
        "{:<28} {} ({}, {} min){tags}",
        recipe.id, recipe.title, recipe.cuisine, recipe.time_minutes
    );
}

pub async fn generate(app: &App, args: GenerateArgs) -> Result<()> {
    let options = args.options();
    let request = RecipeRequest {
        pantry: args.pantry,
        cuisine: args.cuisine,
        servings: args.servings,
        dietary: args.diet,
        notes: args.notes,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut synth = Synthesizer::with_options(rng, options);

    let mut recipes = Vec::with_capacity(args.count);
    for _ in 0..args.count.max(1) {
        let recipe = synth.generate(&request);
        debug!("generated {} ({})", recipe.id, recipe.title);
        recipes.push(recipe);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        for (i, recipe) in recipes.iter().enumerate() {
            if i > 0 {
                println!("---\n");
            }
            println!("id: {}", recipe.id);
            println!("{}", to_plain_text(recipe));
        }
    }

    if args.save {
        let mut saved = 0;
        for recipe in recipes {
            app.favorites.add(recipe).await;
            saved += 1;
        }
        info!("saved {saved} recipe(s) to favorites");
    }
    Ok(())
}

pub fn filter(args: FilterArgs) -> Result<()> {
    for ingredient in filter_ingredients(&args.ingredients, &args.diet) {
        println!("{ingredient}");
    }
    Ok(())
}

pub fn catalog(args: CatalogArgs) -> Result<()> {
    let catalog = demo_catalog();
    let hits = search(&catalog, args.query.as_deref().unwrap_or_default());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        for recipe in hits {
            print_summary(recipe);
        }
    }
    Ok(())
}

pub async fn show(app: &App, args: ShowArgs) -> Result<()> {
    match app.find_recipe(&args.id).await {
        Some(recipe) => print_recipe(&recipe, args.json),
        None => bail!("no recipe with id '{}'", args.id),
    }
}

pub async fn recommend(args: RecommendArgs) -> Result<()> {
    let recipes = match &args.catalog {
        Some(path) => load_catalog_file(path).await?,
        None => demo_catalog(),
    };
    let recommender = Recommender::fit(&recipes);
    let ranked = recommender.recommend(&args.pantry, args.top);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        for rec in ranked {
            println!("{:.2}  {:<28} {}", rec.score, rec.recipe_id, rec.title);
        }
    }
    Ok(())
}

async fn load_catalog_file(path: &Path) -> Result<Vec<Recipe>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read catalog {}", path.display()))?;
    let recipes =
        import_records(&raw).with_context(|| format!("parse catalog {}", path.display()))?;
    info!("imported {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

pub async fn favorites(app: &App, command: FavoritesCommand) -> Result<()> {
    match command {
        FavoritesCommand::List { json } => {
            let favorites = app.favorites.load().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&favorites)?);
            } else if favorites.is_empty() {
                println!("no favorites yet");
            } else {
                for recipe in favorites.iter() {
                    print_summary(recipe);
                }
            }
        }
        FavoritesCommand::Add { id } => {
            let recipe = find_demo(&id)?;
            app.favorites.add(recipe).await;
            println!("saved {id}");
        }
        FavoritesCommand::Remove { id } => {
            if app.favorites.remove(&id).await {
                println!("removed {id}");
            } else {
                println!("{id} was not saved");
            }
        }
        FavoritesCommand::Clear => {
            app.favorites.clear().await;
            println!("favorites cleared");
        }
    }
    Ok(())
}

pub async fn export(app: &App, args: ExportArgs) -> Result<()> {
    let Some(recipe) = app.find_recipe(&args.id).await else {
        bail!("no recipe with id '{}'", args.id);
    };
    match &args.out {
        Some(dir) => {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create {}", dir.display()))?;
            let path = dir.join(export_file_name(&recipe));
            tokio::fs::write(&path, to_export_json(&recipe)?)
                .await
                .with_context(|| format!("write {}", path.display()))?;
            println!("{}", path.display());
        }
        None => {
            let key = export_recipe(app.store.as_ref(), &recipe).await?;
            println!("{key}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use larder_core::LarderError;
    use larder_store::{LocalStore, MemoryStore};

    use super::*;

    fn memory_app() -> App {
        App::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn find_recipe_checks_favorites_then_catalog() {
        let app = memory_app();
        assert!(app.find_recipe("demo-miso-salmon").await.is_some());
        assert!(app.find_recipe("nope").await.is_none());

        let mut mine = demo_catalog().remove(0);
        mine.id = "mine".into();
        app.favorites.add(mine).await;
        assert!(app.find_recipe("mine").await.is_some());
    }

    #[tokio::test]
    async fn generate_saves_requested_variations() {
        let app = memory_app();
        let cli = crate::config::Cli::try_parse_from([
            "larder", "generate", "--pantry", "tofu,kale", "--diet", "vegan", "--seed", "3",
            "--count", "3", "--save",
        ])
        .unwrap();
        let crate::config::Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        generate(&app, args).await.unwrap();

        let saved = app.favorites.load().await;
        assert_eq!(saved.len(), 3);
        assert!(saved.iter().all(|r| r.dietary == vec![larder_core::DietaryTag::Vegan]));
    }

    #[tokio::test]
    async fn export_to_directory_uses_slug() {
        let tmp = tempfile::tempdir().unwrap();
        let app = App::new(Arc::new(LocalStore::at(tmp.path().join("data"))));
        export(
            &app,
            ExportArgs {
                id: "demo-chickpea-curry".into(),
                out: Some(tmp.path().join("out")),
            },
        )
        .await
        .unwrap();
        let written = tmp
            .path()
            .join("out/weeknight-chickpea-coconut-curry.json");
        let json = std::fs::read_to_string(written).unwrap();
        assert!(json.contains("\"timeMinutes\": 30"));
    }

    #[tokio::test]
    async fn export_unknown_id_fails() {
        let app = memory_app();
        let err = export(
            &app,
            ExportArgs {
                id: "missing".into(),
                out: None,
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn favorites_add_rejects_unknown_catalog_id() {
        let app = memory_app();
        let err = favorites(&app, FavoritesCommand::Add { id: "x".into() })
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LarderError>(),
            Some(LarderError::NotFound(_))
        ));
        favorites(
            &app,
            FavoritesCommand::Add {
                id: "demo-gochujang-tofu".into(),
            },
        )
        .await
        .unwrap();
        assert!(app.favorites.load().await.contains("demo-gochujang-tofu"));
    }
}
