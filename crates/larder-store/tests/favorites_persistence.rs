//! Favorites survive a reload through the filesystem store.

use std::sync::Arc;

use bytes::Bytes;
use larder_core::{synthesize, Cuisine, DietaryTag, RecipeRequest, SynthesisOptions};
use larder_store::{FavoritesRepo, LocalStore, ObjectStore, FAVORITES_KEY};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn repo_at(dir: &std::path::Path) -> FavoritesRepo {
    FavoritesRepo::new(Arc::new(LocalStore::at(dir)))
}

#[tokio::test]
async fn add_then_reload_from_fresh_repo() {
    let tmp = tempfile::tempdir().unwrap();

    let mut request = RecipeRequest::new(
        vec!["chicken".into(), "garlic".into(), "lemon".into()],
        Cuisine::Mediterranean,
    );
    request.dietary = vec![DietaryTag::DairyFree];
    let recipe = synthesize(
        &mut StdRng::seed_from_u64(42),
        &request,
        &SynthesisOptions::default(),
    );

    repo_at(tmp.path()).add(recipe.clone()).await;

    // A new repo over the same directory stands in for a restart.
    let reloaded = repo_at(tmp.path()).load().await;
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(&recipe.id), Some(&recipe));

    assert!(repo_at(tmp.path()).remove(&recipe.id).await);
    assert!(repo_at(tmp.path()).load().await.is_empty());
}

#[tokio::test]
async fn clear_persists_empty_list() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = repo_at(tmp.path());
    for seed in 0..3 {
        let request = RecipeRequest::new(vec!["tofu".into()], Cuisine::Thai);
        let recipe = synthesize(
            &mut StdRng::seed_from_u64(seed),
            &request,
            &SynthesisOptions::default(),
        );
        repo.add(recipe).await;
    }
    assert_eq!(repo.load().await.len(), 3);

    repo.clear().await;
    let raw = std::fs::read_to_string(tmp.path().join(FAVORITES_KEY)).unwrap();
    assert_eq!(raw, "[]");
    assert!(repo_at(tmp.path()).load().await.is_empty());
}

#[tokio::test]
async fn hand_edited_blob_in_browser_shape_loads() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalStore::at(tmp.path());
    let blob = r#"[{
        "id": "abc",
        "title": "Sumac Lentil Bowl",
        "description": "",
        "cuisine": "Middle Eastern",
        "servings": 3,
        "timeMinutes": 35,
        "dietary": ["vegan"],
        "ingredients": ["lentils", "sumac"],
        "steps": ["Simmer.", "Serve."]
    }]"#;
    store.put(FAVORITES_KEY, Bytes::from(blob)).await.unwrap();

    let favorites = FavoritesRepo::new(Arc::new(store)).load().await;
    let recipe = favorites.get("abc").unwrap();
    assert_eq!(recipe.cuisine, Cuisine::MiddleEastern);
    assert_eq!(recipe.time_minutes, 35);
    assert!(recipe.tips.is_none());
    assert!(recipe.calories_per_serving.is_none());
}
