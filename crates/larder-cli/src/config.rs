use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use larder_core::recommend::DEFAULT_TOP_N;
use larder_core::synth::DEFAULT_FUSION_PROBABILITY;
use larder_core::{Cuisine, DietaryTag, SynthesisOptions};
use larder_store::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "larder", about = "Turn what's in the pantry into something for dinner")]
pub struct Cli {
    /// Directory for favorites and exports (overrides LARDER_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep favorites in memory only for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Environment first, then command-line overrides.
    pub fn store_config(&self) -> StoreConfig {
        let mut config = StoreConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if self.ephemeral {
            config.ephemeral = true;
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize a recipe from pantry ingredients
    Generate(GenerateArgs),
    /// Show which ingredients survive the given dietary tags
    Filter(FilterArgs),
    /// List or search the built-in demo recipes
    Catalog(CatalogArgs),
    /// Print one recipe from favorites or the catalog
    Show(ShowArgs),
    /// Rank catalog recipes by how well they match the pantry
    Recommend(RecommendArgs),
    /// Manage saved recipes
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Write a recipe as pretty-printed JSON named after its title
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Pantry ingredients, comma separated or repeated
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    pub pantry: Vec<String>,

    #[arg(short, long, value_parser = Cuisine::from_str, default_value = "mediterranean")]
    pub cuisine: Cuisine,

    /// Clamped to 1..=12
    #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
    pub servings: i64,

    /// Dietary tags, e.g. vegan,gluten-free
    #[arg(short, long, value_delimiter = ',', value_parser = DietaryTag::from_str)]
    pub diet: Vec<DietaryTag>,

    /// Free-text notes appended to the description
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Seed the generator for a reproducible recipe
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of variations to roll
    #[arg(long, default_value = "1")]
    pub count: usize,

    /// Chance of labelling the result as Fusion
    #[arg(
        long,
        env = "LARDER_FUSION_PROBABILITY",
        default_value_t = DEFAULT_FUSION_PROBABILITY,
        value_parser = parse_probability
    )]
    pub fusion_probability: f64,

    /// Add the generated recipes to favorites
    #[arg(long)]
    pub save: bool,

    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn options(&self) -> SynthesisOptions {
        SynthesisOptions {
            fusion_probability: self.fusion_probability,
        }
    }
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Ingredients to check
    pub ingredients: Vec<String>,

    #[arg(short, long, value_delimiter = ',', value_parser = DietaryTag::from_str)]
    pub diet: Vec<DietaryTag>,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Case-insensitive substring to match
    pub query: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub pantry: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// JSON array of raw recipe records to rank instead of the demo catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List saved recipes, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Save a catalog recipe by id
    Add { id: String },
    /// Remove a saved recipe by id
    Remove { id: String },
    /// Remove every saved recipe
    Clear,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub id: String,

    /// Write into this directory instead of the data directory's exports/
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not between 0 and 1"))
    }
}
