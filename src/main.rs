use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use lulc_map::choropleth::style_collection;
use lulc_map::config::{self, ModeName};
use lulc_map::data;
use lulc_map::export::{self, OutputFormat};
use lulc_map::loader::load_district;
use lulc_map::server;
use lulc_map::upstream::UpstreamClient;
use lulc_map::style::{DisplayMode, StyleContext, StyleResolver};
use lulc_map::types::CategoryCode;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw LULC statistics response into a per-area table
    Normalize {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write district boundaries as a styled choropleth GeoJSON
    Style {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        thematic: Option<PathBuf>,
        #[arg(short, long, value_name = "FILE")]
        boundaries: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        mode: Option<CliMode>,
        /// Category shaded in by-category mode, e.g. l09
        #[arg(long)]
        category: Option<CategoryCode>,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Fetch a catalog district's polygon and statistics and write it styled
    District {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
        /// District code, e.g. 1028 for Patna
        code: String,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Serve the LULC API
    Serve {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliMode {
    Dominant,
    ByCategory,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input, format, output } => {
            let table = data::load_thematic(&input)?;

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create output file: {:?}", path))?;
                    export::write_table(&table, format, BufWriter::new(file))?;
                    info!("Wrote {} areas to {:?}", table.len(), path);
                }
                None => {
                    let stdout = io::stdout();
                    export::write_table(&table, format, stdout.lock())?;
                }
            }
        }
        Commands::Style { config, thematic, boundaries, mode, category, output } => {
            let app_config = config::AppConfig::load_or_default(&config)?;
            let categories = app_config.category_table()?;

            let thematic_path = thematic
                .or_else(|| app_config.input.thematic.clone())
                .ok_or_else(|| anyhow!("No thematic file given (--thematic or [input].thematic)"))?;
            let boundaries_path = boundaries
                .or_else(|| app_config.input.boundaries.clone())
                .ok_or_else(|| anyhow!("No boundaries file given (--boundaries or [input].boundaries)"))?;

            let table = data::load_thematic(&thematic_path)?;
            let collection = data::load_boundaries(&boundaries_path)?;

            let mut style_config = app_config.style.clone();
            if let Some(mode) = mode {
                style_config.mode = match mode {
                    CliMode::Dominant => ModeName::Dominant,
                    CliMode::ByCategory => ModeName::ByCategory,
                };
            }
            if let Some(category) = category {
                style_config.category = category;
            }
            let display_mode: DisplayMode = style_config.display_mode();
            let visible = style_config.visible_layers();

            let resolver = StyleResolver::new(&categories);
            let ctx = StyleContext {
                table: Some(&table),
                visible: Some(&visible),
                selected_area: app_config.input.district.as_deref(),
                mode: display_mode,
            };
            let styled = style_collection(&collection, &resolver, &ctx);

            let file = File::create(&output)
                .with_context(|| format!("Failed to create output file: {:?}", output))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, &styled).context("Failed to write styled GeoJSON")?;
            writer.flush()?;
            info!("Wrote {} styled features to {:?}", styled.features.len(), output);
        }
        Commands::District { config, code, output } => {
            let app_config = config::AppConfig::load_or_default(&config)?;
            let categories = app_config.category_table()?;
            let client = UpstreamClient::new(app_config.upstream.clone())?;

            let loaded = load_district(&client, &code, app_config.input.boundary_dir.as_deref()).await?;
            let visible = app_config.style.visible_layers();
            let resolver = StyleResolver::new(&categories);
            let styled = loaded.style(&resolver, app_config.style.display_mode(), Some(&visible));

            let file = File::create(&output)
                .with_context(|| format!("Failed to create output file: {:?}", output))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, &styled).context("Failed to write styled GeoJSON")?;
            writer.flush()?;
            info!(
                "Wrote {} ({}) with {} areas of LULC data to {:?}",
                loaded.district.name,
                loaded.district.code,
                loaded.thematic.len(),
                output
            );
        }
        Commands::Serve { config } => {
            info!("Serving LULC API with config: {:?}", config);
            let app_config = config::AppConfig::load_from_file(&config)?;
            let categories = app_config.category_table()?;

            // Preloaded data backs /api/query and /api/legend
            let thematic = app_config
                .input
                .thematic
                .as_deref()
                .map(data::load_thematic)
                .transpose()?;
            let boundaries = app_config
                .input
                .boundaries
                .as_deref()
                .map(data::load_boundaries)
                .transpose()?;

            server::start_server(app_config, categories, thematic, boundaries).await?;
        }
    }

    Ok(())
}
