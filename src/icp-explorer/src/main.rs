//! ICP Segment Explorer — terminal host for the segment query engine.
//!
//! Loads the dataset, applies the selection supplied on the command
//! line, and renders the filtered table plus every available summary
//! section. The engine itself lives in the library crates; this binary
//! only plays the presentation role.

use std::path::PathBuf;

use clap::Parser;
use icp_core::{AppConfig, Frame};
use icp_dataset::{export, LoadCache, EXPORT_FILE_NAME};
use icp_reporting::{compute_view, LabelCount, RankedCounts, SegmentView};
use icp_segmentation::{FilterVocabulary, SegmentSelection, SortOrder, SortSpec};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "icp-explorer")]
#[command(about = "SMB ICP segment visualizer for the terminal")]
#[command(version)]
struct Cli {
    /// Dataset path (overrides config)
    #[arg(long, env = "ICP_EXPLORER__DATA__SOURCE_PATH")]
    data: Option<PathBuf>,

    /// Filter by role (repeatable)
    #[arg(long = "role")]
    roles: Vec<String>,

    /// Filter by GPT industry (repeatable)
    #[arg(long = "industry")]
    industries: Vec<String>,

    /// Filter by location (repeatable)
    #[arg(long = "location")]
    locations: Vec<String>,

    /// Filter by state (repeatable)
    #[arg(long = "state")]
    states: Vec<String>,

    /// Filter by city (repeatable)
    #[arg(long = "city")]
    cities: Vec<String>,

    /// Sort column (default: pool_size when present, else first column)
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, default_value_t = false)]
    descending: bool,

    /// Print the filter vocabularies and exit
    #[arg(long, default_value_t = false)]
    vocab: bool,

    /// Write the filtered set as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Skip the table preview, print summaries only
    #[arg(long, default_value_t = false)]
    summary_only: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icp_explorer=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    let path = cli
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.source_path));

    let cache = LoadCache::new();
    let raw = match cache.get_or_load(&path) {
        Ok(frame) => frame,
        Err(e) => {
            // Load failure surfaces a message and halts the pipeline.
            error!(error = %e, "Error loading file");
            return Ok(());
        }
    };
    if raw.is_empty() {
        warn!(path = %path.display(), "dataset has no rows, stopping");
        return Ok(());
    }

    info!(path = %path.display(), "using dataset");
    println!("Loaded {} ICP records.", raw.row_count());

    if cli.vocab {
        print_vocabulary(&FilterVocabulary::extract(&raw));
        return Ok(());
    }

    let selection = SegmentSelection {
        roles: cli.roles,
        industries: cli.industries,
        locations: cli.locations,
        states: cli.states,
        cities: cli.cities,
    };
    let sort_spec = SortSpec {
        column: cli.sort_by,
        order: if cli.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        },
    };

    let view = compute_view(&raw, &selection, &sort_spec, &config.reporting)?;
    render_view(&view, config.display.preview_rows, cli.summary_only);

    if let Some(out) = cli.export {
        let bytes = export::to_csv_bytes(&view.table)?;
        std::fs::write(&out, bytes)?;
        info!(
            path = %out.display(),
            suggested_name = EXPORT_FILE_NAME,
            "filtered data exported"
        );
    }

    Ok(())
}

fn print_vocabulary(vocab: &FilterVocabulary) {
    let dimensions: [(&str, &Vec<String>); 5] = [
        ("Roles", &vocab.roles),
        ("GPT Industries", &vocab.industries),
        ("Locations", &vocab.locations),
        ("States", &vocab.states),
        ("Cities", &vocab.cities),
    ];
    for (name, values) in dimensions {
        println!("\n{name} ({}):", values.len());
        for value in values {
            println!("  {value}");
        }
    }
}

fn render_view(view: &SegmentView, preview_rows: usize, summary_only: bool) {
    println!("\n=== Filtered Data ({} rows) ===", view.row_count);
    if !summary_only {
        render_table(&view.table, preview_rows);
    }

    if let Some(pool) = &view.pool_size {
        println!("\n=== Summary Statistics for Pool Size ===");
        println!("Mean Pool Size: {}", pool.mean);
        println!("Median Pool Size: {}", pool.median);
        println!("Mode Pool Size: {}", pool.mode);
        println!("Distribution:");
        for entry in &pool.distribution {
            println!("  {:>10} | {}", entry.value, entry.count);
        }
    }

    if let Some(industries) = &view.industries {
        println!("\n=== GPT-Inferred Industries Breakdown ===");
        render_counts("GPT Industry", industries);
    }

    if let Some(top_roles) = &view.top_roles {
        if !top_roles.is_empty() {
            println!("\n=== Top Roles in Selected Locations ===");
            render_counts("Role", top_roles);
        }
    }

    render_ranked("Top Cities", "City", view.top_cities.as_ref());
    render_ranked("Top States", "State", view.top_states.as_ref());
}

fn render_ranked(title: &str, label: &str, ranked: Option<&RankedCounts>) {
    let Some(ranked) = ranked else {
        return;
    };
    println!("\n=== {title} ===");
    match ranked {
        RankedCounts::NoData => println!("No data available."),
        RankedCounts::Rows(rows) => render_counts(label, rows),
    }
}

fn render_counts(label: &str, rows: &[LabelCount]) {
    println!("{label} | Count");
    for row in rows {
        println!("{} | {}", row.label, row.count);
    }
}

fn render_table(table: &Frame, preview_rows: usize) {
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            table
                .rows()
                .iter()
                .take(preview_rows)
                .map(|row| row[idx].to_string().len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = table
        .columns()
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{name:<width$}"))
        .collect();
    println!("{}", header.join("  "));

    for row in table.rows().iter().take(preview_rows) {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell.to_string()))
            .collect();
        println!("{}", cells.join("  "));
    }
    if table.row_count() > preview_rows {
        println!("... {} more rows", table.row_count() - preview_rows);
    }
}
