/// listings_seeder fills the listings database with synthetic rows
/// Required environment variables:
/// - DATABASE_URL
use anyhow::Context;
use clap::Parser;
use generator::SeedGenerator;
use listings_db_client::{
    clear::clear_all, owners::insert::insert_owner, properties::insert::insert_property,
    property_images::insert::insert_property_image,
    property_traces::insert::insert_property_trace,
};
use listings_entrypoint::ListingsEntrypoint;
use sqlx::postgres::PgPoolOptions;

mod generator;

const PROGRESS_EVERY: u64 = 1000;

#[derive(Parser, Debug)]
#[command(about = "Seed the listings database with synthetic data")]
struct Args {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Number of owners to create
    #[arg(long, default_value_t = 10_000)]
    owners: u64,

    #[arg(long, default_value_t = 5)]
    properties_per_owner: u64,

    #[arg(long, default_value_t = 3)]
    images_per_property: u64,

    #[arg(long, default_value_t = 2)]
    traces_per_property: u64,

    /// Append to the existing rows instead of wiping the tables first
    #[arg(long)]
    keep_existing: bool,
}

#[derive(Debug, Default)]
struct Counts {
    owners: u64,
    properties: u64,
    images: u64,
    traces: u64,
}

fn tick(counter: &mut u64, kind: &str) {
    *counter += 1;
    if *counter % PROGRESS_EVERY == 0 {
        tracing::info!(kind, inserted = *counter, "seeding progress");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ListingsEntrypoint::default().init();
    let args = Args::parse();

    let db = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect(&args.database_url)
        .await
        .context("could not connect to db")?;

    if !args.keep_existing {
        for (table, rows) in clear_all(&db).await.context("could not clear tables")? {
            tracing::info!(table, rows, "cleared table");
        }
    }

    let mut generator = SeedGenerator::new(rand::thread_rng(), chrono::Utc::now().date_naive());
    let mut counts = Counts::default();

    for _ in 0..args.owners {
        let owner = generator.owner();
        insert_owner(&db, &owner).await?;
        tick(&mut counts.owners, "owners");

        for _ in 0..args.properties_per_owner {
            let property = generator.property(&owner.id);
            insert_property(&db, &property).await?;
            tick(&mut counts.properties, "properties");

            for _ in 0..args.images_per_property {
                insert_property_image(&db, &generator.image(&property.id)).await?;
                tick(&mut counts.images, "images");
            }

            for _ in 0..args.traces_per_property {
                insert_property_trace(&db, &generator.trace(&property.id)).await?;
                tick(&mut counts.traces, "traces");
            }
        }
    }

    tracing::info!(
        owners = counts.owners,
        properties = counts.properties,
        images = counts.images,
        traces = counts.traces,
        "seeding complete"
    );

    Ok(())
}
