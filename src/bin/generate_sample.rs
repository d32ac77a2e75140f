use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use parquet::arrow::ArrowWriter;

use launch_dashboard::data::loader::records_to_batch;
use launch_dashboard::data::model::LaunchRecord;

/// Write a synthetic launch table for trying out the dashboard
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output file; format follows the extension (.csv, .json, .parquet)
    #[arg(default_value = "spacex_launch_dash.csv")]
    output: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Launch sites with their share of flights.
const SITES: [(&str, usize); 4] = [
    ("CCAFS LC-40", 26),
    ("VAFB SLC-4E", 10),
    ("KSC LC-39A", 13),
    ("CCAFS SLC-40", 7),
];

/// Booster categories in flight order: (name, success probability, max payload kg).
const CATEGORIES: [(&str, f64, f64); 5] = [
    ("v1.0", 0.2, 700.0),
    ("v1.1", 0.35, 4500.0),
    ("FT", 0.8, 6800.0),
    ("B4", 0.6, 9600.0),
    ("B5", 1.0, 4000.0),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }
}

fn generate(seed: u64) -> Vec<LaunchRecord> {
    let mut rng = SimpleRng::new(seed);

    // Site of every flight, shuffled so sites interleave.
    let mut flight_sites: Vec<&str> = SITES
        .iter()
        .flat_map(|&(site, n)| std::iter::repeat(site).take(n))
        .collect();
    for i in (1..flight_sites.len()).rev() {
        let j = rng.below(i + 1);
        flight_sites.swap(i, j);
    }

    let n_flights = flight_sites.len();
    flight_sites
        .into_iter()
        .enumerate()
        .map(|(i, site)| {
            // Newer boosters fly later.
            let (category, p_success, max_payload) = CATEGORIES[i * CATEGORIES.len() / n_flights];
            let payload = if category == "v1.0" && rng.next_f64() < 0.5 {
                0.0
            } else {
                (rng.next_f64() * max_payload).round()
            };
            LaunchRecord {
                launch_site: site.to_string(),
                payload_mass_kg: payload,
                class: u8::from(rng.next_f64() < p_success),
                booster_version_category: category.to_string(),
            }
        })
        .collect()
}

fn write_csv(path: &Path, records: &[LaunchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_json(path: &Path, records: &[LaunchRecord]) -> Result<()> {
    let file = std::fs::File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, records).context("writing JSON")
}

fn write_parquet(path: &Path, records: &[LaunchRecord]) -> Result<()> {
    let batch = records_to_batch(records)?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let records = generate(args.seed);

    let ext = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => write_csv(&args.output, &records)?,
        "json" => write_json(&args.output, &records)?,
        "parquet" | "pq" => write_parquet(&args.output, &records)?,
        other => bail!("Unsupported output extension: .{other}"),
    }

    println!(
        "Wrote {} launches from {} sites to {}",
        records.len(),
        SITES.len(),
        args.output.display()
    );
    Ok(())
}
