use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "relgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark the four traversals and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also build with the `tracing` feature to measure its overhead
        #[arg(long, default_value_t = false)]
        tracing: bool,
    },
}

const BENCH: &str = "traversal_benchmark";
const GROUP: &str = "traversal";
const BASELINE: &str = "current";

/// Report columns, in criterion function-id form.
const KINDS: &[&str] = &["iterative-bfs", "recursive-bfs", "iterative-dfs", "recursive-dfs"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, tracing)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, tracing: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let mut build = Command::new("cargo");
    build.args(["build", "--bench", BENCH, "--release"]);
    if tracing {
        build.args(["--features", "tracing"]);
    }
    let status = build.status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running {BENCH}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.arg("bench").arg("--bench").arg(BENCH);
    if tracing {
        cmd.arg("--features").arg("tracing");
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(BASELINE);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context(format!("Failed to run {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let group_dir = Path::new("target/criterion").join(GROUP);
    if !group_dir.exists() {
        eprintln!("No criterion output found at {}", group_dir.display());
        return Ok(());
    }

    // vertex count -> traversal kind -> vertices per second
    let mut results: BTreeMap<u64, BTreeMap<String, f64>> = BTreeMap::new();
    for kind in KINDS {
        collect_kind(&group_dir.join(kind), kind, &mut results);
    }

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Vertices |")?;
    for kind in KINDS {
        write!(file, " {kind} (vertices/s) | vs iterative-bfs |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in KINDS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (size, by_kind) in &results {
        write!(file, "| {size} |")?;
        let reference = by_kind.get("iterative-bfs").copied().unwrap_or(0.0);

        for kind in KINDS {
            if let Some(rate) = by_kind.get(*kind) {
                let rel = if reference > 0.0 { rate / reference } else { 0.0 };
                write!(file, " {} | **{:.2}x** |", human_rate(*rate), rel)?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn human_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{rate:.0}")
    }
}

/// Reads `<kind>/<vertex count>/<baseline>/{estimates,benchmark}.json`.
fn collect_kind(dir: &Path, kind: &str, results: &mut BTreeMap<u64, BTreeMap<String, f64>>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let size_dir = entry.path();
        let Some(size) = size_dir
            .file_name()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u64>().ok())
        else {
            continue;
        };

        let baseline_dir = size_dir.join(BASELINE);
        let Some(mean_ns) = read_json(&baseline_dir.join("estimates.json"))
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
        else {
            continue;
        };
        if mean_ns <= 0.0 {
            continue;
        }

        let elements = read_json(&baseline_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64())
            .unwrap_or(1.0);

        results
            .entry(size)
            .or_default()
            .insert(kind.to_string(), (elements * 1e9) / mean_ns);
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
