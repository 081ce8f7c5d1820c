//! Fold Benchmarking Tool
//!
//! Measures search-key throughput on a large UTF-8 text file, one row per
//! line, the way a table would feed cells to the hooks.
//!
//! ## What It Benchmarks
//!
//! 1. **String**: Accent folding of the whole file
//! 2. **Html**: Tag stripping followed by folding
//! 3. **Filter**: Loading every line into a filter column and running a query
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/fold_bench /path/to/cells.txt string
//! ./target/release/fold_bench /path/to/cells.txt html
//! ./target/release/fold_bench /path/to/cells.txt all
//! RUST_LOG=tablefold_core=trace ./target/release/fold_bench /path/to/cells.txt all
//! ```
//!
//! Build with `--release` and use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::io;
use std::process;
use std::time::{Duration, Instant};

use tablefold_core::analyzer::fold::AccentFolder;
use tablefold_core::analyzer::markup::strip_tags_into;
use tablefold_core::FilterColumn;
use tablefold_types::SearchType;
use tracing::info;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;
const FILTER_QUERY: &str = "e";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: fold_bench <path> [string|html|all]");
        process::exit(1);
    }

    let path = &args[1];

    let mode = match args.get(2).map(String::as_str) {
        None | Some("all") => None,
        Some(name) => match name.parse::<SearchType>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        },
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    info!(path = %path, bytes = input.len(), "loaded input");

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Mode:      {}\n", mode.map_or("all", SearchType::name));

    match mode {
        Some(SearchType::String) => bench_fold(input),
        Some(SearchType::Html) => bench_html(input),
        None => {
            bench_fold(input);
            bench_html(input);
            bench_filter(input);
        }
    }

    Ok(())
}

fn bench_fold(input: &str) {
    let folder = AccentFolder::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Fold ===");

    warmup(|| folder.fold_into(input, &mut out));
    let elapsed = measure(|| folder.fold_into(input, &mut out));

    print_perf("String", input.len(), elapsed, 0);
}

fn bench_html(input: &str) {
    let folder = AccentFolder::new();
    let mut stripped = String::with_capacity(input.len());
    let mut out = String::with_capacity(input.len());

    println!("=== Strip + Fold ===");

    warmup(|| {
        strip_tags_into(input, &mut stripped);
        folder.fold_into(&stripped, &mut out);
    });
    let elapsed = measure(|| {
        strip_tags_into(input, &mut stripped);
        folder.fold_into(&stripped, &mut out);
    });

    print_perf("Html", input.len(), elapsed, 0);
}

fn bench_filter(input: &str) {
    println!("=== Filter column ===");

    let mut rows = 0u64;
    let elapsed = measure(|| {
        let mut column = FilterColumn::new(SearchType::String);
        for line in input.lines() {
            if column.add(line).is_none() {
                break;
            }
        }
        let hits = column.search(FILTER_QUERY);
        rows = column.len() as u64;
        std::hint::black_box(hits);
    });

    print_perf("Filter", input.len(), elapsed, rows);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, rows: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if rows > 0 {
        println!("Rows        : {}", fmt_count(rows));
        println!("Rows/sec    : {}", fmt_count((rows as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
