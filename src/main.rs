//! Splitring - Ring Buffer Benchmark
//!
//! Mengukur latency operasi utama:
//! - push_back / pop_front (FIFO hot path)
//! - pop_index (random removal dengan geser)
//! - io::Write / io::Read untuk Ring<u8>
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!   RUST_LOG=debug cargo run --release -- --verbose

use std::io::{Read, Write};
use std::time::Instant;

use splitring::Ring;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Konfigurasi benchmark
struct BenchConfig {
    capacity: usize,
    iterations: usize,
    chunk_size: usize,
    verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            capacity: 65536,
            iterations: 1_000_000,
            chunk_size: 64,
            verbose: false,
        }
    }
}

fn main() {
    let config = parse_args();
    init_tracing(config.verbose);

    println!("🚀 Splitring Ring Buffer - Benchmark");
    println!("====================================\n");
    info!(
        capacity = config.capacity,
        iterations = config.iterations,
        chunk_size = config.chunk_size,
        "starting benchmarks"
    );

    benchmark_push_pop(&config);
    benchmark_pop_index(&config);
    benchmark_stream(&config);
    demo_maintenance(&config);

    println!("\n✅ All benchmarks complete!");
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn benchmark_push_pop(config: &BenchConfig) {
    println!("📊 Push/Pop Benchmark (FIFO)");
    println!("----------------------------");

    let iterations = config.iterations;
    let capacity = config.capacity.max(1);
    let mut rb: Ring<u64> = Ring::new(capacity);

    // Warm up
    for i in 0..1000 {
        rb.push_back(i);
    }
    while rb.pop_front().is_some() {}

    // Benchmark push
    let start = Instant::now();
    for i in 0..iterations {
        while !rb.push_back(i as u64) {
            rb.pop_front();
        }
    }
    let push_duration = start.elapsed();

    rb.reset();
    for i in 0..capacity {
        rb.push_back(i as u64);
    }

    // Benchmark pop (refill setiap kali kosong)
    let start = Instant::now();
    for i in 0..iterations {
        if rb.pop_front().is_none() {
            rb.push_back(i as u64);
        }
    }
    let pop_duration = start.elapsed();

    let push_ns = push_duration.as_nanos() as f64 / iterations as f64;
    let pop_ns = pop_duration.as_nanos() as f64 / iterations as f64;

    println!("  Operations: {}", iterations);
    println!(
        "  Push latency: {:.2} ns/op ({:.3} μs/op)",
        push_ns,
        push_ns / 1000.0
    );
    println!(
        "  Pop latency:  {:.2} ns/op ({:.3} μs/op)",
        pop_ns,
        pop_ns / 1000.0
    );
    println!(
        "  Throughput:   {:.2} M ops/sec\n",
        iterations as f64 / push_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_pop_index(config: &BenchConfig) {
    println!("📊 Pop Index Benchmark (random removal)");
    println!("---------------------------------------");

    // pop_index O(jarak geser), jadi pakai ring kecil
    let capacity = config.capacity.clamp(1, 1024);
    let iterations = config.iterations / 10;
    let mut rb: Ring<u64> = Ring::new(capacity);
    for i in 0..capacity {
        rb.push_back(i as u64);
    }

    let mut seed = 0x9E37_79B9_7F4A_7C15u64;
    let start = Instant::now();
    for i in 0..iterations {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let index = (seed >> 33) as usize % rb.len();
        rb.pop_index(index);
        rb.push_back(i as u64);
    }
    let duration = start.elapsed();

    let ns = duration.as_nanos() as f64 / iterations.max(1) as f64;
    println!("  Capacity: {}", capacity);
    println!("  Operations: {}", iterations);
    println!("  pop_index+push latency: {:.2} ns/op\n", ns);
}

fn benchmark_stream(config: &BenchConfig) {
    println!("📊 Byte Stream Benchmark (io::Write + io::Read)");
    println!("-----------------------------------------------");

    let chunk_size = config.chunk_size.clamp(1, config.capacity.max(1));
    let iterations = config.iterations / 10;
    let mut rb: Ring<u8> = Ring::new(config.capacity);
    let data: Vec<u8> = (0..chunk_size).map(|i| (i % 256) as u8).collect();
    let mut buf = vec![0u8; chunk_size];

    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(e) = rb.write_all(&data) {
            eprintln!("❌ Write error: {}", e);
            return;
        }
        if let Err(e) = rb.read_exact(&mut buf) {
            eprintln!("❌ Read error: {}", e);
            return;
        }
    }
    let duration = start.elapsed();

    let bytes = (iterations * chunk_size * 2) as f64;
    println!("  Chunk size: {} bytes", chunk_size);
    println!("  Operations: {}", iterations);
    println!(
        "  Throughput: {:.2} MB/sec\n",
        bytes / duration.as_secs_f64() / 1_000_000.0
    );
}

fn demo_maintenance(config: &BenchConfig) {
    println!("📊 Maintenance (compact + resize)");
    println!("---------------------------------");

    let capacity = config.capacity.clamp(2, 4096);
    let mut rb: Ring<u32> = Ring::new(capacity);
    for i in 0..capacity as u32 {
        rb.push_back(i);
    }
    rb.skip(capacity / 2);
    for i in 0..(capacity / 4) as u32 {
        rb.push_back(i);
    }

    let start = Instant::now();
    rb.compact();
    let compact_duration = start.elapsed();
    debug!(len = rb.len(), "compacted ring");

    let start = Instant::now();
    if let Err(e) = rb.resize(capacity * 2) {
        eprintln!("❌ Resize error: {}", e);
        return;
    }
    let resize_duration = start.elapsed();

    println!("  Elements: {}", rb.len());
    println!("  Compact: {:?}", compact_duration);
    println!("  Resize to {}: {:?}", rb.capacity(), resize_duration);
}

fn parse_args() -> BenchConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = BenchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--capacity" | "-c" => {
                if i + 1 < args.len() {
                    config.capacity = args[i + 1].parse().unwrap_or(65536);
                    i += 1;
                }
            }
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--chunk" => {
                if i + 1 < args.len() {
                    config.chunk_size = args[i + 1].parse().unwrap_or(64);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Splitring Benchmark - Fixed-Capacity Ring Buffer\n");
                println!("Usage: splitring [OPTIONS]\n");
                println!("Options:");
                println!("  -c, --capacity <N>    Ring capacity (default: 65536)");
                println!("  -n, --iterations <N>  Operations per benchmark (default: 1000000)");
                println!("      --chunk <BYTES>   Stream chunk size (default: 64)");
                println!("  -v, --verbose         Debug logging");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}
