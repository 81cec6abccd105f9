//! API latency and throughput benchmark.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Raw per-request observations.
#[derive(Debug, Default, Clone)]
pub struct BenchmarkResults {
    name: String,
    latencies: Vec<Duration>,
    successes: usize,
    failures: usize,
    elapsed: Duration,
}

/// Aggregated view of a run. Latencies are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchSummary {
    pub name: String,
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    pub success_rate: f64,
    pub min_ms: f64,
    pub mean_ms: f64,
    /// Sample standard deviation; needs at least two samples.
    pub stddev_ms: Option<f64>,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
    pub requests_per_sec: f64,
}

impl BenchmarkResults {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_result(&mut self, latency: Duration, success: bool) {
        self.latencies.push(latency);
        if success {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn summary(&self) -> BenchSummary {
        let total = self.successes + self.failures;
        let mut ms: Vec<f64> = self.latencies.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        ms.sort_by(f64::total_cmp);

        let mean = if ms.is_empty() { 0.0 } else { ms.iter().sum::<f64>() / ms.len() as f64 };
        let elapsed = self.elapsed.as_secs_f64();

        BenchSummary {
            name: self.name.clone(),
            total,
            successes: self.successes,
            failures: self.failures,
            success_rate: if total > 0 { self.successes as f64 / total as f64 * 100.0 } else { 0.0 },
            min_ms: ms.first().copied().unwrap_or(0.0),
            mean_ms: mean,
            stddev_ms: sample_stddev(&ms, mean),
            median_ms: median(&ms),
            p95_ms: percentile(&ms, 95.0),
            p99_ms: percentile(&ms, 99.0),
            max_ms: ms.last().copied().unwrap_or(0.0),
            requests_per_sec: if elapsed > 0.0 { total as f64 / elapsed } else { 0.0 },
        }
    }
}

fn sample_stddev(samples: &[f64], mean: f64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let sum_sq: f64 = samples.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (samples.len() - 1) as f64).sqrt())
}

fn median(sorted: &[f64]) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n if n % 2 == 1 => sorted[n / 2],
        n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

/// Nearest-rank percentile over sorted samples.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (pct / 100.0 * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Parameters of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchOptions {
    /// Measured requests.
    pub requests: usize,
    /// Maximum measured requests in flight.
    pub concurrency: usize,
    /// Unmeasured requests sent first, one at a time.
    pub warmup: usize,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            requests: 100,
            concurrency: 10,
            warmup: 10,
        }
    }
}

/// Warm up `url`, then issue the measured GETs.
pub async fn run(client: &Client, url: &str, options: BenchOptions) -> BenchmarkResults {
    for _ in 0..options.warmup {
        let _ = get_ok(client, url).await;
    }

    let mut results = BenchmarkResults::new(format!("GET {url}"));
    let permits = Arc::new(Semaphore::new(options.concurrency.clamp(1, Semaphore::MAX_PERMITS)));
    let mut tasks = JoinSet::new();

    let started = Instant::now();
    for _ in 0..options.requests {
        let client = client.clone();
        let url = url.to_string();
        let permits = permits.clone();
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await.ok();
            let start = Instant::now();
            let ok = get_ok(&client, &url).await;
            (start.elapsed(), ok)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((latency, ok)) => results.add_result(latency, ok),
            Err(e) => tracing::warn!(component = "bench", reason = "Benchmark", error = %e, "Request task failed"),
        }
    }
    results.set_elapsed(started.elapsed());
    results
}

async fn get_ok(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(res) => res.status().is_success() && res.bytes().await.is_ok(),
        Err(_) => false,
    }
}

impl std::fmt::Display for BenchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "Benchmark: {}", self.name)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total requests:  {}", self.total)?;
        writeln!(f, "Successful:      {}", self.successes)?;
        writeln!(f, "Failed:          {}", self.failures)?;
        writeln!(f, "Success rate:    {:.2}%", self.success_rate)?;
        writeln!(f, "Latency (ms):")?;
        writeln!(f, "  min     {:.2}", self.min_ms)?;
        writeln!(f, "  mean    {:.2}", self.mean_ms)?;
        match self.stddev_ms {
            Some(stddev) => writeln!(f, "  stddev  {stddev:.2}")?,
            None => writeln!(f, "  stddev  n/a")?,
        }
        writeln!(f, "  median  {:.2}", self.median_ms)?;
        writeln!(f, "  p95     {:.2}", self.p95_ms)?;
        writeln!(f, "  p99     {:.2}", self.p99_ms)?;
        writeln!(f, "  max     {:.2}", self.max_ms)?;
        write!(f, "Throughput:      {:.2} req/s", self.requests_per_sec)
    }
}
