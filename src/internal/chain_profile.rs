#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

//! Profiles chain lengths of `ChainedHashMap` under random string keys for several load
//! factor thresholds and renders the results as PNG charts.

use chained_map::{ChainStats, ChainedHashMap, MapConfig};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};
use tracing::{Level, info};

// Number of random keys inserted per load factor
const KEYS_TOTAL: usize = 20_000;
// Chain statistics are sampled every `SAMPLE_EVERY` inserts
const SAMPLE_EVERY: usize = 500;
// Random key lengths, inclusive
const MIN_KEY_LEN: usize = 3;
const MAX_KEY_LEN: usize = 12;

const LOAD_FACTORS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

struct Sample {
    keys: usize,
    capacity: usize,
    stats: ChainStats,
}

struct Profile {
    load_factor: f64,
    samples: Vec<Sample>,
}

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(MIN_KEY_LEN..=MAX_KEY_LEN);
            (&mut rng).sample_iter(Alphanumeric).take(len).map(char::from).collect()
        })
        .collect()
}

fn profile(load_factor: f64, keys: &[String]) -> Result<Profile, Box<dyn std::error::Error>> {
    let config = MapConfig::default().with_load_factor(load_factor);
    let mut map = ChainedHashMap::with_config(config)?;
    let mut samples = Vec::with_capacity(keys.len() / SAMPLE_EVERY);

    for (inserted, key) in keys.iter().enumerate() {
        map.set(key, inserted)?;

        if (inserted + 1) % SAMPLE_EVERY == 0 {
            samples.push(Sample {
                keys: map.len(),
                capacity: map.capacity(),
                stats: ChainStats::of(&map),
            });
        }
    }

    Ok(Profile { load_factor, samples })
}

fn plot(
    file: &str,
    caption: &str,
    y_desc: &str,
    profiles: &[Profile],
    metric: fn(&Sample) -> f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];

    let root = BitMapBackend::new(file, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = profiles
        .iter()
        .flat_map(|profile| profile.samples.iter().map(metric))
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..KEYS_TOTAL, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (idx, profile) in profiles.iter().enumerate() {
        let color = &colors[idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                profile.samples.iter().map(|sample| (sample.keys, metric(sample))),
                line_style,
            ))?
            .label(format!("load factor {:.2}", profile.load_factor))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            profile
                .samples
                .iter()
                .map(|sample| Circle::new((sample.keys, metric(sample)), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Same keys for every load factor to keep the comparison fair
    let keys = random_keys(KEYS_TOTAL);
    info!(keys = keys.len(), "generated random keys");

    let mut profiles = Vec::with_capacity(LOAD_FACTORS.len());
    for load_factor in LOAD_FACTORS {
        let profile = profile(load_factor, &keys)?;
        if let Some(last) = profile.samples.last() {
            info!(
                load_factor,
                entries = last.keys,
                capacity = last.capacity,
                empty_buckets = last.stats.empty_buckets,
                longest_chain = last.stats.longest_chain,
                mean_chain = last.stats.mean_chain,
                "profiled"
            );
        }
        profiles.push(profile);
    }

    plot(
        "mean_chain_length.png",
        "Mean Length of Non-Empty Chains",
        "Entries per Occupied Bucket",
        &profiles,
        |sample| sample.stats.mean_chain,
    )?;
    plot(
        "longest_chain.png",
        "Longest Chain",
        "Entries in the Longest Chain",
        &profiles,
        |sample| sample.stats.longest_chain as f64,
    )?;
    plot(
        "empty_buckets.png",
        "Share of Empty Buckets",
        "Empty Buckets / Capacity",
        &profiles,
        |sample| sample.stats.empty_buckets as f64 / sample.capacity as f64,
    )?;

    info!("generated plot images: mean_chain_length.png, longest_chain.png, empty_buckets.png");

    Ok(())
}
