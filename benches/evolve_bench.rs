//! Criterion benchmarks for u-evolve.
//!
//! Uses the reference problems (knapsack, string matching) and a OneMax
//! closure to measure engine overhead per generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use u_evolve::ga::random::create_rng;
use u_evolve::ga::{
    Alphabet, EvolutionConfig, EvolutionRunner, Objective, Organism, Population, Selection,
    SharedEvaluator,
};
use u_evolve::problems::{Knapsack, MismatchCount};

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_demo");
    group.sample_size(10);

    let knapsack = Arc::new(Knapsack::demo());
    let alphabet = Arc::new(Alphabet::binary());

    for pop in [50usize, 100, 200] {
        let config = EvolutionConfig::default()
            .with_population_size(pop)
            .with_genome_length(knapsack.len())
            .with_fitness_limit(190)
            .with_generation_limit(300)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, config| {
            b.iter(|| {
                let result = EvolutionRunner::run(
                    black_box(config),
                    alphabet.clone(),
                    knapsack.clone(),
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_string_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_match_minimize");
    group.sample_size(10);

    let alphabet = Arc::new(Alphabet::text());

    for target in ["Hello", "Hello World"] {
        let evaluator = Arc::new(MismatchCount::new(target));
        let config = EvolutionConfig::default()
            .with_population_size(500)
            .with_genome_length(evaluator.target_len())
            .with_objective(Objective::Minimize)
            .with_fitness_limit(0)
            .with_generation_limit(200)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("len", target.len()),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = EvolutionRunner::run(
                        black_box(config),
                        alphabet.clone(),
                        evaluator.clone(),
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Single generation: OneMax, fixed number of reproduction steps
// ===========================================================================

fn bench_reproduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reproduce_onemax");
    group.sample_size(10);

    let ones: SharedEvaluator<u8> =
        Arc::new(|g: &[u8]| g.iter().filter(|&&b| b == 1).count() as i64);
    let alphabet = Arc::new(Alphabet::binary());

    for (n, selection) in [
        (64usize, Selection::rank_biased()),
        (64, Selection::Tournament(3)),
        (256, Selection::rank_biased()),
    ] {
        let config = EvolutionConfig::default()
            .with_population_size(200)
            .with_genome_length(n)
            .with_selection(selection);
        let mut rng = create_rng(42);
        let seeded: Vec<Organism<u8>> =
            Population::seed(&config, alphabet.clone(), ones.clone(), &mut rng)
                .expect("valid config")
                .into_organisms();

        group.bench_with_input(
            BenchmarkId::new(format!("{selection:?}"), n),
            &(config, seeded),
            |b, (config, seeded)| {
                b.iter(|| {
                    let mut rng = create_rng(7);
                    let mut pop = Population::from_organisms(config, seeded.clone())
                        .expect("valid population");
                    for _ in 0..10 {
                        pop.reproduce(&mut rng).expect("equal-length genomes");
                    }
                    black_box(pop)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_string_match, bench_reproduce);
criterion_main!(benches);
