criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        encoding_memory_sequence,
        predicting_cyclic_distribution,
        training_single_round,
}

fn encoding_memory_sequence(c: &mut criterion::Criterion) {
    let memory = MemoryStore::new(MEMORY_DEPTH, Variant::Cyclic);
    c.bench_function("encode a 10-round memory snapshot", |b| {
        b.iter(|| Sequence::from(&memory.snapshot()))
    });
}

fn predicting_cyclic_distribution(c: &mut criterion::Criterion) {
    let engine = PredictionEngine::new(&Config::default(), Variant::Cyclic).unwrap();
    let sequence = Sequence::from(&MemoryStore::new(MEMORY_DEPTH, Variant::Cyclic).snapshot());
    c.bench_function("predict the next card (K=3)", |b| {
        b.iter(|| engine.predict(&sequence).unwrap())
    });
}

fn training_single_round(c: &mut criterion::Criterion) {
    let config = Config::default();
    let mut engine = PredictionEngine::new(&config, Variant::Cyclic).unwrap();
    let mut trainer = OnlineTrainer::new(&config, &engine).unwrap();
    let sequence = Sequence::from(&MemoryStore::new(MEMORY_DEPTH, Variant::Cyclic).snapshot());
    let target = Card::B.onehot(Variant::Cyclic);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    c.bench_function("train one round (30 epochs, K=3)", |b| {
        b.iter(|| {
            runtime
                .block_on(trainer.train(&mut engine, &sequence, &target))
                .unwrap()
        })
    });
}

use pyotr::encoding::*;
use pyotr::engine::*;
use pyotr::memory::*;
use pyotr::moves::*;
use pyotr::training::*;
use pyotr::*;
