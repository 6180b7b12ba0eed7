//! Synthesis benchmarks

use std::sync::atomic::AtomicBool;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rf_synth::*;

fn benchmark_qam64_synthesize(c: &mut Criterion) {
    let gen = ConstellationGenerator::new(
        ConstellationConfig::default()
            .with_constellations(["64qam"])
            .with_num_iq_samples(4096)
            .with_num_samples_per_class(1),
    )
    .unwrap();
    let orders = gen.build_index(&mut ChaCha8Rng::seed_from_u64(0)).unwrap();

    c.bench_function("qam64_synthesize_4096_samples", |b| {
        b.iter(|| black_box(gen.synthesize(&orders[0]).unwrap()))
    });
}

fn benchmark_gmsk_synthesize(c: &mut Criterion) {
    let gen = FskGenerator::new(
        FskConfig::default()
            .with_modulations(["4gmsk"])
            .with_num_iq_samples(4096)
            .with_iq_samples_per_symbol(8)
            .with_num_samples_per_class(1),
    )
    .unwrap();
    let orders = gen.build_index(&mut ChaCha8Rng::seed_from_u64(0)).unwrap();

    c.bench_function("gmsk4_synthesize_4096_samples", |b| {
        b.iter(|| black_box(gen.synthesize(&orders[0]).unwrap()))
    });
}

fn benchmark_ofdm_synthesize(c: &mut Criterion) {
    let gen = OfdmGenerator::new(OfdmConfig::default().with_num_iq_samples(4096)).unwrap();

    for method in [SidelobeSuppression::None, SidelobeSuppression::RandLpf, SidelobeSuppression::WinCenter] {
        let order = WorkOrder::new(
            "ofdm-256",
            0,
            SynthesisParams::Ofdm(OfdmParams {
                num_subcarriers: 256,
                cyclic_prefix_len: 32,
                constellation: "qpsk".into(),
                subcarrier_modulation: SubcarrierModulation::Random,
                sidelobe_suppression: method,
                dc_subcarrier: DcSubcarrier::Off,
                time_varying_realism: TimeVaryingRealism::Off,
            }),
            RequestedDescriptor::new("ofdm-256"),
        );

        c.bench_function(&format!("ofdm256_{}_4096_samples", method), |b| {
            b.iter(|| black_box(gen.synthesize(&order).unwrap()))
        });
    }
}

fn benchmark_batch_synthesize(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dataset = SyntheticDataset::digital(
        DigitalModulationConfig::default()
            .with_modulations(["bpsk", "16qam", "2gfsk", "4fsk"])
            .with_num_iq_samples(1024)
            .with_num_samples_per_class(64),
        &mut ChaCha8Rng::seed_from_u64(0),
    )
    .unwrap();
    let cancel = AtomicBool::new(false);

    c.bench_function("digital_batch_256_orders", |b| {
        b.iter(|| black_box(dataset.table().synthesize_batch(dataset.orders(), &cancel).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_qam64_synthesize,
    benchmark_gmsk_synthesize,
    benchmark_ofdm_synthesize,
    benchmark_batch_synthesize
);
criterion_main!(benches);
