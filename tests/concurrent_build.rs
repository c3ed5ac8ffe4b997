use std::sync::{Arc, Barrier};
use std::thread;

use sid_waveforms::{ChipModel, CombinedWaveform, CombinedWaveforms, WaveformCalculator};

const THREADS: usize = 8;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn concurrent_requests_build_once() {
    init_logger();
    let calc = WaveformCalculator::new();
    let barrier = Barrier::new(THREADS);

    let tables: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    calc.build_pulldown_table(ChipModel::Mos8580, CombinedWaveforms::Strong)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calc.builds(), 1);
    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table));
    }

    let fresh = WaveformCalculator::new();
    let reference = fresh.build_pulldown_table(ChipModel::Mos8580, CombinedWaveforms::Strong);
    assert_eq!(*tables[0], *reference);
}

#[test]
fn concurrent_mixed_requests_build_each_configuration_once() {
    init_logger();
    let calc = WaveformCalculator::new();
    let barrier = Barrier::new(THREADS * 2);

    thread::scope(|s| {
        for i in 0..THREADS * 2 {
            let calc = &calc;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                let model = ChipModel::ALL[i % 2];
                let cws = CombinedWaveforms::ALL[i % 3];
                let table = calc.build_pulldown_table(model, cws);
                // basic table reads race freely with pulldown builds
                assert_eq!(
                    calc.basic_table()[sid_waveforms::BasicWaveform::Sawtooth][i],
                    i as i16
                );
                assert_eq!(table.sample(CombinedWaveform::TriangleSawtooth, 0), 0);
            });
        }
    });

    assert_eq!(calc.builds(), 6);
    assert_eq!(calc.cached(), 6);
}

fn global_address() -> usize {
    WaveformCalculator::global() as *const WaveformCalculator as usize
}

#[test]
fn global_calculator_shared_across_threads() {
    init_logger();
    let handles: Vec<_> = (0..THREADS)
        .map(|_| thread::spawn(global_address))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
