//! Benchmarks for replaying catalogue gates on the reference devices.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use qcat_core::{CompositeGate, QubitId};
use qcat_sim::{DenseUnitary, Statevector};

fn toffoli() -> CompositeGate {
    CompositeGate::CCNot {
        control1: QubitId(0),
        control2: QubitId(1),
        target: QubitId(2),
    }
}

fn bench_statevector(c: &mut Criterion) {
    let mut group = c.benchmark_group("statevector_ccnot");
    for n in [3, 10, 16] {
        group.bench_function(format!("{n}_qubits"), |b| {
            let mut sv = Statevector::new(n).unwrap();
            b.iter(|| black_box(toffoli()).apply(&mut sv).unwrap());
        });
    }
    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    c.bench_function("dense_ccnot_6_qubits", |b| {
        b.iter(|| {
            let mut dev = DenseUnitary::new(6).unwrap();
            black_box(toffoli()).apply(&mut dev).unwrap();
            dev
        });
    });
}

criterion_group!(benches, bench_statevector, bench_dense);
criterion_main!(benches);
