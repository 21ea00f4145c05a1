use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use sheet_nest::entities::{Bin, Part};
use sheet_nest::packers::PackerKind;
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, packer_bench);

const N_PARTS: [usize; 3] = [50, 200, 800];

fn random_parts(n: usize, rng: &mut SmallRng) -> Vec<Part> {
    (0..n)
        .map(|i| {
            let w = rng.random_range(20.0..400.0);
            let h = rng.random_range(20.0..400.0);
            Part::try_new(format!("P{i}"), w, h).unwrap()
        })
        .collect()
}

/// Time needed by each packer to lay out a list of random parts on a 3000 x 1250 sheet.
/// Larger lists mostly stress the rejection of parts once the sheet is full.
fn packer_bench(c: &mut Criterion) {
    let bin = Bin::try_new(3000.0, 1250.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    for kind in PackerKind::ALL {
        let mut group = c.benchmark_group(kind.name());
        for n in N_PARTS {
            let parts = random_parts(n, &mut rng);
            let packer = kind.create(bin, true);
            group.throughput(criterion::Throughput::Elements(n as u64));
            group.bench_function(BenchmarkId::from_parameter(n), |b| {
                b.iter(|| packer.pack(black_box(&parts)))
            });
        }
        group.finish();
    }
}
