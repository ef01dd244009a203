use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use libvicc::session::{ReadKind, SessionBuilder};
use libvicc::transport::MockTransceiver;
use libvicc::OptionFlag;

fn bench_chained_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_read");
    for &budget in &[32usize, 120, 240] {
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| {
                let mut session = SessionBuilder::new()
                    .with_transceiver(MockTransceiver::new())
                    .chaining(true)
                    .transfer_budget(budget)
                    .build()
                    .expect("session");
                let per = usize::from(session.config().max_blocks_per_transfer(4));
                let mut left = 256usize;
                while left > 0 {
                    let n = per.min(left);
                    session.transceiver_mut().push_response(vec![0u8; n * 4]);
                    left -= n;
                }
                let data = session
                    .read_blocks(ReadKind::ExtendedMultiple, false, OptionFlag::Off, 0, 256)
                    .expect("read");
                black_box(data);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chained_read);
criterion_main!(benches);
