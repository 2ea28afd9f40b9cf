use criterion::{Criterion, black_box, criterion_group, criterion_main};
use horo_ephem::{Body, MeanEphemeris, mean_longitude};
use horo_houses::GeoCoordinate;
use horo_search::{ReturnConfig, search_returns, solve_return};
use horo_time::Instant;

fn solve_bench(c: &mut Criterion) {
    let geo = GeoCoordinate::new(51.4779, -0.0015).unwrap();
    let config = ReturnConfig::default();
    let natal = Instant::from_calendar(1990, 4, 12, 8, 30, 0.0).unwrap();
    let start = Instant::from_calendar(2025, 1, 1, 0, 0, 0.0).unwrap();
    let end = Instant::from_calendar(2026, 1, 1, 0, 0, 0.0).unwrap();

    let mut group = c.benchmark_group("solve_return");
    for body in [Body::Sun, Body::Moon, Body::Mars] {
        let target = mean_longitude(body, natal.centuries());
        let window_end = start.add_days(body.mean_period_days().min(365.0)).unwrap();
        group.bench_function(body.name(), |b| {
            b.iter(|| {
                solve_return(
                    &MeanEphemeris,
                    body,
                    black_box(target),
                    black_box(start),
                    window_end,
                    &geo,
                    &config,
                )
            })
        });
    }
    group.finish();

    let target = mean_longitude(Body::Moon, natal.centuries());
    let mut group = c.benchmark_group("search_returns");
    group.bench_function("lunar_year", |b| {
        b.iter(|| {
            search_returns(
                &MeanEphemeris,
                Body::Moon,
                black_box(target),
                start,
                end,
                &geo,
                &config,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, solve_bench);
criterion_main!(benches);
