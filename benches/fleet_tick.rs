use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecocitty_connect::data::default_routes;
use ecocitty_connect::models::SimulationConfig;
use ecocitty_connect::simulation::{step, Fleet, SimulationState};

fn benchmark_fleet_tick(c: &mut Criterion) {
    let routes = default_routes().expect("bundled routes parse");
    let config = SimulationConfig { seed: Some(1), ..SimulationConfig::default() };

    // One tick of every bundled line (what the browser timer does every 50ms)
    c.bench_function("fleet_tick_all", |b| {
        let mut fleet = Fleet::from_config(routes.clone(), &config);
        b.iter(|| black_box(fleet.tick_all()));
    });

    // A full minute of simulated time
    c.bench_function("fleet_1200_ticks", |b| {
        b.iter(|| {
            let mut fleet = Fleet::from_config(black_box(routes.clone()), &config);
            for _ in 0..1200 {
                black_box(fleet.tick_all());
            }
        });
    });

    // The bare state transition without output formatting
    let route = &routes[0];
    let profile = config.motion_profile();
    c.bench_function("step", |b| {
        let mut state = SimulationState::at_departure(route);
        b.iter(|| {
            state = step(black_box(&state), route, &profile);
        });
    });
}

criterion_group!(benches, benchmark_fleet_tick);
criterion_main!(benches);
