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
        solving_cfr_kuhn,
        solving_cfr_leduc,
        building_tree_leduc,
        evaluating_exploitability_leduc,
        resolving_init_kuhn,
        resolving_act_leduc,
}

fn solving_cfr_kuhn(c: &mut criterion::Criterion) {
    c.bench_function("run 100 CFR iterations on Kuhn", |b| {
        b.iter(|| Cfr::<Poker>::default().train(&Poker::new(KUHN), 100))
    });
}

fn solving_cfr_leduc(c: &mut criterion::Criterion) {
    c.bench_function("run 10 CFR iterations on Leduc", |b| {
        b.iter(|| Cfr::<Poker>::default().train(&Poker::new(LEDUC), 10))
    });
}

fn building_tree_leduc(c: &mut criterion::Criterion) {
    c.bench_function("expand the full Leduc tree", |b| {
        b.iter(|| Tree::build(&Poker::new(LEDUC)).map(|tree| tree.len()))
    });
}

fn evaluating_exploitability_leduc(c: &mut criterion::Criterion) {
    let root = Poker::new(LEDUC);
    let mut cfr = Cfr::<Poker>::default();
    let _ = cfr.train(&root, 100);
    let strategy = cfr.strategy();
    c.bench_function("measure Leduc exploitability", |b| {
        b.iter(|| exploitability(&root, &strategy))
    });
}

fn resolving_init_kuhn(c: &mut criterion::Criterion) {
    c.bench_function("initial resolve of Kuhn (100 iterations)", |b| {
        b.iter(|| {
            Resolver::<Poker>::new(Turn::P2, Config::default())
                .init(Poker::new(KUHN), Budget::iterations(100))
        })
    });
}

fn resolving_act_leduc(c: &mut criterion::Criterion) {
    let root = Poker::new(LEDUC);
    let mut resolver = Resolver::<Poker>::new(Turn::P1, Config::default());
    let Ok(init) = resolver.init(root, Budget::iterations(10)) else {
        return;
    };
    let hidden = root.apply(Edge::Draw(1)).apply(Edge::Draw(0)).info(Turn::P1);
    let Ok(range) = init.range(&hidden) else {
        return;
    };
    c.bench_function("in-game resolve of Leduc (100 iterations)", |b| {
        b.iter(|| resolver.act(&hidden, range.clone(), &init.cfv, Budget::iterations(100)))
    });
}

use cfrd::core::Config;
use cfrd::solver::Budget;
use cfrd::solver::Cfr;
use cfrd::solver::CfrGame;
use cfrd::solver::Edge;
use cfrd::solver::KUHN;
use cfrd::solver::LEDUC;
use cfrd::solver::Poker;
use cfrd::solver::Resolver;
use cfrd::solver::Tree;
use cfrd::solver::Turn;
use cfrd::solver::exploitability;
