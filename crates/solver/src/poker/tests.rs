use super::*;
use crate::*;
use cfrd_core::Config;
use cfrd_core::Utility;

fn kuhn() -> Poker {
    Poker::new(KUHN)
}

fn leduc() -> Poker {
    Poker::new(LEDUC)
}

fn solve<R, W>(root: &Poker, iterations: usize) -> Strategy<Info>
where
    R: RegretSchedule,
    W: PolicySchedule,
{
    let mut cfr = Cfr::<Poker, R, W>::default();
    cfr.train(root, iterations).unwrap();
    cfr.strategy()
}

fn exploit(strategy: &Strategy<Info>) -> Utility {
    exploitability(&kuhn(), strategy).unwrap()
}

#[test]
fn kuhn_uniform_exploitability() {
    let e = exploit(&Strategy::default());
    assert!((e - 11. / 24.).abs() < 1e-12);
}

#[test]
fn leduc_uniform_exploitability() {
    let e = exploitability(&leduc(), &Strategy::default()).unwrap();
    assert!((e - 1.2416666666666667).abs() < 1e-9);
}

#[test]
fn kuhn_converges() {
    let early = exploit(&solve::<SummedRegret, ConstantWeight>(&kuhn(), 10));
    let late = exploit(&solve::<SummedRegret, ConstantWeight>(&kuhn(), 10_000));
    assert!(late < early);
    assert!(late < 0.005);
}

macro_rules! converges {
    ($R:ident, $W:ident, $N:expr, $E:expr) => {
        paste::paste! {
            #[test]
            fn [<kuhn_ $R:snake _ $W:snake>]() {
                let e = exploit(&solve::<$R, $W>(&kuhn(), $N));
                assert!(e < $E, "exploitability {} above {}", e, $E);
            }
        }
    };
}

#[rustfmt::skip] converges!(SummedRegret,     ConstantWeight,    1000, 0.03);
#[rustfmt::skip] converges!(SummedRegret,     LinearWeight,      1000, 0.03);
#[rustfmt::skip] converges!(SummedRegret,     QuadraticWeight,   1000, 0.03);
#[rustfmt::skip] converges!(SummedRegret,     ExponentialWeight, 1000, 0.03);
#[rustfmt::skip] converges!(FlooredRegret,    ConstantWeight,    1000, 0.03);
#[rustfmt::skip] converges!(FlooredRegret,    LinearWeight,      1000, 0.03);
#[rustfmt::skip] converges!(FlooredRegret,    QuadraticWeight,   1000, 0.03);
#[rustfmt::skip] converges!(FlooredRegret,    ExponentialWeight, 1000, 0.03);
#[rustfmt::skip] converges!(LinearRegret,     ConstantWeight,    1000, 0.03);
#[rustfmt::skip] converges!(LinearRegret,     LinearWeight,      1000, 0.03);
#[rustfmt::skip] converges!(LinearRegret,     QuadraticWeight,   1000, 0.03);
#[rustfmt::skip] converges!(LinearRegret,     ExponentialWeight, 1000, 0.03);
#[rustfmt::skip] converges!(DiscountedRegret, ConstantWeight,    1000, 0.03);
#[rustfmt::skip] converges!(DiscountedRegret, LinearWeight,      1000, 0.03);
#[rustfmt::skip] converges!(DiscountedRegret, QuadraticWeight,   1000, 0.03);
#[rustfmt::skip] converges!(DiscountedRegret, ExponentialWeight, 1000, 0.03);
#[rustfmt::skip] converges!(PluribusRegret,   ConstantWeight,    1000, 0.03);
#[rustfmt::skip] converges!(PluribusRegret,   LinearWeight,      1000, 0.03);
#[rustfmt::skip] converges!(PluribusRegret,   QuadraticWeight,   1000, 0.03);
#[rustfmt::skip] converges!(PluribusRegret,   ExponentialWeight, 1000, 0.03);

#[test]
fn strategy_survives_json() {
    let mut cfr = Cfr::<Poker>::default();
    cfr.train(&kuhn(), 100).unwrap();
    let average = cfr.average();
    let json = average.to_json().unwrap();
    let restored = Strategy::<Info>::from_json(&json).unwrap();
    assert_eq!(restored.len(), average.len());
    let strategy = average.normalized();
    for (info, weights) in restored.normalized().iter() {
        let expected = strategy.distribution(info, weights.len());
        let actual = restored.distribution(info, weights.len());
        for (a, b) in expected.iter().zip(&actual) {
            assert!((a - b).abs() < 1e-12);
        }
        let twice = weights.normalized();
        assert!((twice.mass() - 1.).abs() < 1e-9);
    }
    assert!(Strategy::<Info>::from_json("{").is_err());
}

#[test]
fn sparse_strategy_survives_json() {
    let king = kuhn().apply(Edge::Draw(2)).apply(Edge::Draw(0)).info(Turn::P1);
    let mut sparse = Strategy::<Info>::default();
    sparse.add(king, 0, 2.);
    let json = sparse.to_json().unwrap();
    let restored = Strategy::<Info>::from_json(&json).unwrap().normalized();
    assert_eq!(restored.distribution(&king, 2), vec![1., 0.]);
    assert_eq!(sparse.distribution(&king, 2), restored.distribution(&king, 2));
}

#[test]
fn percepts_rebuild_information_sets() {
    let mut stack = vec![(leduc(), [leduc().info(Turn::P1), leduc().info(Turn::P2)])];
    let mut checked = 0;
    while let Some((game, infos)) = stack.pop() {
        for seat in Turn::PLAYERS {
            assert_eq!(infos[seat.index()], game.info(seat));
        }
        checked += 1;
        for edge in game.choices() {
            let mut next = infos;
            for percept in game.percepts(edge) {
                for seat in Turn::PLAYERS {
                    if percept.observed_by(seat) {
                        next[seat.index()] = next[seat.index()].perceive(&percept);
                    }
                }
            }
            if game.turn().is_player() {
                let actor = game.turn().index();
                next[actor] = next[actor].apply(edge);
            }
            stack.push((game.apply(edge), next));
        }
    }
    assert!(checked > 100);
}

#[test]
fn kuhn_showdown_and_folds() {
    let dealt = kuhn().apply(Edge::Draw(2)).apply(Edge::Draw(0));
    let called = dealt.apply(Edge::Bet).apply(Edge::Call);
    assert!(called.is_terminal());
    assert_eq!(called.payoff(Turn::P1), 2.);
    assert_eq!(called.payoff(Turn::P2), -2.);
    let folded = dealt.apply(Edge::Check).apply(Edge::Bet).apply(Edge::Fold);
    assert_eq!(folded.payoff(Turn::P2), 1.);
    let checked = dealt.apply(Edge::Check).apply(Edge::Check);
    assert_eq!(checked.payoff(Turn::P1), 1.);
}

#[test]
fn leduc_pair_beats_high_card() {
    let state = leduc()
        .apply(Edge::Draw(0))
        .apply(Edge::Draw(2))
        .apply(Edge::Check)
        .apply(Edge::Check);
    assert!(state.is_chance());
    let chances = state.chances();
    assert_eq!(chances.len(), 3);
    assert!((chances.iter().map(|(_, p)| p).sum::<f64>() - 1.).abs() < 1e-12);
    let paired = state.apply(Edge::Draw(0));
    assert_eq!(paired.turn(), Turn::P1);
    let showdown = paired.apply(Edge::Bet).apply(Edge::Call);
    assert_eq!(showdown.payoff(Turn::P1), 5.);
}

#[test]
fn kuhn_resolver_calls_king_and_folds_jack() {
    let mut resolver = Resolver::<Poker>::new(Turn::P2, Config::default());
    let init = resolver.init(kuhn(), Budget::iterations(1000)).unwrap();
    let king = kuhn()
        .apply(Edge::Draw(0))
        .apply(Edge::Draw(2))
        .apply(Edge::Bet)
        .info(Turn::P2);
    let jack = kuhn()
        .apply(Edge::Draw(1))
        .apply(Edge::Draw(0))
        .apply(Edge::Bet)
        .info(Turn::P2);
    let range = init.range(&king).unwrap();
    let outcome = resolver
        .act(&king, range, &init.cfv, Budget::iterations(2000))
        .unwrap();
    // fold, call
    assert!(outcome.strategy.distribution(&king, 2)[1] > 0.95);
    assert!(outcome.strategy.distribution(&jack, 2)[0] > 0.95);
    assert!(outcome.map.is_empty());
}

#[test]
fn kuhn_resolver_first_to_act() {
    let mut resolver = Resolver::<Poker>::new(Turn::P1, Config::default());
    let init = resolver.init(kuhn(), Budget::iterations(1000)).unwrap();
    assert_eq!(init.map.len(), 6);
    let jack = kuhn().apply(Edge::Draw(0)).apply(Edge::Draw(1)).info(Turn::P1);
    let range = init.range(&jack).unwrap();
    assert_eq!(range.len(), 6);
    let outcome = resolver
        .act(&jack, range, &init.cfv, Budget::iterations(2000))
        .unwrap();
    assert_eq!(outcome.strategy.len(), 3);
    for (_, weights) in outcome.strategy.iter() {
        assert!((weights.mass() - 1.).abs() < 1e-9);
    }
    // P1 acts again only after check-bet
    assert_eq!(outcome.map.len(), 6);
}

#[test]
fn leduc_resolve_matches_trunk() {
    let root = leduc();
    let trunk = solve::<SummedRegret, ConstantWeight>(&root, 5000);
    let before = exploitability(&root, &trunk).unwrap();

    let target = root
        .apply(Edge::Draw(0))
        .apply(Edge::Draw(1))
        .apply(Edge::Check);
    let hidden = target.info(Turn::P2);
    let mut map = SubgameMap::new(Turn::P2);
    for state in decisions(&root, Turn::P2) {
        map.add(state);
    }
    let roots = map.subgame(&hidden).unwrap();
    assert_eq!(roots.len(), 9);

    let (range, cfv) = summarize(&root, &trunk, Turn::P2, &roots).unwrap();
    let mass = range.states().iter().map(|(_, p)| p).sum::<f64>();
    assert!((mass - 1.).abs() < 1e-9);

    let outcome = Resolver::<Poker>::new(Turn::P2, Config::default())
        .act(&hidden, range, &cfv, Budget::iterations(2000))
        .unwrap();
    let mut combined = trunk.clone();
    combined.replace(&outcome.strategy);
    let after = exploitability(&root, &combined).unwrap();
    assert!(after < before + 0.01, "{} against trunk {}", after, before);
}

#[test]
fn resolving_player_finishes_hands() {
    for (table, seed) in [(KUHN, 1), (KUHN, 2), (LEDUC, 3)] {
        let root = Poker::new(table);
        let config = Config {
            seed,
            ..Config::default()
        };
        let mut players: [Box<dyn Player<Poker>>; 2] = [
            Box::new(ResolvingPlayer::<Poker>::new(root, Turn::P1, config).with_iterations(100)),
            Box::new(RandomPlayer::new(&root, Turn::P2, seed)),
        ];
        let end = play_hand(&root, &mut players, &mut Sampler::new(seed), &config).unwrap();
        assert!(end.is_terminal());
        assert_eq!(end.payoff(Turn::P1), -end.payoff(Turn::P2));
    }
}

#[test]
fn resolving_players_face_off() {
    let root = kuhn();
    let mut players: [Box<dyn Player<Poker>>; 2] = [
        Box::new(ResolvingPlayer::<Poker>::new(root, Turn::P1, Config::default()).with_iterations(100)),
        Box::new(ResolvingPlayer::<Poker>::new(root, Turn::P2, Config::default()).with_iterations(100)),
    ];
    let end = play_hand(&root, &mut players, &mut Sampler::new(7), &Config::default()).unwrap();
    assert!(end.is_terminal());
}

#[test]
fn evaluator_aggregates_resolved_hands() {
    let hands = 6;
    let evaluation = Evaluator::<Poker>::new(kuhn(), Config::default(), hands)
        .with_iterations(200)
        .evaluate()
        .unwrap();
    assert_eq!(evaluation.hands, hands);
    // both seats act in every Kuhn hand
    assert!(evaluation.resolves >= hands);
    assert!(evaluation.defined > 0);
    assert!(evaluation.payoff.abs() <= 2.);
    assert!(evaluation.exploitability.is_finite());
    assert!(evaluation.exploitability > -1e-12);
}

