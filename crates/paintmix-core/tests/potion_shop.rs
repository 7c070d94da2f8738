//! End-to-end rounds through the public API, as a host UI would drive them.

use paintmix_core::{
    check_match, hex_to_color, mix, Concentration, Difficulty, GameConfig, PaintColor,
    PaintMixError, RandomSource, Round, RoundState, SplitMix64, UserMix,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Always picks the last catalog color and the top of every range.
struct Greedy;

impl RandomSource for Greedy {
    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn gen_range(&mut self, _low: u32, high: u32) -> u32 {
        high
    }

    fn choose_index(&mut self, len: usize) -> usize {
        len - 1
    }
}

#[test]
fn test_mixing_page_defaults() {
    init_logging();
    let chosen = hex_to_color("#00b7ff").unwrap();
    let result = mix(chosen, 3, 1);
    assert_eq!(result.color.to_string(), "#40c9ff");
    assert_eq!(result.concentration, Concentration::Strong);
    assert_eq!(result.marker_percent(), 25);
}

#[test]
fn test_several_rounds() {
    init_logging();
    let config = GameConfig::default();
    let mut rng = SplitMix64::new(77);
    let mut round = Round::new(Difficulty::Medium);

    for attempt in 0..5 {
        let order = *round.accept_customer(&config, &mut rng).unwrap();
        round.begin_mixing().unwrap();
        for _ in 0..order.color_ratio {
            round.add_paint(order.color).unwrap();
        }
        // every other round, forget one unit of white
        let white = if attempt % 2 == 0 {
            order.white_ratio
        } else {
            order.white_ratio - 1
        };
        for _ in 0..white {
            round.add_paint(PaintColor::White).unwrap();
        }
        assert_eq!(round.submit().unwrap(), attempt % 2 == 0);
        round.next_customer().unwrap();
    }
    assert_eq!(round.state(), RoundState::Idle);
}

#[test]
fn test_greedy_source_hits_range_maximum() {
    init_logging();
    let config = GameConfig::default();
    let mut round = Round::new(Difficulty::High);
    let order = *round.accept_customer(&config, &mut Greedy).unwrap();
    assert_eq!(order.color, PaintColor::Purple);
    assert_eq!(order.color_ratio, 8);
    assert_eq!(order.white_ratio, 6);
}

#[test]
fn test_match_rule_is_strict() {
    let config = GameConfig::default();
    let mut round = Round::new(Difficulty::Low);
    let order = *round.accept_customer(&config, &mut SplitMix64::new(3)).unwrap();

    let mut user_mix = UserMix::new();
    user_mix.set(order.color, order.color_ratio);
    user_mix.set(PaintColor::White, order.white_ratio);
    assert!(check_match(&order, &user_mix));

    for other in PaintColor::NAMED.into_iter().filter(|&c| c != order.color) {
        let mut contaminated = user_mix.clone();
        contaminated.increment(other);
        assert!(!check_match(&order, &contaminated), "{other} should spoil the potion");
    }
}

#[test]
fn test_out_of_order_calls_are_errors() {
    let mut round = Round::default();
    assert!(matches!(
        round.begin_mixing(),
        Err(PaintMixError::InvalidTransition { from: RoundState::Idle, .. })
    ));
    assert!(round.next_customer().is_err());
}
