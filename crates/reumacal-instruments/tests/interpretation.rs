use reumacal_instruments::interpretation::{Bound, AMBER, DARK_RED, GREEN, LIME, RED};
use reumacal_instruments::{all_instruments, interpret, InstrumentCode, Tier};

fn tier(code: InstrumentCode, score: f64) -> Tier {
    interpret(code, score).tier
}

#[test]
fn basdai_threshold_is_strict() {
    assert_eq!(tier(InstrumentCode::Basdai, 3.99), Tier::Low);
    assert_eq!(tier(InstrumentCode::Basdai, 4.0), Tier::High);
}

#[test]
fn asdas_bands_share_cut_points_across_variants() {
    for code in [InstrumentCode::AsdasCrp, InstrumentCode::AsdasEsr] {
        assert_eq!(tier(code, 1.29), Tier::Inactive);
        assert_eq!(tier(code, 1.3), Tier::Low);
        assert_eq!(tier(code, 2.1), Tier::High);
        assert_eq!(tier(code, 3.49), Tier::High);
        assert_eq!(tier(code, 3.5), Tier::VeryHigh);
    }
    assert_eq!(interpret(InstrumentCode::AsdasCrp, 3.5).color, RED);
    assert_eq!(interpret(InstrumentCode::AsdasCrp, 2.54).label, "High disease activity");
}

#[test]
fn das28_mixes_strict_and_inclusive_bounds() {
    for code in [InstrumentCode::Das28Crp, InstrumentCode::Das28Esr] {
        assert_eq!(tier(code, 2.59), Tier::Remission);
        assert_eq!(tier(code, 2.6), Tier::Low);
        assert_eq!(tier(code, 3.2), Tier::Moderate);
        assert_eq!(tier(code, 5.1), Tier::Moderate);
        assert_eq!(tier(code, 5.11), Tier::High);
    }
}

#[test]
fn dapsa_bounds_are_inclusive() {
    assert_eq!(tier(InstrumentCode::Dapsa, 4.0), Tier::Remission);
    assert_eq!(tier(InstrumentCode::Dapsa, 4.01), Tier::Low);
    assert_eq!(tier(InstrumentCode::Dapsa, 14.0), Tier::Low);
    assert_eq!(tier(InstrumentCode::Dapsa, 28.0), Tier::Moderate);
    assert_eq!(tier(InstrumentCode::Dapsa, 28.01), Tier::High);
}

#[test]
fn sledai_zero_is_inactive_and_twenty_is_very_high() {
    assert_eq!(tier(InstrumentCode::Sledai, 0.0), Tier::Inactive);
    assert_eq!(tier(InstrumentCode::Sledai, 1.0), Tier::Mild);
    assert_eq!(tier(InstrumentCode::Sledai, 8.0), Tier::Moderate);
    assert_eq!(tier(InstrumentCode::Sledai, 19.0), Tier::High);

    let very_high = interpret(InstrumentCode::Sledai, 20.0);
    assert_eq!(very_high.tier, Tier::VeryHigh);
    assert_eq!(very_high.color, DARK_RED);
}

#[test]
fn quality_of_life_scales_run_in_both_directions() {
    // Higher is better.
    assert_eq!(tier(InstrumentCode::Sf36, 75.0), Tier::Excellent);
    assert_eq!(tier(InstrumentCode::Sf36, 24.99), Tier::Poor);
    assert_eq!(tier(InstrumentCode::Facit, 80.0), Tier::Excellent);
    assert_eq!(tier(InstrumentCode::Facit, 54.0), Tier::Moderate);

    // Lower is better.
    assert_eq!(tier(InstrumentCode::LupusPro, 25.0), Tier::Excellent);
    assert_eq!(tier(InstrumentCode::LupusPro, 75.01), Tier::Poor);
    assert_eq!(tier(InstrumentCode::AsQol, 6.0), Tier::Good);
    assert_eq!(tier(InstrumentCode::PsaQol, 15.0), Tier::Poor);
}

#[test]
fn checklist_indices_classify_counts() {
    assert_eq!(tier(InstrumentCode::AsasHi, 5.0), Tier::Low);
    assert_eq!(tier(InstrumentCode::AsasHi, 6.0), Tier::Moderate);
    assert_eq!(tier(InstrumentCode::AsasHi, 12.0), Tier::High);
    assert_eq!(tier(InstrumentCode::Ssdai, 0.0), Tier::Inactive);
    assert_eq!(tier(InstrumentCode::Ssdai, 13.0), Tier::Moderate);
    assert_eq!(tier(InstrumentCode::Ssdai, 14.0), Tier::High);
}

#[test]
fn basfi_and_esspri_use_strict_upper_bounds() {
    assert_eq!(tier(InstrumentCode::Basfi, 4.0), Tier::Moderate);
    assert_eq!(tier(InstrumentCode::Basfi, 7.0), Tier::Severe);
    assert_eq!(tier(InstrumentCode::Esspri, 4.99), Tier::Acceptable);
    assert_eq!(tier(InstrumentCode::Esspri, 5.0), Tier::Significant);
}

#[test]
fn every_score_lands_in_exactly_one_table_entry() {
    let samples = [-1.0, 0.0, 0.5, 1.3, 2.6, 4.0, 5.0, 13.5, 50.0, 108.0, 1e6];
    for instrument in all_instruments() {
        let table = instrument.bands();
        for score in samples {
            let first = table
                .iter()
                .find(|band| band.bound.admits(score))
                .expect("catch-all admits everything");
            let interpretation = instrument.interpret(score);
            assert_eq!(interpretation.label, first.label, "{} at {score}", instrument.name());
        }
        assert_eq!(table.otherwise.bound, Bound::Otherwise);
    }
}

#[test]
fn interpretation_is_stable_for_equal_scores() {
    for code in InstrumentCode::ALL {
        assert_eq!(interpret(code, 3.2), interpret(code, 3.2));
    }
}

#[test]
fn colors_come_from_the_shared_palette() {
    let palette = [GREEN, LIME, AMBER, RED, DARK_RED];
    for instrument in all_instruments() {
        for band in instrument.bands().iter() {
            assert!(palette.contains(&band.color), "{}: {}", instrument.name(), band.color);
        }
    }
}

#[test]
fn nan_falls_through_to_the_catch_all_band() {
    for instrument in all_instruments() {
        let table = instrument.bands();
        assert_eq!(instrument.interpret(f64::NAN).label, table.otherwise.label);
    }
}

#[test]
fn bands_serialize_with_operator_and_value() {
    let table = InstrumentCode::Das28Esr.instrument().bands().iter().copied().collect::<Vec<_>>();
    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(value[0]["bound"]["op"], "below");
    assert_eq!(value[0]["bound"]["value"], 2.6);
    assert_eq!(value[3]["bound"]["op"], "otherwise");
    assert_eq!(value[3]["color"], RED);
}
