use reumacal_instruments::{compute, InstrumentCode, InstrumentInput};

fn numbers(pairs: &[(&str, f64)]) -> InstrumentInput {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

fn flags(code: InstrumentCode, set: &[&str]) -> InstrumentInput {
    let instrument = code.instrument();
    instrument
        .fields()
        .iter()
        .map(|field| (field.key.clone(), set.contains(&field.key.as_str())))
        .collect()
}

fn items(count: usize, value: f64) -> InstrumentInput {
    (1..=count).map(|i| (format!("q{i}"), value)).collect()
}

#[test]
fn basdai_uniform_answers_give_that_answer() {
    let input = items(6, 5.0);
    assert_eq!(compute(InstrumentCode::Basdai, &input).unwrap(), 5.0);

    let input = items(6, 3.0);
    assert_eq!(compute(InstrumentCode::Basdai, &input).unwrap(), 3.0);
}

#[test]
fn basdai_averages_stiffness_items_first() {
    let input = numbers(&[
        ("q1", 1.0),
        ("q2", 2.0),
        ("q3", 3.0),
        ("q4", 4.0),
        ("q5", 5.0),
        ("q6", 6.0),
    ]);
    // (1 + 2 + 3 + 4 + 5.5) / 5
    assert_eq!(compute(InstrumentCode::Basdai, &input).unwrap(), 3.1);
}

#[test]
fn asdas_crp_uses_published_coefficients() {
    let input = numbers(&[
        ("backPain", 4.0),
        ("duration", 4.0),
        ("peripheral", 4.0),
        ("global", 4.0),
        ("crp", 0.0),
    ]);
    assert_eq!(compute(InstrumentCode::AsdasCrp, &input).unwrap(), 1.23);

    let input = numbers(&[
        ("backPain", 6.0),
        ("duration", 5.0),
        ("peripheral", 4.0),
        ("global", 7.0),
        ("crp", 12.0),
    ]);
    assert_eq!(compute(InstrumentCode::AsdasCrp, &input).unwrap(), 3.23);
}

#[test]
fn asdas_esr_uses_published_coefficients() {
    let input = numbers(&[
        ("backPain", 5.0),
        ("duration", 5.0),
        ("peripheral", 5.0),
        ("global", 5.0),
        ("esr", 20.0),
    ]);
    assert_eq!(compute(InstrumentCode::AsdasEsr, &input).unwrap(), 2.76);

    let input = numbers(&[
        ("backPain", 6.0),
        ("duration", 5.0),
        ("peripheral", 4.0),
        ("global", 7.0),
        ("esr", 16.0),
    ]);
    assert_eq!(compute(InstrumentCode::AsdasEsr, &input).unwrap(), 2.84);
}

#[test]
fn asdas_ignores_the_other_lab_marker_and_extra_keys() {
    // Stored snapshots carry both markers plus the selected variant.
    let input = numbers(&[
        ("backPain", 4.0),
        ("duration", 4.0),
        ("peripheral", 4.0),
        ("global", 4.0),
        ("crp", 0.0),
        ("esr", 0.0),
    ])
    .with("variant", "CRP");
    assert_eq!(compute(InstrumentCode::AsdasCrp, &input).unwrap(), 1.23);
}

#[test]
fn dapsa_is_a_plain_sum() {
    let zero = numbers(&[("pain", 0.0), ("global", 0.0), ("tjc", 0.0), ("sjc", 0.0), ("crp", 0.0)]);
    assert_eq!(compute(InstrumentCode::Dapsa, &zero).unwrap(), 0.0);

    let input = numbers(&[("pain", 5.5), ("global", 4.2), ("tjc", 3.0), ("sjc", 2.0), ("crp", 1.3)]);
    assert_eq!(compute(InstrumentCode::Dapsa, &input).unwrap(), 16.0);
}

#[test]
fn das28_crp_baseline_is_the_constant_term() {
    let input = numbers(&[("tjc28", 0.0), ("sjc28", 0.0), ("global", 0.0), ("crp", 0.0)]);
    assert_eq!(compute(InstrumentCode::Das28Crp, &input).unwrap(), 0.96);
}

#[test]
fn das28_crp_scales_global_to_ten_points() {
    let input = numbers(&[("tjc28", 4.0), ("sjc28", 4.0), ("global", 50.0), ("crp", 5.0)]);
    assert_eq!(compute(InstrumentCode::Das28Crp, &input).unwrap(), 3.36);

    let input = numbers(&[("tjc28", 16.0), ("sjc28", 9.0), ("global", 80.0), ("crp", 30.0)]);
    assert_eq!(compute(InstrumentCode::Das28Crp, &input).unwrap(), 5.39);
}

#[test]
fn das28_esr_uses_log_of_esr() {
    let input = numbers(&[("tjc28", 4.0), ("sjc28", 4.0), ("global", 50.0), ("esr", 20.0)]);
    assert_eq!(compute(InstrumentCode::Das28Esr, &input).unwrap(), 4.48);

    let input = numbers(&[("tjc28", 0.0), ("sjc28", 0.0), ("global", 0.0), ("esr", 1.0)]);
    assert_eq!(compute(InstrumentCode::Das28Esr, &input).unwrap(), 0.0);
}

#[test]
fn sledai_sums_weights_of_present_findings() {
    let none = flags(InstrumentCode::Sledai, &[]);
    assert_eq!(compute(InstrumentCode::Sledai, &none).unwrap(), 0.0);

    let seizure = flags(InstrumentCode::Sledai, &["seizure"]);
    assert_eq!(compute(InstrumentCode::Sledai, &seizure).unwrap(), 8.0);

    let mixed = flags(
        InstrumentCode::Sledai,
        &["arthritis", "rash", "lowComplement", "fever"],
    );
    assert_eq!(compute(InstrumentCode::Sledai, &mixed).unwrap(), 9.0);
}

#[test]
fn sledai_all_findings_reach_the_table_maximum() {
    let instrument = InstrumentCode::Sledai.instrument();
    let keys: Vec<String> = instrument.fields().iter().map(|f| f.key.clone()).collect();
    let all: Vec<&str> = keys.iter().map(String::as_str).collect();
    let input = flags(InstrumentCode::Sledai, &all);
    assert_eq!(compute(InstrumentCode::Sledai, &input).unwrap(), 109.0);
    assert_eq!(instrument.max_score(), Some(109.0));
}

#[test]
fn ssdai_sums_organ_weights() {
    let input = flags(InstrumentCode::Ssdai, &["fever", "purpura", "renal"]);
    assert_eq!(compute(InstrumentCode::Ssdai, &input).unwrap(), 16.0);
    assert_eq!(InstrumentCode::Ssdai.instrument().max_score(), Some(71.0));
}

#[test]
fn counted_checklists_count_true_flags() {
    let six: Vec<String> = (1..=6).map(|i| format!("q{i}")).collect();
    let six: Vec<&str> = six.iter().map(String::as_str).collect();

    for code in [InstrumentCode::AsasHi, InstrumentCode::AsQol, InstrumentCode::PsaQol] {
        let input = flags(code, &six);
        assert_eq!(compute(code, &input).unwrap(), 6.0, "{code}");
    }

    assert_eq!(InstrumentCode::AsasHi.instrument().max_score(), Some(17.0));
    assert_eq!(InstrumentCode::AsQol.instrument().max_score(), Some(18.0));
    assert_eq!(InstrumentCode::PsaQol.instrument().max_score(), Some(20.0));
}

#[test]
fn lupus_pro_rescales_mean_to_hundred() {
    let instrument = InstrumentCode::LupusPro.instrument();
    let input: InstrumentInput = instrument
        .fields()
        .iter()
        .map(|f| (f.key.clone(), 2.0))
        .collect();
    assert_eq!(compute(InstrumentCode::LupusPro, &input).unwrap(), 50.0);

    let input: InstrumentInput = instrument
        .fields()
        .iter()
        .enumerate()
        .map(|(i, f)| (f.key.clone(), if i == 0 { 4.0 } else { 0.0 }))
        .collect();
    // 4 / 11 * 25
    assert_eq!(compute(InstrumentCode::LupusPro, &input).unwrap(), 9.09);
}

#[test]
fn facit_sums_all_27_items() {
    assert_eq!(compute(InstrumentCode::Facit, &items(27, 2.0)).unwrap(), 54.0);
    assert_eq!(compute(InstrumentCode::Facit, &items(27, 4.0)).unwrap(), 108.0);
    assert_eq!(compute(InstrumentCode::Facit, &items(27, 0.5)).unwrap(), 13.5);
}

#[test]
fn sf36_is_mean_of_dimensions() {
    let input = numbers(&[
        ("physicalFunctioning", 100.0),
        ("rolePhysical", 75.0),
        ("bodilyPain", 50.0),
        ("generalHealth", 25.0),
        ("vitality", 100.0),
        ("socialFunctioning", 75.0),
        ("roleEmotional", 50.0),
        ("mentalHealth", 35.0),
    ]);
    assert_eq!(compute(InstrumentCode::Sf36, &input).unwrap(), 63.75);
}

#[test]
fn basfi_is_mean_of_ten_items() {
    assert_eq!(compute(InstrumentCode::Basfi, &items(10, 6.5)).unwrap(), 6.5);

    let mut input = items(10, 0.0);
    input.insert("q1", 10.0);
    input.insert("q2", 3.5);
    assert_eq!(compute(InstrumentCode::Basfi, &input).unwrap(), 1.35);
}

#[test]
fn esspri_is_mean_of_three_domains() {
    let input = numbers(&[("dryness", 7.0), ("fatigue", 5.0), ("pain", 4.0)]);
    assert_eq!(compute(InstrumentCode::Esspri, &input).unwrap(), 5.33);
}

#[test]
fn numeric_text_from_forms_is_accepted() {
    let input: InstrumentInput = (1..=6).map(|i| (format!("q{i}"), " 5 ")).collect();
    assert_eq!(compute(InstrumentCode::Basdai, &input).unwrap(), 5.0);
}

#[test]
fn rounding_happens_once_after_the_formula() {
    // Unrounded 2.5433962..., a per-term rounding would give 2.55.
    let input = numbers(&[
        ("backPain", 5.0),
        ("duration", 5.0),
        ("peripheral", 5.0),
        ("global", 5.0),
        ("crp", 5.0),
    ]);
    assert_eq!(compute(InstrumentCode::AsdasCrp, &input).unwrap(), 2.54);
}

#[test]
fn compute_is_deterministic() {
    let input = numbers(&[("tjc28", 9.0), ("sjc28", 4.0), ("global", 60.0), ("esr", 40.0)]);
    let first = compute(InstrumentCode::Das28Esr, &input).unwrap();
    for _ in 0..100 {
        assert_eq!(compute(InstrumentCode::Das28Esr, &input).unwrap().to_bits(), first.to_bits());
    }
    assert_eq!(first, 5.66);
}
