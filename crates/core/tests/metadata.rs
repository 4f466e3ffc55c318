//! Metadata header checks.

mod common;

use aff_toolchain_core::chart::Chart;
use aff_toolchain_core::{Severity, codes};
use common::*;

fn chart_with_metadata(entries: &[(&str, &str)]) -> Chart {
    Chart {
        metadata: metadata(entries),
        items: vec![timing(0, 120.0, 4.0)],
    }
}

#[test]
fn unknown_keys_warn_and_are_ignored() {
    let chart = chart_with_metadata(&[("AudioOffset", "0"), ("Creator", "somebody")]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::UNKNOWN_METADATA_KEY), 1);
    let diag = find_code(&result.issues, codes::UNKNOWN_METADATA_KEY).unwrap();
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.message.en.contains("\"Creator\""));
}

#[test]
fn missing_audio_offset_warns_at_the_metadata_end() {
    let chart = chart_with_metadata(&[]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::AUDIO_OFFSET_MISSING), 1);
    let diag = find_code(&result.issues, codes::AUDIO_OFFSET_MISSING).unwrap();
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.span, chart.metadata.end_span);
}

#[test]
fn audio_offset_must_be_an_int_literal() {
    for bad in ["1.5", "007", "abc", "", "+3", "12a"] {
        let chart = chart_with_metadata(&[("AudioOffset", bad)]);
        let result = run(&chart);
        assert_eq!(
            count_code(&result.issues, codes::AUDIO_OFFSET_NOT_INT),
            1,
            "'{bad}' should not pass the int-literal pattern"
        );
    }
    for good in ["0", "-120", "248"] {
        let chart = chart_with_metadata(&[("AudioOffset", good)]);
        let result = run(&chart);
        assert_eq!(
            count_code(&result.issues, codes::AUDIO_OFFSET_NOT_INT),
            0,
            "'{good}' should pass the int-literal pattern"
        );
    }
}

#[test]
fn density_factor_must_parse_as_a_float() {
    for bad in ["abc", "", "NaN", "1.5x"] {
        let chart = chart_with_metadata(&[
            ("AudioOffset", "0"),
            ("TimingPointDensityFactor", bad),
        ]);
        let result = run(&chart);
        assert_eq!(
            count_code(&result.issues, codes::DENSITY_FACTOR_NOT_FLOAT),
            1,
            "'{bad}' should not parse as a float"
        );
    }
}

#[test]
fn density_factor_must_be_positive() {
    for bad in ["0", "-1.5", "0.0"] {
        let chart = chart_with_metadata(&[
            ("AudioOffset", "0"),
            ("TimingPointDensityFactor", bad),
        ]);
        let result = run(&chart);
        assert_eq!(
            count_code(&result.issues, codes::DENSITY_FACTOR_NOT_POSITIVE),
            1,
            "'{bad}' should be rejected as non-positive"
        );
    }

    let chart = chart_with_metadata(&[("AudioOffset", "0"), ("TimingPointDensityFactor", "1.5")]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::DENSITY_FACTOR_NOT_FLOAT), 0);
    assert_eq!(
        count_code(&result.issues, codes::DENSITY_FACTOR_NOT_POSITIVE),
        0
    );
}

#[test]
fn density_factor_is_optional() {
    let chart = chart_with_metadata(&[("AudioOffset", "0")]);
    let result = run(&chart);
    assert_eq!(count_code(&result.issues, codes::DENSITY_FACTOR_NOT_FLOAT), 0);
    assert_eq!(
        count_code(&result.issues, codes::DENSITY_FACTOR_NOT_POSITIVE),
        0
    );
}
