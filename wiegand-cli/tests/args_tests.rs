use clap::{error::ErrorKind, Parser};

use wiegand_cli::Cli;
use wiegand_core::{FieldSpec, FieldWidths, FrameSource, ParityMode, WiegandError};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["wiegand-tx"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn defaults_match_documented_values() {
    let cli = parse(&["--d0", "17", "--d1", "27"]);
    let cfg = cli.tx.to_config().unwrap();

    assert_eq!(cfg.chip, "gpiochip0");
    assert_eq!(cfg.parity, ParityMode::Standard);
    assert_eq!(cfg.timing.pulse_us, 50);
    assert_eq!(cfg.timing.space_us, 1000);
    assert_eq!(cfg.frame_bits, None);
    assert_eq!(cfg.source, FrameSource::Fields(FieldSpec::new(26, 0, 0)));
    assert!(!cli.dry_run);
}

#[test]
fn lines_are_required() {
    let err = Cli::try_parse_from(["wiegand-tx", "--d0", "17"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn unknown_parity_is_usage_error() {
    let err = Cli::try_parse_from(["wiegand-tx", "--d0", "1", "--d1", "2", "--parity", "mark"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn parity_names() {
    for (name, mode) in [
        ("std", ParityMode::Standard),
        ("none", ParityMode::None),
        ("whole-even", ParityMode::WholeEven),
        ("whole-odd", ParityMode::WholeOdd),
    ] {
        let cli = parse(&["--d0", "1", "--d1", "2", "--parity", name]);
        assert_eq!(cli.tx.parity, mode);
    }
}

#[test]
fn hex_field_values_and_width_override() {
    let cli = parse(&[
        "--d0", "1", "--d1", "2", "--format", "99", "--facility", "0xFF", "--card", "42",
        "--facility-bits", "12", "--card-bits", "20",
    ]);
    let cfg = cli.tx.to_config().unwrap();
    assert_eq!(
        cfg.source,
        FrameSource::Fields(FieldSpec::new(99, 255, 42).with_widths(FieldWidths::new(12, 20)))
    );
}

#[test]
fn partial_width_override_falls_back_to_preset() {
    let cli = parse(&["--d0", "1", "--d1", "2", "--facility-bits", "12"]);
    let cfg = cli.tx.to_config().unwrap();
    assert_eq!(cfg.source, FrameSource::Fields(FieldSpec::new(26, 0, 0)));
}

#[test]
fn raw_bits_replace_fields() {
    let cli = parse(&["--d0", "1", "--d1", "2", "--raw-bits", "1010_0101", "--facility", "7"]);
    let cfg = cli.tx.to_config().unwrap();
    assert_eq!(cfg.source, FrameSource::Raw("1010_0101".to_string()));
}

#[test]
fn config_validation_errors() {
    let same = parse(&["--d0", "5", "--d1", "5"]);
    assert_eq!(same.tx.to_config(), Err(WiegandError::SameLine(5)));

    let short_pulse = parse(&["--d0", "1", "--d1", "2", "--pulse-us", "10"]);
    assert!(matches!(
        short_pulse.tx.to_config(),
        Err(WiegandError::PulseOutOfRange { value: 10, .. })
    ));

    let short_space = parse(&["--d0", "1", "--d1", "2", "--pulse-us", "200", "--space-us", "100"]);
    assert!(matches!(
        short_space.tx.to_config(),
        Err(WiegandError::SpacingTooShort { .. })
    ));
}

#[test]
fn json_requires_dry_run() {
    assert!(Cli::try_parse_from(["wiegand-tx", "--d0", "1", "--d1", "2", "--json"]).is_err());
    let cli = parse(&["--d0", "1", "--d1", "2", "--dry-run", "--json"]);
    assert!(cli.json);
}
