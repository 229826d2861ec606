//! Currency conversion and display formatting.

use jreit_sdk::currency::{
    format_cap_rate, format_currency_amount, format_occupancy_rate, format_percentage,
    format_percentage_change, input_to_yen, million_yen_to_yen, parse_currency_string,
    percentage_change, yen_to_hundred_million_yen, yen_to_million_yen, CurrencyAmounts,
    CurrencyFormat, CurrencyUnit,
};

fn format_in(unit: CurrencyUnit) -> CurrencyFormat {
    CurrencyFormat {
        unit,
        ..CurrencyFormat::default()
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

#[test]
fn converts_between_units() {
    assert_eq!(yen_to_million_yen(15_000_000.0), 15.0);
    assert_eq!(yen_to_hundred_million_yen(250_000_000.0), 2.5);
    assert_eq!(million_yen_to_yen(1.5), 1_500_000.0);

    let amounts = CurrencyAmounts::from_yen(1_000_000_000.0);
    assert_eq!(amounts.million_yen, 1_000.0);
    assert_eq!(amounts.hundred_million_yen, 10.0);
}

#[test]
fn input_in_unit_to_yen() {
    assert_eq!(input_to_yen("1,500", CurrencyUnit::Million), 1_500_000_000.0);
    assert_eq!(input_to_yen("2.5億円", CurrencyUnit::HundredMillion), 250_000_000.0);
    assert_eq!(input_to_yen("800", CurrencyUnit::Yen), 800.0);
    assert_eq!(input_to_yen("none", CurrencyUnit::Million), 0.0);
}

// ---------------------------------------------------------------------------
// Amount formatting
// ---------------------------------------------------------------------------

#[test]
fn auto_unit_picks_by_size() {
    let auto = CurrencyFormat::default();
    assert_eq!(format_currency_amount(3_200_000_000.0, &auto), "32億円");
    assert_eq!(format_currency_amount(15_000_000.0, &auto), "15百万円");
    assert_eq!(format_currency_amount(9_999.0, &auto), "9,999円");
}

#[test]
fn explicit_units_group_thousands_and_trim_zeros() {
    assert_eq!(
        format_currency_amount(123_456_700_000.0, &format_in(CurrencyUnit::Million)),
        "123,456.7百万円"
    );
    assert_eq!(
        format_currency_amount(125_000_000.0, &format_in(CurrencyUnit::HundredMillion)),
        "1.25億円"
    );
}

#[test]
fn compact_and_unitless_formats() {
    let compact = CurrencyFormat {
        compact: true,
        ..CurrencyFormat::default()
    };
    assert_eq!(format_currency_amount(3_200_000_000.0, &compact), "32億");

    let bare = CurrencyFormat {
        include_unit: false,
        ..format_in(CurrencyUnit::Million)
    };
    assert_eq!(format_currency_amount(15_000_000.0, &bare), "15");
}

#[test]
fn formatted_amount_parses_back() {
    let text = format_currency_amount(123_456_700_000.0, &format_in(CurrencyUnit::Million));
    assert_eq!(parse_currency_string(&text), 123_456.7);
    assert_eq!(parse_currency_string(""), 0.0);
}

// ---------------------------------------------------------------------------
// Percentages
// ---------------------------------------------------------------------------

#[test]
fn percentage_formats() {
    assert_eq!(format_percentage(4.5, 2, true), "4.50%");
    assert_eq!(format_percentage(4.5, 1, false), "4.5");
    assert_eq!(format_cap_rate("4.5"), "4.50%");
    assert_eq!(format_occupancy_rate("95"), "95.0%");
}

#[test]
fn percentage_change_handles_zero_base() {
    assert_eq!(percentage_change(0.0, 0.0), 0.0);
    assert_eq!(percentage_change(0.0, 5.0), 100.0);
    assert_eq!(percentage_change(4.0, 5.0), 25.0);
    assert_eq!(percentage_change(5.0, 4.0), -20.0);
}

#[test]
fn percentage_change_is_signed() {
    assert_eq!(format_percentage_change(12.5, 1), "+12.5%");
    assert_eq!(format_percentage_change(-3.0, 1), "-3.0%");
    assert_eq!(format_percentage_change(0.0, 2), "0.00%");
}
