/*!
 * Tests for event, style and subtitle validation
 */

use assgen::validation::{is_valid_abgr, is_valid_timestamp};
use assgen::{ColorField, Event, FlagField, Style, Subtitle, ValidationError};
use crate::common;

/// Every minute/second pair in range is accepted
#[test]
fn test_eventValidate_withAllInRangeMinutesAndSeconds_shouldPass() {
    for hour in 0..10 {
        for minsec in (0..60).step_by(7) {
            let ts = format!("{}:{:02}:{:02}:{:02}", hour, minsec, 59 - minsec, minsec);
            let event = Event::new(&ts, &ts, "Default", "x");
            assert!(event.validate().is_ok(), "expected {} to be valid", ts);
        }
    }
}

#[test]
fn test_eventValidate_withMalformedShapes_shouldFail() {
    for ts in ["", "0:00:01", "10:00:00:00", "0:00:01:000", "0-00-01-00", "0:61:00:00"] {
        let event = Event::new(ts, "0:00:04:00", "Default", "x");
        assert_eq!(
            event.validate(),
            Err(ValidationError::InvalidStartTime(ts.to_string())),
            "start {:?}",
            ts
        );
    }
}

#[test]
fn test_eventValidate_shouldNotCheckStyleReference() {
    let event = Event::new("0:00:01:00", "0:00:02:00", "DoesNotExist", "x");
    assert!(event.validate().is_ok());
}

#[test]
fn test_isValidAbgr_withEveryHexDigit_shouldPass() {
    let digits = "0123456789abcdefABCDEF";
    for c in digits.chars() {
        let color: String = std::iter::repeat(c).take(8).collect();
        assert!(is_valid_abgr(&color), "expected {} to be valid", color);
    }
}

#[test]
fn test_styleValidate_withEachColorInvalid_shouldNameThatColor() {
    let cases = [
        (ColorField::Primary, Style { primary_color: "12345".to_string(), ..common::create_default_style() }),
        (ColorField::Secondary, Style { second_color: "1234567890".to_string(), ..common::create_default_style() }),
        (ColorField::Outline, Style { outline_color: "zzzzzzzz".to_string(), ..common::create_default_style() }),
        (ColorField::Back, Style { back_color: "&H000000".to_string(), ..common::create_default_style() }),
    ];

    for (expected_field, style) in cases {
        match style.validate() {
            Err(ValidationError::InvalidColor { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected color error for {}, got {:?}", expected_field, other),
        }
    }
}

#[test]
fn test_styleValidate_withEachFlagInvalid_shouldNameThatFlag() {
    let cases = [
        (FlagField::Bold, Style { bold: 1, ..common::create_default_style() }),
        (FlagField::Italic, Style { italic: -2, ..common::create_default_style() }),
        (FlagField::Underline, Style { underline: 42, ..common::create_default_style() }),
        (FlagField::StrikeOut, Style { strike_out: 1, ..common::create_default_style() }),
    ];

    for (expected_field, style) in cases {
        match style.validate() {
            Err(ValidationError::InvalidFlag { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected flag error for {}, got {:?}", expected_field, other),
        }
    }
}

#[test]
fn test_subtitleValidate_withSampleDocument_shouldPass() {
    assert!(common::create_sample_subtitle().validate().is_ok());
}

#[test]
fn test_subtitleValidate_withNegativeTimer_shouldFailBeforeStyles() {
    let mut sub = common::create_sample_subtitle();
    sub.timer = -0.01;
    sub.styles.push(None);
    assert!(matches!(sub.validate(), Err(ValidationError::InvalidTimer(_))));
}

#[test]
fn test_subtitleValidate_withTwoBadEvents_shouldReportFirst() {
    let mut sub = common::create_sample_subtitle();
    sub.push_event(Event::new("0:00:05:00", "nope", "Default", "a"));
    sub.push_event(Event::new("late", "0:00:09:00", "Default", "b"));

    assert_eq!(
        sub.validate(),
        Err(ValidationError::InvalidEndTime("nope".to_string()))
    );
}

#[test]
fn test_subtitleValidate_withDuplicateStyleNames_shouldPass() {
    let mut sub = common::create_sample_subtitle();
    sub.push_style(common::create_default_style());
    assert!(sub.validate().is_ok());
}

#[test]
fn test_isValidTimestamp_withNinetyNineMinutes_shouldFail() {
    assert!(!is_valid_timestamp("9:99:00:00"));
}

#[test]
fn test_subtitleValidate_withNullEventFromJson_shouldFail() {
    let sub = Subtitle::from_json_str(r#"{"events":[null]}"#).unwrap();
    assert_eq!(sub.validate(), Err(ValidationError::MissingEvent { index: 0 }));
}

#[test]
fn test_eventValidate_withNonAsciiDigits_shouldFail() {
    let start = "\u{0663}:00:01:\u{0967}\u{0968}";
    let event = Event::new(start, "0:00:04:00", "Default", "x");
    assert_eq!(
        event.validate(),
        Err(ValidationError::InvalidStartTime(start.to_string()))
    );

    let mut sink = Vec::new();
    let mut sub = common::create_sample_subtitle();
    sub.push_event(event);
    assert!(assgen::export(&sub, &mut sink).is_err());
    assert!(sink.is_empty());
}
