//! Field value integration tests
//!
//! Test Categories:
//! - Category 1: Kind names
//! - Category 2: Display text
//! - Category 3: Validating records

use proptest::prelude::*;
use rstest::*;
use tessera_model::{
	FieldKind, FieldMeta, FieldValue, MODEL_TAG, Model, Record, ValidationError, validate,
};

// ============================================================================
// Category 1: Kind names
// ============================================================================

#[rstest]
#[case(FieldKind::MultipleChoice, "\"multiple_choice\"")]
#[case(FieldKind::DateTime, "\"date_time\"")]
#[case(FieldKind::Int, "\"int\"")]
fn test_kind_serde_names(#[case] kind: FieldKind, #[case] json: &str) {
	assert_eq!(serde_json::to_string(&kind).unwrap(), json);
	assert_eq!(serde_json::from_str::<FieldKind>(json).unwrap(), kind);
}

#[rstest]
fn test_unknown_kind_name_is_rejected() {
	assert!(serde_json::from_str::<FieldKind>("\"money\"").is_err());
}

// ============================================================================
// Category 2: Display text
// ============================================================================

proptest! {
	#[test]
	fn prop_float_display_round_trips(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
		let shown = FieldValue::Float(f).display();
		prop_assert_eq!(shown.parse::<f64>().unwrap(), f);
	}

	#[test]
	fn prop_int_display_is_decimal(i in any::<i64>()) {
		prop_assert_eq!(FieldValue::Int(i).display(), i.to_string());
	}
}

// ============================================================================
// Category 3: Validating records
// ============================================================================

#[fixture]
fn signup() -> Record {
	Record::new()
		.with_field(
			FieldMeta::new("user", FieldValue::String(String::new()))
				.with_tags(MODEL_TAG, "required|maxlen=8"),
		)
		.with_field(
			FieldMeta::new("email", FieldValue::Email(String::new()))
				.with_tags(MODEL_TAG, "required"),
		)
		.with_field(FieldMeta::new("born", FieldValue::Date(String::new())))
}

fn failures(record: &Record) -> Vec<(String, ValidationError)> {
	record
		.fields()
		.into_iter()
		.filter_map(|field| validate(&field).err().map(|err| (field.selector, err)))
		.collect()
}

#[rstest]
fn test_empty_record_reports_required_fields(signup: Record) {
	let failed = failures(&signup);
	assert_eq!(
		failed,
		vec![
			("user".to_string(), ValidationError::Required),
			("email".to_string(), ValidationError::Required),
		]
	);
}

#[rstest]
fn test_filled_record_validates(mut signup: Record) {
	signup.set_field("user", FieldValue::String("ada".to_string())).unwrap();
	signup
		.set_field("email", FieldValue::Email("ada@example.com".to_string()))
		.unwrap();
	signup.set_field("born", FieldValue::Date("1815-12-10".to_string())).unwrap();

	assert!(failures(&signup).is_empty());
}

#[rstest]
fn test_bad_values_are_reported_per_field(mut signup: Record) {
	signup
		.set_field("user", FieldValue::String("augusta_ada".to_string()))
		.unwrap();
	signup.set_field("email", FieldValue::Email("ada".to_string())).unwrap();
	signup.set_field("born", FieldValue::Date("10.12.1815".to_string())).unwrap();

	let failed = failures(&signup);
	assert_eq!(failed.len(), 3);
	assert_eq!(failed[0].1, ValidationError::TooLong { max: 8, actual: 11 });
	assert_eq!(failed[1].1, ValidationError::InvalidEmail("ada".to_string()));
	assert!(matches!(
		&failed[2].1,
		ValidationError::InvalidDate { hint, .. } if *hint == "YYYY-MM-DD"
	));
}
