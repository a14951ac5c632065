//! Serde roundtrip and JsonSchema validation tests for the public data types.

use schemars::schema_for;
use salecast_core::{Dataset, Prediction, PredictionBatch, SalesRecord, UserId, YearMonth};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    sales_record_roundtrip,
    SalesRecord,
    SalesRecord {
        year: 2023,
        month: 7,
        sales: 1234.5,
    }
);

roundtrip_and_validate!(
    year_month_roundtrip,
    YearMonth,
    YearMonth::new(2024, 2).unwrap()
);

roundtrip_and_validate!(
    prediction_roundtrip,
    Prediction,
    Prediction {
        year: 2024,
        month: 3,
        sales: -12,
    }
);

roundtrip_and_validate!(
    prediction_batch_roundtrip,
    PredictionBatch,
    PredictionBatch {
        last_observed: YearMonth::new(2023, 2).unwrap(),
        horizon_years: 1,
        predictions: vec![
            Prediction {
                year: 2023,
                month: 3,
                sales: 175,
            },
            Prediction {
                year: 2023,
                month: 4,
                sales: 200,
            },
        ],
    }
);

roundtrip_and_validate!(user_id_roundtrip, UserId, UserId::new("17").unwrap());

#[test]
fn dataset_serializes_against_schema() {
    let ds = Dataset::from_records(vec![
        SalesRecord {
            year: 2023,
            month: 1,
            sales: 100.0,
        },
        SalesRecord {
            year: 2023,
            month: 2,
            sales: 150.0,
        },
    ])
    .unwrap();

    let schema = serde_json::to_value(schema_for!(Dataset)).unwrap();
    let instance = serde_json::to_value(&ds).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "{errors:?}");
}
