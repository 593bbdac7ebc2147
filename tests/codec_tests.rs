use DistributionFactory::{
    codec::*,
    errors::DistError,
    factory::{AnyDistribution, create_distribution},
};
use serde::{Deserialize, Serialize};

fn same_bits(a: &[f64], b: &[f64]) -> bool {
    return a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits());
}

#[cfg(test)]
mod encode_tests {
    use super::*;

    #[test]
    fn test_encode_shape() {
        let normal: AnyDistribution = create_distribution("normal", &[0.0, 1.0]).unwrap();
        assert_eq!(encode(&normal), br#"{"type":"normal","params":[0.0,1.0]}"#.to_vec());

        let poisson: AnyDistribution = create_distribution("poisson", &[3.0]).unwrap();
        assert_eq!(encode_to_string(&poisson), r#"{"type":"poisson","params":[3.0]}"#);

        let uniform: AnyDistribution = create_distribution("uniform", &[-2.5, 10.0]).unwrap();
        assert_eq!(encode_to_string(&uniform), r#"{"type":"uniform","params":[-2.5,10.0]}"#);
    }

    #[test]
    fn test_encode_extreme_parameters() {
        let uniform: AnyDistribution = create_distribution("uniform", &[f64::MIN, f64::MAX]).unwrap();
        let bytes: Vec<u8> = encode(&uniform);
        assert!(!bytes.is_empty());
        assert_eq!(decode(&bytes), Ok(uniform.clone()));
        assert_eq!(encode_to_string(&uniform).as_bytes(), bytes.as_slice());

        let poisson: AnyDistribution = create_distribution("poisson", &[f64::MIN_POSITIVE]).unwrap();
        let text: String = encode_to_string(&poisson);
        assert!(text.starts_with(r#"{"type":"poisson","params":["#));
        assert_eq!(decode(text.as_bytes()), Ok(poisson));
    }

    #[test]
    fn test_record_from_distribution() {
        let normal: AnyDistribution = create_distribution("normal", &[1.5, 0.5]).unwrap();
        let record: TaggedRecord = TaggedRecord::from(&normal);
        assert_eq!(
            record,
            TaggedRecord {
                kind: "normal".to_string(),
                params: vec![1.5, 0.5],
            }
        );
        assert_eq!(AnyDistribution::try_from(record), Ok(normal));
    }
}

#[cfg(test)]
mod decode_tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        let dist: AnyDistribution = decode(br#"{"type":"uniform","params":[0,10]}"#).unwrap();
        assert_eq!(dist, create_distribution("uniform", &[0.0, 10.0]).unwrap());

        // whitespace and unknown keys are accepted
        let dist: AnyDistribution =
            decode(b"{ \"params\": [ 3 ], \"type\": \"poisson\", \"comment\": \"x\" }").unwrap();
        assert_eq!(dist, create_distribution("poisson", &[3.0]).unwrap());
    }

    #[test]
    fn test_malformed() {
        let inputs: [&[u8]; 7] = [
            b"not a record",
            b"",
            br#"{"type":"normal"}"#,
            br#"{"params":[0.0,1.0]}"#,
            br#"{"type":"normal","params":["a",1.0]}"#,
            br#"{"type":7,"params":[0.0,1.0]}"#,
            br#"{"type":"normal","params":null}"#,
        ];
        for input in inputs {
            assert!(
                matches!(decode(input), Err(DistError::MalformedRecord(_))),
                "{:?} should be malformed",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn test_factory_errors_are_propagated() {
        assert_eq!(
            decode(br#"{"type":"normal","params":[1.0]}"#),
            Err(DistError::ArityMismatch {
                kind: "normal",
                expected: 2,
                found: 1,
            })
        );
        assert_eq!(
            decode(br#"{"type":"gamma","params":[1.0]}"#),
            Err(DistError::UnknownDistributionType("gamma".to_string()))
        );
        assert_eq!(
            decode(br#"{"type":"Normal","params":[0.0,1.0]}"#),
            Err(DistError::UnknownDistributionType("Normal".to_string()))
        );
        assert!(matches!(
            decode(br#"{"type":"uniform","params":[5.0,5.0]}"#),
            Err(DistError::InvalidParameter { kind: "uniform", .. })
        ));
        assert!(matches!(
            decode(br#"{"type":"poisson","params":[-1]}"#),
            Err(DistError::InvalidParameter { kind: "poisson", .. })
        ));
    }
}

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_round_trip_is_exact() {
        let cases: [(&str, Vec<f64>); 8] = [
            ("normal", vec![0.0, 1.0]),
            ("normal", vec![0.1, 0.2]),
            ("normal", vec![-123_456.789, 1e-300]),
            ("normal", vec![f64::MAX, f64::MIN_POSITIVE]),
            ("poisson", vec![std::f64::consts::PI]),
            ("poisson", vec![5e-324]),
            ("uniform", vec![f64::MIN, f64::MAX]),
            ("uniform", vec![1.0 / 3.0, 2.0 / 3.0]),
        ];

        for (kind, params) in cases {
            let original: AnyDistribution = create_distribution(kind, &params).unwrap();
            let decoded: AnyDistribution = decode(&encode(&original)).unwrap();
            assert_eq!(decoded.kind(), original.kind());
            assert!(
                same_bits(&decoded.parameters(), &original.parameters()),
                "{kind} {params:?} did not round trip: {:?}",
                decoded.parameters()
            );
        }
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Scenario {
        name: String,
        arrivals: AnyDistribution,
    }

    #[test]
    fn test_embedded_in_document() {
        let text: &str = r#"{"name":"queue","arrivals":{"type":"poisson","params":[2.5]}}"#;
        let scenario: Scenario = serde_json::from_str(text).unwrap();
        assert_eq!(scenario.arrivals, create_distribution("poisson", &[2.5]).unwrap());
        assert_eq!(serde_json::to_string(&scenario).unwrap(), text);
    }

    #[test]
    fn test_embedded_validation() {
        let text: &str = r#"{"name":"queue","arrivals":{"type":"poisson","params":[0.0]}}"#;
        let error: serde_json::Error = serde_json::from_str::<Scenario>(text).unwrap_err();
        assert!(error.to_string().contains("lambda must be greater than 0"));
    }

    #[test]
    fn test_serialize_value() {
        let uniform: AnyDistribution = create_distribution("uniform", &[0.0, 10.0]).unwrap();
        assert_eq!(
            serde_json::to_value(&uniform).unwrap(),
            serde_json::json!({"type": "uniform", "params": [0.0, 10.0]})
        );
    }
}
