//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use carattrs_core::{
    assemble, assemble_json, fingerprint, run_self_check,
    AssemblyError, AttributeKind, BodyStyle, Car, CarBody, CarRequest, DoorCount, Engine,
    EnginePower, FuelKind, RubberKind, Wheel, WheelDiameter, WHEELS_PER_CAR,
};

#[test]
fn invariant_power_range() {
    for p in [1.0, 2.5, 100.0, 150.0, 200.0] {
        assert!(EnginePower::new(p).is_ok(), "{} should be accepted", p);
    }
    for p in [0.0, 0.99, 200.01, 201.0, -5.0, f64::NAN] {
        let err = EnginePower::new(p).unwrap_err();
        assert_eq!(err.attribute, AttributeKind::MaxPower);
    }
}

#[test]
fn invariant_door_range() {
    for d in 2..=5 {
        assert_eq!(DoorCount::new(d).unwrap().value() as i64, d);
    }
    for d in [i64::MIN, -1, 0, 1, 6, 255, 256, i64::MAX] {
        let err = DoorCount::new(d).unwrap_err();
        assert_eq!(err.attribute, AttributeKind::DoorCount);
    }
}

#[test]
fn invariant_diameter_range() {
    for w in [33.0, 38.0, 40.5, 45.0] {
        assert!(WheelDiameter::new(w).is_ok());
    }
    for w in [32.0, 32.999, 45.001, 46.0] {
        assert!(WheelDiameter::new(w).is_err());
    }
}

#[test]
fn invariant_body_style_is_case_and_space_insensitive() {
    let a: BodyStyle = "  ХЕТЧБЭК ".parse().unwrap();
    let b: BodyStyle = "хетчбэк".parse().unwrap();
    assert_eq!(a, b);

    assert!("спортивный".parse::<BodyStyle>().is_err());
}

#[test]
fn invariant_rubber_kind_is_exact() {
    assert_eq!("картинговая".parse::<RubberKind>().unwrap(), RubberKind::Karting);
    assert!("с высоким сцеплением".parse::<RubberKind>().is_err());
    assert!("ЛЕТНЯЯ".parse::<RubberKind>().is_err());
}

#[test]
fn invariant_descriptions() {
    let engine = Engine::new(EnginePower::new(150.0).unwrap(), FuelKind::Diesel);
    let text = engine.to_string();
    assert!(text.contains("150"));
    assert!(text.contains(FuelKind::Diesel.label()));

    let body = CarBody::new("хетчбэк".parse().unwrap(), DoorCount::new(4).unwrap());
    let text = body.to_string();
    assert!(text.contains("хетчбэк"));
    assert!(text.contains('4'));

    let wheel = Wheel::new(WheelDiameter::new(45.0).unwrap(), "летняя".parse().unwrap());
    let text = wheel.to_string();
    assert_eq!(text.lines().count(), WHEELS_PER_CAR);
    for line in text.lines() {
        assert!(line.contains("45"));
        assert!(line.contains("летняя"));
    }
}

#[test]
fn invariant_failed_assembly_yields_no_car() {
    let mut request = CarRequest::default();
    request.wheel.diameter = 50.0;

    let result: Result<Car, _> = assemble(&request);
    let err = result.unwrap_err();
    assert_eq!(err.attribute, AttributeKind::WheelDiameter);
    assert_eq!(err.rejected, "50");
    assert_eq!(err.to_string(), "Неверный диаметр колеса.");
}

#[test]
fn invariant_serialized_car_revalidates() {
    let car = assemble(&CarRequest::default()).unwrap();
    let json = serde_json::to_string(&car).unwrap();
    let back: Car = serde_json::from_str(&json).unwrap();
    assert_eq!(car, back);

    let tampered = json.replace("\"doors\":4", "\"doors\":7");
    assert_ne!(tampered, json);
    assert!(serde_json::from_str::<Car>(&tampered).is_err());
}

#[test]
fn invariant_fingerprint_ignores_key_order() {
    let a = r#"{
        "engine": {"max_power": 150, "fuel": "diesel"},
        "body": {"style": "хетчбэк", "doors": 4},
        "wheel": {"diameter": 45, "rubber": "летняя"}
    }"#;
    let b = r#"{
        "wheel": {"rubber": "летняя", "diameter": 45},
        "body": {"doors": 4, "style": "  Хетчбэк"},
        "engine": {"fuel": "Дизель", "max_power": 150.0}
    }"#;

    let car_a = assemble_json(a).unwrap();
    let car_b = assemble_json(b).unwrap();
    assert_eq!(fingerprint(&car_a), fingerprint(&car_b));
}

#[test]
fn invariant_payload_errors_are_distinct() {
    let err = assemble_json("not json").unwrap_err();
    assert!(matches!(err, AssemblyError::Payload(_)));

    let err = assemble_json(
        r#"{"engine": {"max_power": 100, "fuel": "petrol"},
            "body": {"style": "купе", "doors": 1},
            "wheel": {"diameter": 40, "rubber": "эко"}}"#,
    )
    .unwrap_err();
    match err {
        AssemblyError::Validation(e) => assert_eq!(e.attribute, AttributeKind::DoorCount),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn invariant_self_check_passes() {
    let report = run_self_check();
    assert!(report.passed, "{}", report);
    assert!(report.total > 0);
}
