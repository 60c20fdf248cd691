#[cfg(test)]
mod tests {
    use crate::models::{Car, Direction, FieldValue};
    use crate::service::comparison::compare;

    fn car(id: i32, model: &str) -> Car {
        Car {
            id,
            brand: Some("Toyota".to_string()),
            model: model.to_string(),
            production_from_year: Some(1998),
            to_year: None,
            body_style: Some("Coupe".to_string()),
            segment: Some("Sports".to_string()),
            cylinders: Some(6),
            displacement: Some(2997),
            power: Some(320),
            torque: Some(440),
            fuel_system: Some("Direct injection".to_string()),
            fuel: Some("Petrol".to_string()),
            fuel_capacity: Some(70.0),
            top_speed: Some(250),
            drive_type: Some("RWD".to_string()),
            title: None,
            description: None,
            engine_speed: None,
            image_url: None,
        }
    }

    #[test]
    fn same_id_is_correct() {
        let guess = car(1, "Supra");
        let target = car(1, "Supra");
        let report = compare(&guess, &target);
        assert!(report.is_correct);
        assert_eq!(report.message, "Congratulations! You guessed the correct car!");
    }

    #[test]
    fn same_model_and_year_with_different_id_is_correct() {
        // Regional trims share a model name and launch year but live
        // under distinct ids; the fallback treats them as the same car.
        let guess = car(1, "Supra");
        let target = car(2, "Supra");
        let report = compare(&guess, &target);
        assert!(report.is_correct);
        assert!(report.car_details.is_some());
    }

    #[test]
    fn model_match_is_case_insensitive() {
        let guess = car(1, "SUPRA");
        let target = car(2, "supra");
        assert!(compare(&guess, &target).is_correct);
    }

    #[test]
    fn same_model_and_year_but_different_brand_still_counts_as_correct() {
        // Brand is not part of the win condition. Two brands sharing a
        // model string and launch year are treated as the same car; kept
        // as-is because changing it would alter game semantics.
        let guess = car(1, "Supra");
        let mut target = car(2, "Supra");
        target.brand = Some("Pontiac".to_string());
        assert!(compare(&guess, &target).is_correct);
    }

    #[test]
    fn different_year_with_same_model_is_incorrect() {
        let guess = car(1, "Supra");
        let mut target = car(2, "Supra");
        target.production_from_year = Some(1993);
        let report = compare(&guess, &target);
        assert!(!report.is_correct);
        assert_eq!(report.message, "Not the correct car. Try again!");
        assert!(report.car_details.is_none());
    }

    #[test]
    fn car_details_absent_unless_correct() {
        let guess = car(1, "Supra");
        let target = car(2, "Celica");
        let report = compare(&guess, &target);
        assert!(!report.is_correct);
        assert!(report.car_details.is_none());

        let report = compare(&guess, &car(1, "Supra"));
        let details = report.car_details.expect("correct guess carries details");
        assert_eq!(details.model, "Supra");
        assert_eq!(details.brand.as_deref(), Some("Toyota"));
        assert_eq!(details.production_from_year, Some(1998));
    }

    #[test]
    fn cylinders_within_threshold_is_close_with_direction() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.cylinders = Some(4);
        target.cylinders = Some(6);

        let report = compare(&guess, &target);
        let field = report.similarities.unwrap().cylinders;
        assert!(!field.is_match);
        assert_eq!(field.is_close, Some(true)); // diff 2 == threshold 2
        assert_eq!(field.direction, Some(Direction::Higher));
        assert_eq!(field.value, FieldValue::Int(4));
    }

    #[test]
    fn top_speed_outside_threshold_is_not_close_but_keeps_direction() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.top_speed = Some(100);
        target.top_speed = Some(250);

        let field = compare(&guess, &target).similarities.unwrap().top_speed;
        assert!(!field.is_match);
        assert_eq!(field.is_close, Some(false)); // diff 150 > threshold 20
        assert_eq!(field.direction, Some(Direction::Higher));
    }

    #[test]
    fn direction_is_lower_when_guess_exceeds_target() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.power = Some(400);
        target.power = Some(320);

        let field = compare(&guess, &target).similarities.unwrap().power;
        assert_eq!(field.direction, Some(Direction::Lower));
        assert_eq!(field.is_close, Some(false)); // diff 80 > threshold 50
    }

    #[test]
    fn equal_numeric_values_match_without_direction() {
        let guess = car(1, "Supra");
        let target = car(2, "Celica");

        let sims = compare(&guess, &target).similarities.unwrap();
        assert!(sims.cylinders.is_match);
        assert_eq!(sims.cylinders.is_close, Some(true));
        assert_eq!(sims.cylinders.direction, None);
    }

    #[test]
    fn year_threshold_is_five() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.production_from_year = Some(1998);
        target.production_from_year = Some(2003);

        let field = compare(&guess, &target)
            .similarities
            .unwrap()
            .production_from_year;
        assert_eq!(field.is_close, Some(true));
        assert_eq!(field.direction, Some(Direction::Higher));

        target.production_from_year = Some(2004);
        let field = compare(&guess, &target)
            .similarities
            .unwrap()
            .production_from_year;
        assert_eq!(field.is_close, Some(false));
    }

    #[test]
    fn fuel_capacity_uses_decimal_threshold() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.fuel_capacity = Some(60.5);
        target.fuel_capacity = Some(70.0);

        let field = compare(&guess, &target).similarities.unwrap().fuel_capacity;
        assert_eq!(field.is_close, Some(true)); // diff 9.5 <= 10
        assert_eq!(field.direction, Some(Direction::Higher));
        assert_eq!(field.value, FieldValue::Float(60.5));
    }

    #[test]
    fn missing_numeric_on_guess_side_reports_unknown() {
        let mut guess = car(1, "Supra");
        let target = car(2, "Celica");
        guess.displacement = None;

        let field = compare(&guess, &target).similarities.unwrap().displacement;
        assert_eq!(field.value, FieldValue::Text("Unknown".to_string()));
        assert!(!field.is_match);
        assert_eq!(field.is_close, Some(false));
        assert_eq!(field.direction, None);
    }

    #[test]
    fn missing_numeric_on_target_side_disables_closeness_and_direction() {
        let guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        target.torque = None;

        let field = compare(&guess, &target).similarities.unwrap().torque;
        assert_eq!(field.value, FieldValue::Int(440));
        assert!(!field.is_match);
        assert_eq!(field.is_close, Some(false));
        assert_eq!(field.direction, None);
    }

    #[test]
    fn categorical_fields_default_to_unknown() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.drive_type = None;
        target.drive_type = None;

        let sims = compare(&guess, &target).similarities.unwrap();
        assert_eq!(sims.drive_type.value, FieldValue::Text("Unknown".to_string()));
        // Both sides unknown compare equal, same as the stored data.
        assert!(sims.drive_type.is_match);
        assert_eq!(sims.drive_type.is_close, None);
        assert_eq!(sims.drive_type.direction, None);
    }

    #[test]
    fn categorical_comparison_is_case_sensitive() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.fuel = Some("petrol".to_string());
        target.fuel = Some("Petrol".to_string());

        let sims = compare(&guess, &target).similarities.unwrap();
        assert!(!sims.fuel.is_match);
    }

    #[test]
    fn incorrect_guess_still_carries_similarities() {
        let guess = car(1, "Supra");
        let target = car(2, "Celica");
        let report = compare(&guess, &target);
        assert!(!report.is_correct);
        let sims = report.similarities.expect("similarities always present");
        assert!(sims.brand.is_match);
    }

    #[test]
    fn report_serializes_with_wire_field_names() {
        let guess = car(1, "Supra");
        let target = car(2, "Celica");
        let json = serde_json::to_value(compare(&guess, &target)).unwrap();

        assert_eq!(json["isCorrect"], serde_json::json!(false));
        assert_eq!(json["carDetails"], serde_json::Value::Null);
        let sims = &json["similarities"];
        assert_eq!(sims["brand"]["isMatch"], serde_json::json!(true));
        assert_eq!(sims["production_from_year"]["value"], serde_json::json!(1998));
        assert_eq!(sims["brand"]["direction"], serde_json::Value::Null);
    }

    #[test]
    fn direction_serializes_lowercase() {
        let mut guess = car(1, "Supra");
        let mut target = car(2, "Celica");
        guess.power = Some(100);
        target.power = Some(320);

        let json = serde_json::to_value(compare(&guess, &target)).unwrap();
        assert_eq!(
            json["similarities"]["power"]["direction"],
            serde_json::json!("higher")
        );
    }
}
