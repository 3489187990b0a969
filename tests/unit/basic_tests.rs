/// Basic unit tests to verify core functionality
use animal_registry::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn rex() -> Animal {
        Animal::mammal(Traits::new("Rex", 4, "forest", "predator", "brown", 12.0), true)
            .expect("valid mammal")
    }

    #[test]
    fn test_every_variant_describes_all_fields() {
        let traits = Traits::new("Nemo", 1, "reef", "omnivore", "orange", 0.25);
        let animals = vec![
            Animal::mammal(traits.clone(), false).unwrap(),
            Animal::bird(traits.clone(), 0.75).unwrap(),
            Animal::fish(traits.clone(), "salt").unwrap(),
            Animal::reptile(traits.clone(), true).unwrap(),
            Animal::amphibian(traits, "slimy").unwrap(),
        ];
        let extras = [
            "Has Fur: no",
            "Wingspan: 0.75 m",
            "Water Type: salt",
            "Venomous: yes",
            "Skin Moisture: slimy",
        ];

        for (animal, extra) in animals.iter().zip(extras) {
            let text = animal.describe();
            assert!(text.starts_with(&format!("Type: {}, ", animal.type_name())));
            for field in [
                "Name: Nemo",
                "Age: 1",
                "Habitat: reef",
                "Diet: omnivore",
                "Color: orange",
                "Weight: 0.25 kg",
                extra,
            ] {
                assert!(text.contains(field), "{text:?} is missing {field:?}");
            }
        }
    }

    #[test]
    fn test_type_names() {
        let names: Vec<&str> = AnimalKind::ALL.iter().map(|kind| kind.type_name()).collect();
        assert_eq!(names, vec!["Mammal", "Bird", "Fish", "Reptile", "Amphibian"]);
    }

    #[test]
    fn test_registry_end_to_end() {
        let mut registry = MemoryRegistry::new();
        registry.add(rex());

        let listed: Vec<String> = list_animals(&registry).lines();
        assert_eq!(
            listed,
            vec![
                "[0] Type: Mammal, Name: Rex, Age: 4, Habitat: forest, Diet: predator, \
                 Color: brown, Weight: 12 kg, Has Fur: yes"
                    .to_string()
            ]
        );

        assert_eq!(registry.find_by_name("Rex"), Some(&rex()));
        assert!(registry.find_by_name("Max").is_none());
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let mut registry = MemoryRegistry::new();
        registry.add(rex());
        let older = Animal::reptile(Traits::new("Rex", 90, "swamp", "predator", "green", 400.0), false)
            .unwrap();
        registry.add(older);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_name("Rex").map(|a| a.kind()), Some(AnimalKind::Mammal));
    }

    #[test]
    fn test_animal_json_shape() {
        let value = serde_json::to_value(rex()).unwrap();
        assert_eq!(value["kind"], "mammal");
        assert_eq!(value["name"], "Rex");
        assert_eq!(value["has_fur"], true);

        let back: Animal = serde_json::from_value(value).unwrap();
        assert_eq!(back, rex());
    }

    #[test]
    fn test_invalid_json_animal_is_rejected() {
        let value = serde_json::json!({
            "name": "",
            "age": 1,
            "habitat": "sky",
            "diet": "seeds",
            "color": "blue",
            "weight": 0.1,
            "kind": "bird",
            "wingspan": 0.2
        });
        assert!(serde_json::from_value::<Animal>(value).is_err());
    }

    #[test]
    fn test_add_params_from_json() {
        let params: AddAnimalParams = serde_json::from_value(serde_json::json!({
            "name": "Toad",
            "age": 2,
            "habitat": "garden",
            "diet": "insectivore",
            "color": "brown",
            "weight": 0.08,
            "kind": "amphibian",
            "skin_moisture": "dry"
        }))
        .unwrap();

        let mut registry = MemoryRegistry::new();
        let response = add_animal(&mut registry, params).unwrap();
        assert_eq!(response.index, 0);
        assert_eq!(registry.find_by_name("Toad").unwrap().kind(), AnimalKind::Amphibian);
    }

    #[test]
    fn test_find_params_from_json() {
        let mut registry = MemoryRegistry::new();
        registry.add(rex());

        let params: FindAnimalParams =
            serde_json::from_value(serde_json::json!({ "name": "Rex" })).unwrap();
        let response = find_animal(&registry, params);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["description"], rex().describe());

        let miss = find_animal(&registry, FindAnimalParams { name: "Max".to_string() });
        assert!(serde_json::to_value(&miss).unwrap()["description"].is_null());
    }

    #[test]
    fn test_list_response_json_shape() {
        let mut registry = MemoryRegistry::new();
        registry.add(rex());

        let value = serde_json::to_value(list_animals(&registry)).unwrap();
        let entry = &value["animals"][0];
        assert_eq!(entry["index"], 0);
        assert_eq!(entry["kind"], "mammal");
        assert_eq!(entry["name"], "Rex");
        assert_eq!(entry["description"], rex().describe());

        let empty = serde_json::to_value(list_animals(&MemoryRegistry::new())).unwrap();
        assert_eq!(empty["animals"], serde_json::json!([]));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.seed_samples);
        assert_eq!(config.answer_mode, AnswerMode::Strict);
    }
}
