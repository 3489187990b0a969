/// Basic integration tests
use animal_registry::*;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[test]
    fn test_app_seeds_samples_in_order() {
        let app = AnimalRegistryApp::new(AppConfig::default()).expect("Failed to create app");

        let names: Vec<&str> = app
            .registry()
            .list_all()
            .map(|(_, animal)| animal.name())
            .collect();
        assert_eq!(names, vec!["Barsik", "Eagle", "Salmon"]);
    }

    #[test]
    fn test_app_without_samples() {
        let config = AppConfig {
            seed_samples: false,
            ..AppConfig::default()
        };
        let app = AnimalRegistryApp::new(config).expect("Failed to create app");

        assert!(app.registry().is_empty());
        assert_eq!(list_animals(app.registry()).lines(), vec![NO_ANIMALS_FOUND.to_string()]);
    }

    #[test]
    fn test_sample_descriptions() {
        let lines = list_animals(&MemoryRegistry::with_animals(sample_animals().unwrap())).lines();
        assert_eq!(
            lines,
            vec![
                "[0] Type: Mammal, Name: Barsik, Age: 5, Habitat: forest, Diet: predator, \
                 Color: golden, Weight: 19.5 kg, Has Fur: yes",
                "[1] Type: Bird, Name: Eagle, Age: 3, Habitat: mountains, Diet: predator, \
                 Color: brown, Weight: 6.3 kg, Wingspan: 2 m",
                "[2] Type: Fish, Name: Salmon, Age: 2, Habitat: river, Diet: omnivore, \
                 Color: silver, Weight: 4.5 kg, Water Type: fresh",
            ]
        );
    }
}
