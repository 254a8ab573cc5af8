//! Static breed registry.
//!
//! The registry enumerates the breed levels the fitted growth model was
//! trained on, with a characteristic adult male weight per breed. Lookup is
//! case-insensitive. Breeds outside the registry are "unseen levels": they
//! may still be submitted to the oracle when
//! [`crate::config::PredictorConfig::allow_unseen_breeds`] is set, with the
//! caveat that oracle output can be unstable for them.

use serde::Serialize;

/// One known breed with its characteristic adult male weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreedSpec {
    pub name: &'static str,
    /// Typical fully-grown male weight in lbs.
    pub adult_weight_lbs: f32,
}

/// Breeds present in the fitted model's training data.
const KNOWN_BREEDS: &[BreedSpec] = &[
    BreedSpec { name: "Australian Shepherd", adult_weight_lbs: 60.0 },
    BreedSpec { name: "Beagle", adult_weight_lbs: 25.0 },
    BreedSpec { name: "Bernese Mountain Dog", adult_weight_lbs: 110.0 },
    BreedSpec { name: "Border Collie", adult_weight_lbs: 45.0 },
    BreedSpec { name: "Boston Terrier", adult_weight_lbs: 20.0 },
    BreedSpec { name: "Boxer", adult_weight_lbs: 70.0 },
    BreedSpec { name: "Bulldog", adult_weight_lbs: 50.0 },
    BreedSpec { name: "Cavalier King Charles Spaniel", adult_weight_lbs: 16.0 },
    BreedSpec { name: "Chihuahua", adult_weight_lbs: 6.0 },
    BreedSpec { name: "Cocker Spaniel", adult_weight_lbs: 28.0 },
    BreedSpec { name: "Dachshund", adult_weight_lbs: 22.0 },
    BreedSpec { name: "Doberman Pinscher", adult_weight_lbs: 90.0 },
    BreedSpec { name: "French Bulldog", adult_weight_lbs: 25.0 },
    BreedSpec { name: "German Shepherd", adult_weight_lbs: 80.0 },
    BreedSpec { name: "German Shorthaired Pointer", adult_weight_lbs: 65.0 },
    BreedSpec { name: "Golden Retriever", adult_weight_lbs: 70.0 },
    BreedSpec { name: "Great Dane", adult_weight_lbs: 160.0 },
    BreedSpec { name: "Havanese", adult_weight_lbs: 11.0 },
    BreedSpec { name: "Labrador Retriever", adult_weight_lbs: 75.0 },
    BreedSpec { name: "Miniature Schnauzer", adult_weight_lbs: 16.0 },
    BreedSpec { name: "Pembroke Welsh Corgi", adult_weight_lbs: 28.0 },
    BreedSpec { name: "Pomeranian", adult_weight_lbs: 6.0 },
    BreedSpec { name: "Poodle", adult_weight_lbs: 60.0 },
    BreedSpec { name: "Pug", adult_weight_lbs: 16.0 },
    BreedSpec { name: "Rottweiler", adult_weight_lbs: 110.0 },
    BreedSpec { name: "Shetland Sheepdog", adult_weight_lbs: 20.0 },
    BreedSpec { name: "Shih Tzu", adult_weight_lbs: 13.0 },
    BreedSpec { name: "Siberian Husky", adult_weight_lbs: 52.0 },
    BreedSpec { name: "Yorkshire Terrier", adult_weight_lbs: 6.0 },
];

/// Case-insensitive view over the known-breed table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreedRegistry;

impl BreedRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All known breeds, in alphabetical order.
    pub fn all(&self) -> &'static [BreedSpec] {
        KNOWN_BREEDS
    }

    /// Look up a breed by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&'static BreedSpec> {
        KNOWN_BREEDS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Whether the breed was present in the model's training data.
    pub fn is_known(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
