use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const DEFAULT_FOLDER: &str = "random_init_images";
pub const DEFAULT_EXTENSIONS: &str = "png,jpg,jpeg,bmp,tiff,webp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomImageParams {
    #[serde(default = "default_folder_path")]
    pub folder_path: String,
    #[serde(default)]
    pub seed: Seed,
    #[serde(default = "default_image_extensions")]
    pub image_extensions: String,
}

pub fn default_folder_path() -> String {
    DEFAULT_FOLDER.to_string()
}

pub fn default_image_extensions() -> String {
    DEFAULT_EXTENSIONS.to_string()
}

impl Default for RandomImageParams {
    fn default() -> Self {
        RandomImageParams {
            folder_path: default_folder_path(),
            seed: Seed::default(),
            image_extensions: default_image_extensions(),
        }
    }
}

/// Selection seed. The host sends any integer in [0, 2^64) for a fixed pick,
/// or the sentinel -1 to draw a fresh seed per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Fixed(u64),
    Random,
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Fixed(0)
    }
}

impl Serialize for Seed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Seed::Fixed(value) => serializer.serialize_u64(*value),
            Seed::Random => serializer.serialize_i64(-1),
        }
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeedVisitor;

        impl<'de> Visitor<'de> for SeedVisitor {
            type Value = Seed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer in [0, 2^64) or -1 for random")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Seed, E>
            where
                E: de::Error,
            {
                Ok(Seed::Fixed(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Seed, E>
            where
                E: de::Error,
            {
                match value {
                    -1 => Ok(Seed::Random),
                    v if v >= 0 => Ok(Seed::Fixed(v as u64)),
                    v => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(SeedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_sentinel_parses_as_random() {
        let seed: Seed = serde_json::from_str("-1").unwrap();
        assert_eq!(seed, Seed::Random);
    }

    #[test]
    fn seed_covers_full_u64_range() {
        let seed: Seed = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(seed, Seed::Fixed(u64::MAX));
    }

    #[test]
    fn seed_rejects_other_negatives() {
        assert!(serde_json::from_str::<Seed>("-2").is_err());
    }

    #[test]
    fn random_seed_serializes_as_sentinel() {
        assert_eq!(serde_json::to_string(&Seed::Random).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Seed::Fixed(42)).unwrap(), "42");
    }

    #[test]
    fn params_fill_defaults_from_empty_payload() {
        let params: RandomImageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.folder_path, DEFAULT_FOLDER);
        assert_eq!(params.seed, Seed::Fixed(0));
        assert_eq!(params.image_extensions, DEFAULT_EXTENSIONS);
    }
}
