//! Files bundled into the library at compile time.

const DOLPHIN_GEOMETRY: &[u8] = include_bytes!("../resources/dolphin.geo.json");
const TEXTURE_MAPPINGS: &[u8] = include_bytes!("../resources/texture_mappings.json");

pub const DOLPHIN_GEOMETRY_NAME: &str = "dolphin.geo.json";
pub const TEXTURE_MAPPINGS_NAME: &str = "texture_mappings.json";

/// Look up an embedded resource by file name.
pub fn resource(name: &str) -> Option<&'static [u8]> {
    match name.trim_start_matches('/') {
        DOLPHIN_GEOMETRY_NAME => Some(DOLPHIN_GEOMETRY),
        TEXTURE_MAPPINGS_NAME => Some(TEXTURE_MAPPINGS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_resources_are_valid_json() {
        for name in [DOLPHIN_GEOMETRY_NAME, TEXTURE_MAPPINGS_NAME] {
            let bytes = resource(name).unwrap();
            serde_json::from_slice::<serde_json::Value>(bytes)
                .unwrap_or_else(|e| panic!("{name} is not valid JSON: {e}"));
        }
    }

    #[test]
    fn test_leading_slash_and_unknown() {
        assert!(resource("/dolphin.geo.json").is_some());
        assert!(resource("cod.geo.json").is_none());
    }
}
