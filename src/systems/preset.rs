// saves and restores tower parameters as RON presets

use bevy::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::config::PRESET_PATH;
use crate::systems::tower::{ParameterSet, TowerState};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid preset: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not serialize preset: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Event)]
pub struct SavePresetEvent;

pub fn load_preset(path: impl AsRef<Path>) -> Result<ParameterSet, PresetError> {
    let text = fs::read_to_string(path)?;
    Ok(ron::de::from_str(&text)?)
}

pub fn save_preset(path: impl AsRef<Path>, params: &ParameterSet) -> Result<(), PresetError> {
    let text = ron::ser::to_string_pretty(params, ron::ser::PrettyConfig::default())?;
    fs::write(path, text)?;
    Ok(())
}

/// Parameters to start from: the preset file if readable, the compiled defaults otherwise.
pub fn startup_params() -> ParameterSet {
    params_from(PRESET_PATH)
}

fn params_from(path: impl AsRef<Path>) -> ParameterSet {
    let path = path.as_ref();
    match load_preset(path) {
        Ok(params) => {
            info!("loaded tower preset from {}", path.display());
            params
        }
        Err(PresetError::Io(e)) if e.kind() == ErrorKind::NotFound => ParameterSet::default(),
        Err(e) => {
            warn!("ignoring preset {}: {}", path.display(), e);
            ParameterSet::default()
        }
    }
}

pub fn handle_save_preset(
    mut events: EventReader<SavePresetEvent>,
    state: Res<TowerState>,
) {
    if events.read().count() == 0 {
        return;
    }

    match save_preset(PRESET_PATH, &state.params) {
        Ok(()) => info!("saved tower preset to {}", PRESET_PATH),
        Err(e) => warn!("saving preset failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tower_gen_{}_{}.ron", name, std::process::id()))
    }

    #[test]
    fn saved_preset_loads_back() {
        let path = scratch_path("roundtrip");
        let mut params = ParameterSet::default();
        params.floor_count = 17;
        params.bend_angle_degrees = 33.0;
        params.twist_z.curve = crate::systems::tower::CurveKind::EaseInOutCubic;

        save_preset(&path, &params).unwrap();
        let loaded = load_preset(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, params);
    }

    #[test]
    fn missing_preset_uses_defaults() {
        let path = scratch_path("missing");
        assert!(matches!(load_preset(&path), Err(PresetError::Io(_))));
        assert_eq!(params_from(&path), ParameterSet::default());
    }

    #[test]
    fn malformed_preset_uses_defaults() {
        let path = scratch_path("malformed");
        fs::write(&path, "(floor_count: \"many\"").unwrap();
        assert!(matches!(load_preset(&path), Err(PresetError::Parse(_))));
        assert_eq!(params_from(&path), ParameterSet::default());
        fs::remove_file(&path).ok();
    }
}
