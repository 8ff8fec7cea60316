use super::*;
use std::fs;
use thiserror::Error;

pub const SETTINGS_PATH: &str = "settings.ron";
pub const CONFIG_PATH: &str = "config.ron";

pub fn plugin(app: &mut App) {
    app.init_resource::<Settings>().init_resource::<Config>();
    app.add_systems(
        OnEnter(Screen::Title),
        (load_settings, load_config).run_if(run_once),
    );
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("read: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("serialize: {0}")]
    Serialize(#[from] ron::Error),
}

/// Player-facing knobs, persisted between runs on native. On web the file
/// read fails and the defaults apply.
#[derive(Resource, Reflect, Deserialize, Serialize, Debug, Clone)]
#[reflect(Resource)]
pub struct Settings {
    pub fov: f32,
    pub sensitivity: f32,
    pub invert_y: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let camera = CameraPreset::default();
        Self {
            fov: camera.fov,
            sensitivity: camera.sensitivity,
            invert_y: false,
        }
    }
}

impl Settings {
    pub fn read() -> Result<Self, SettingsError> {
        let content = fs::read_to_string(SETTINGS_PATH)?;
        Ok(ron::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let content = ron::ser::to_string_pretty(self, Default::default())?;
        fs::write(SETTINGS_PATH, content)?;
        Ok(())
    }
}

fn load_settings(mut commands: Commands) {
    let settings = match Settings::read() {
        Ok(settings) => {
            info!("loaded settings from '{SETTINGS_PATH}'");
            settings
        }
        Err(e) => {
            info!("unable to load settings from '{SETTINGS_PATH}', switching to defaults: {e}");
            Default::default()
        }
    };

    commands.insert_resource(settings);
}

fn load_config(mut commands: Commands) {
    let config = match fs::read_to_string(CONFIG_PATH) {
        Ok(content) => match ron::from_str::<Config>(&content) {
            Ok(config) => {
                info!("loaded tuning overrides from '{CONFIG_PATH}'");
                config
            }
            Err(e) => {
                warn!("'{CONFIG_PATH}' is malformed, keeping defaults: {e}");
                Default::default()
            }
        },
        Err(_) => Default::default(),
    };

    commands.insert_resource(config);
}
