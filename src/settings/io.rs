// src/settings/io.rs
use bevy::log::{error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "InsightGridOrg";
const APPLICATION: &str = "InsightGrid";
const CONFIG_FILE: &str = "app_settings.json";

fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine project directories for app settings.",
        ))
    }
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T>
{
    let config_file = get_config_path()?;
    match fs::File::open(&config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                error!("AppSettings: failed to parse {:?}: {}", &config_file, e);
                io::Error::new(ErrorKind::InvalidData, e)
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "AppSettings: no settings file at {:?}; using defaults.",
                config_file
            );
            Ok(Default::default())
        }
        Err(e) => {
            error!("AppSettings: failed to open {:?}: {}", &config_file, e);
            Err(e)
        }
    }
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    let config_file = get_config_path()?;
    info!("AppSettings: saving settings to {:?}", config_file);
    let file = fs::File::create(&config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!(
            "AppSettings: failed to serialize settings to {:?}: {}",
            &config_file, e
        );
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    Ok(())
}
