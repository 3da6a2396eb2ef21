use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::service_settings::ServiceSettings;

pub const DEFAULT_CONFIG_FILE: &str = "services.yml";

/// Parsed services file together with the directory relative `osdd` paths
/// are resolved against.
#[derive(Debug)]
pub struct ServicesConfig {
    pub services: Vec<ServiceSettings>,
    pub base_dir: PathBuf,
}

impl ServicesConfig {
    pub fn load(maybe_yml: Option<&str>) -> Result<Self> {
        let path = Path::new(maybe_yml.unwrap_or(DEFAULT_CONFIG_FILE));
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let services = Self::parse(&yml)?;

        Ok(Self {
            services,
            base_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        })
    }

    pub fn parse(yml: &str) -> Result<Vec<ServiceSettings>> {
        let services: Vec<ServiceSettings> =
            serde_yaml::from_str(yml).context("Invalid yaml configuration")?;
        check_unique_aliases(&services)?;
        Ok(services)
    }

    /// Where to load a service's description from
    pub fn document_source(&self, settings: &ServiceSettings) -> String {
        if is_remote(&settings.osdd) || Path::new(&settings.osdd).is_absolute() {
            settings.osdd.clone()
        } else {
            self.base_dir.join(&settings.osdd).to_string_lossy().into_owned()
        }
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn check_unique_aliases(services: &[ServiceSettings]) -> Result<()> {
    let mut seen = HashSet::new();
    for settings in services {
        if !seen.insert(settings.alias.as_str()) {
            bail!("Duplicate alias: {}", settings.alias);
        }
    }
    Ok(())
}
