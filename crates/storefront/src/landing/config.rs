//! Landing page configuration (`landing.yaml`).
//!
//! Holds the accordion panels and the images shown next to them. Panels are
//! keyed by a stable id; the visible label is display text only.
//!
//! ```yaml
//! default_image:
//!   src: images/PHOTO-2025-10-16-17-09-09.jpg
//!   alt: Fiber X Benefits
//! panels:
//!   - id: hunger
//!     label: Reduces Hunger, Enhances Satiety
//!     image:
//!       src: images/PHOTO-2025-10-16-16-50-07.jpg
//!       alt: Hunger Reduction Benefits
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// An image shown beside the accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionImage {
    pub src: String,
    pub alt: String,
}

impl AccordionImage {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// One accordion panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Stable identifier used to address the panel.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Image shown while this panel is expanded; the default image if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AccordionImage>,
}

/// Landing widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingConfig {
    /// Image shown when no panel image applies.
    pub default_image: AccordionImage,
    /// Accordion panels in page order.
    pub panels: Vec<PanelConfig>,
}

/// Landing configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum LandingConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse landing config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Accordion panel id must not be empty")]
    EmptyPanelId,
    #[error("Duplicate accordion panel id: {0}")]
    DuplicatePanel(String),
}

impl Default for LandingConfig {
    /// The Fiber X benefit panels.
    fn default() -> Self {
        let panel = |id: &str, label: &str, image: Option<(&str, &str)>| PanelConfig {
            id: id.to_string(),
            label: label.to_string(),
            image: image.map(|(src, alt)| AccordionImage::new(src, alt)),
        };

        Self {
            default_image: AccordionImage::new(
                "images/PHOTO-2025-10-16-17-09-09.jpg",
                "Fiber X Benefits",
            ),
            panels: vec![
                panel(
                    "hunger",
                    "Reduces Hunger, Enhances Satiety",
                    Some((
                        "images/PHOTO-2025-10-16-16-50-07.jpg",
                        "Hunger Reduction Benefits",
                    )),
                ),
                panel(
                    "energy",
                    "Improves Energy and Focus",
                    Some((
                        "images/PHOTO-2025-10-16-16-58-26.jpg",
                        "Energy and Focus Benefits",
                    )),
                ),
                panel(
                    "mood",
                    "Elevates Mood",
                    Some((
                        "images/PHOTO-2025-10-16-16-58-27.jpg",
                        "Mood Elevation Benefits",
                    )),
                ),
                panel(
                    "biotics",
                    "Pre & Pro Biotics",
                    Some((
                        "images/PHOTO-2025-10-16-16-59-35.jpg",
                        "Pre & Pro Biotics Benefits",
                    )),
                ),
                panel("ingredients", "Clean, Simple Ingredients", None),
            ],
        }
    }
}

impl LandingConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or panel ids are empty or
    /// repeated.
    pub fn from_yaml(yaml: &str) -> Result<Self, LandingConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(path: &Path) -> Result<Self, LandingConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| LandingConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml)?;
        tracing::debug!(path = %path.display(), panels = config.panels.len(), "Loaded landing config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read or is invalid.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LandingConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Look up a panel by id.
    #[must_use]
    pub fn panel(&self, id: &str) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> Result<(), LandingConfigError> {
        let mut seen = HashSet::new();
        for panel in &self.panels {
            if panel.id.trim().is_empty() {
                return Err(LandingConfigError::EmptyPanelId);
            }
            if !seen.insert(panel.id.as_str()) {
                return Err(LandingConfigError::DuplicatePanel(panel.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_cover_benefit_panels() {
        let config = LandingConfig::default();
        assert_eq!(config.panels.len(), 5);
        assert!(config.validate().is_ok());

        let hunger = config.panel("hunger").unwrap();
        assert_eq!(
            hunger.image.as_ref().unwrap().src,
            "images/PHOTO-2025-10-16-16-50-07.jpg"
        );
        assert!(config.panel("ingredients").unwrap().image.is_none());
        assert!(config.panel("Elevates Mood").is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r"
default_image:
  src: images/default.jpg
  alt: Default
panels:
  - id: fiber
    label: High Fiber
    image:
      src: images/fiber.jpg
      alt: Fiber
  - id: taste
    label: Great Taste
";
        let config = LandingConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_image, AccordionImage::new("images/default.jpg", "Default"));
        assert_eq!(config.panels.len(), 2);
        assert!(config.panel("taste").unwrap().image.is_none());
    }

    #[test]
    fn test_duplicate_panel_rejected() {
        let yaml = r"
default_image: { src: a.jpg, alt: A }
panels:
  - { id: mood, label: Mood }
  - { id: mood, label: Mood again }
";
        let err = LandingConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, LandingConfigError::DuplicatePanel(ref id) if id == "mood"));
    }

    #[test]
    fn test_empty_panel_id_rejected() {
        let yaml = r#"
default_image: { src: a.jpg, alt: A }
panels:
  - { id: "", label: Nothing }
"#;
        assert!(matches!(
            LandingConfig::from_yaml(yaml),
            Err(LandingConfigError::EmptyPanelId)
        ));
    }

    #[test]
    fn test_load_from_file_and_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = serde_yaml::to_string(&LandingConfig::default()).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = LandingConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(loaded, LandingConfig::default());

        assert_eq!(
            LandingConfig::load_or_default(None).unwrap(),
            LandingConfig::default()
        );

        let missing = LandingConfig::load(Path::new("/nonexistent/landing.yaml"));
        assert!(matches!(missing, Err(LandingConfigError::Io { .. })));
    }
}
