use std::path::PathBuf;

pub const TESSERACT_ENV: &str = "OCR_BRIDGE_TESSERACT";
pub const LANG_ENV: &str = "OCR_BRIDGE_LANG";
pub const PSM_ENV: &str = "OCR_BRIDGE_PSM";

/// Settings for the bundled Tesseract engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Executable to run, looked up on `PATH` when not absolute.
    pub tesseract_path: PathBuf,
    /// Tesseract language pack, e.g. `eng` or `eng+deu`.
    pub language: Option<String>,
    /// Page segmentation mode passed as `--psm`.
    pub page_segmentation_mode: Option<u8>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tesseract_path: PathBuf::from("tesseract"),
            language: None,
            page_segmentation_mode: None,
        }
    }
}

impl EngineOptions {
    /// Defaults overridden by `OCR_BRIDGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();

        if let Some(path) = lookup(TESSERACT_ENV).filter(|v| !v.trim().is_empty()) {
            options.tesseract_path = PathBuf::from(path);
        }
        if let Some(lang) = lookup(LANG_ENV).filter(|v| !v.trim().is_empty()) {
            options.language = Some(lang.trim().to_string());
        }
        if let Some(psm) = lookup(PSM_ENV) {
            match psm.trim().parse::<u8>() {
                Ok(mode) => options.page_segmentation_mode = Some(mode),
                Err(_) => tracing::warn!("ignoring {}={:?}: not a number", PSM_ENV, psm),
            }
        }

        options
    }

    pub fn with_tesseract_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tesseract_path = path.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_page_segmentation_mode(mut self, mode: u8) -> Self {
        self.page_segmentation_mode = Some(mode);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let options = EngineOptions::from_lookup(lookup(&[]));
        assert_eq!(options, EngineOptions::default());
        assert_eq!(options.tesseract_path, PathBuf::from("tesseract"));
    }

    #[test]
    fn test_env_overrides() {
        let options = EngineOptions::from_lookup(lookup(&[
            (TESSERACT_ENV, "/opt/bin/tesseract"),
            (LANG_ENV, " eng+deu "),
            (PSM_ENV, "7"),
        ]));
        assert_eq!(options.tesseract_path, PathBuf::from("/opt/bin/tesseract"));
        assert_eq!(options.language.as_deref(), Some("eng+deu"));
        assert_eq!(options.page_segmentation_mode, Some(7));
    }

    #[test]
    fn test_bad_psm_is_ignored() {
        let options = EngineOptions::from_lookup(lookup(&[(PSM_ENV, "single-line")]));
        assert_eq!(options.page_segmentation_mode, None);
    }

    #[test]
    fn test_builders() {
        let options = EngineOptions::default()
            .with_tesseract_path("/usr/local/bin/tesseract")
            .with_language("fra")
            .with_page_segmentation_mode(6);
        assert_eq!(options.language.as_deref(), Some("fra"));
        assert_eq!(options.page_segmentation_mode, Some(6));
    }
}
