use std::path::PathBuf;

use anyhow::{Context, Result};

/// Where the static host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: index.html plus the wasm bundle
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Read `SITE_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: lookup("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist_dir: lookup("SITE_DIST").map_or_else(|| PathBuf::from("../dist"), PathBuf::from),
            assets_dir: lookup("SITE_ASSETS")
                .map_or_else(|| PathBuf::from("../assets"), PathBuf::from),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = SiteConfig::from_lookup(|_| None).unwrap();

        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.dist_dir, PathBuf::from("../dist"));
        assert_eq!(cfg.assets_dir, PathBuf::from("../assets"));
        assert_eq!(cfg.index_file(), PathBuf::from("../dist/index.html"));
    }

    #[test]
    fn overrides() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST", "/srv/easygp"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/easygp"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup_from(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
