//! Model and build settings read from TOML text.
//!
//! ```toml
//! [build]
//! dense = false
//!
//! [kitaev]
//! length = 4
//! t = 1.0
//! delta = 0.5
//! mu = 0.2
//! ```
//!
//! The `[build]` table is optional and defaults to a sparse representation.
//! Every key of the `[kitaev]` table is required; numeric values may be
//! written as integers or floats.

use toml::{ Table, Value };
use crate::{
    error::{ FockError, FockResult },
    operator::Repr,
    wire::{ HBuilderKitaevBdg, HBuilderKitaevFock, KitaevParams },
};

/// Output settings shared by all operator builders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub repr: Repr,
}

/// A complete configuration: a Kitaev wire and how to build it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    pub build: BuildConfig,
    pub kitaev: KitaevParams,
}

fn get_table<'a>(root: &'a Table, key: &str) -> FockResult<Option<&'a Table>> {
    match root.get(key) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(_) => Err(FockError::Config(format!("`{}` must be a table", key))),
    }
}

fn get_f64(table: &Table, section: &str, key: &str) -> FockResult<f64> {
    match table.get(key) {
        Some(Value::Float(f)) => Ok(*f),
        Some(Value::Integer(i)) => Ok(*i as f64),
        Some(_) => Err(FockError::Config(
            format!("`{}.{}` must be a number", section, key))),
        None => Err(FockError::Config(
            format!("missing key `{}.{}`", section, key))),
    }
}

impl BuildConfig {
    fn from_table(root: &Table) -> FockResult<Self> {
        let Some(build) = get_table(root, "build")? else {
            return Ok(Self::default());
        };
        match build.get("dense") {
            None => Ok(Self::default()),
            Some(Value::Boolean(dense)) => {
                Ok(Self { repr: Repr::from_dense(*dense) })
            },
            Some(_) => Err(FockError::Config(
                "`build.dense` must be a boolean".to_string())),
        }
    }

    /// Parse the `[build]` table of a TOML document.
    pub fn from_toml(text: &str) -> FockResult<Self> {
        Self::from_table(&text.parse::<Table>()?)
    }
}

impl KitaevParams {
    fn from_table(root: &Table) -> FockResult<Self> {
        let kitaev
            = get_table(root, "kitaev")?
            .ok_or_else(|| FockError::Config("missing table `kitaev`".to_string()))?;
        let length
            = match kitaev.get("length") {
                Some(Value::Integer(n)) if *n > 0 => *n as usize,
                Some(_) => {
                    return Err(FockError::Config(
                        "`kitaev.length` must be a positive integer".to_string()));
                },
                None => {
                    return Err(FockError::Config(
                        "missing key `kitaev.length`".to_string()));
                },
            };
        let t = get_f64(kitaev, "kitaev", "t")?;
        let delta = get_f64(kitaev, "kitaev", "delta")?;
        let mu = get_f64(kitaev, "kitaev", "mu")?;
        Ok(Self::new(length, t, delta, mu))
    }

    /// Parse the `[kitaev]` table of a TOML document.
    pub fn from_toml(text: &str) -> FockResult<Self> {
        Self::from_table(&text.parse::<Table>()?)
    }
}

impl Config {
    /// Parse a full configuration from a TOML document.
    pub fn from_toml(text: &str) -> FockResult<Self> {
        let root: Table = text.parse()?;
        let config = Self {
            build: BuildConfig::from_table(&root)?,
            kitaev: KitaevParams::from_table(&root)?,
        };
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Create a Fock-space Hamiltonian builder for the configured wire.
    pub fn fock_builder(&self) -> FockResult<HBuilderKitaevFock> {
        HBuilderKitaevFock::new(self.kitaev, self.build.repr)
    }

    /// Create a Bogoliubov-de Gennes Hamiltonian builder for the configured
    /// wire.
    pub fn bdg_builder(&self) -> HBuilderKitaevBdg {
        HBuilderKitaevBdg::new(self.kitaev)
    }
}

#[cfg(test)]
mod test {
    use num_complex::Complex64 as C64;
    use crate::wire::kitaev_wire_bdg_ham;
    use super::*;

    const FULL: &str = r#"
        [build]
        dense = true

        [kitaev]
        length = 3
        t = 1
        delta = 0.5
        mu = -0.25
    "#;

    #[test]
    fn parse_full() {
        let config = Config::from_toml(FULL).unwrap();
        assert_eq!(config.build.repr, Repr::Dense);
        assert_eq!(config.kitaev.length, 3);
        assert_eq!(config.kitaev.t, C64::from(1.0));
        assert_eq!(config.kitaev.delta, C64::from(0.5));
        assert_eq!(config.kitaev.mu, -0.25);
    }

    #[test]
    fn build_defaults_to_sparse() {
        let text = "[kitaev]\nlength = 2\nt = 1.0\ndelta = 1.0\nmu = 0.0\n";
        let config = Config::from_toml(text).unwrap();
        assert_eq!(config.build, BuildConfig::default());
        assert_eq!(config.build.repr, Repr::Sparse);
        assert_eq!(BuildConfig::from_toml("[build]\n").unwrap().repr, Repr::Sparse);
    }

    #[test]
    fn builders_from_config() {
        let config = Config::from_toml(FULL).unwrap();
        let fock = config.fock_builder().unwrap();
        let H = fock.gen().unwrap();
        assert_eq!(H.repr(), Repr::Dense);
        assert_eq!(H.shape(), (8, 8));
        assert!(H.is_hermitian(1e-12));
        assert_eq!(
            config.bdg_builder().gen().unwrap(),
            kitaev_wire_bdg_ham(3, -0.25, 1.0, 0.5).unwrap(),
        );
    }

    #[test]
    fn bad_configs() {
        assert!(matches!(Config::from_toml("[kitaev"), Err(FockError::Toml(_))));
        assert!(matches!(
            KitaevParams::from_toml("[kitaev]\nlength = 2\nt = 1.0\ndelta = 1.0\n"),
            Err(FockError::Config(_)),
        ));
        assert!(matches!(
            KitaevParams::from_toml("[kitaev]\nlength = 0\nt = 1\ndelta = 1\nmu = 1\n"),
            Err(FockError::Config(_)),
        ));
        assert!(matches!(
            BuildConfig::from_toml("[build]\ndense = \"yes\"\n"),
            Err(FockError::Config(_)),
        ));
        assert!(matches!(
            KitaevParams::from_toml("kitaev = 3\n"),
            Err(FockError::Config(_)),
        ));
    }
}
