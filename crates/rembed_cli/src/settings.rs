//! Merges command-line arguments with `rembed.toml`.
//!
//! Command-line values win over the configuration file; the configuration
//! file wins over built-in defaults.

use std::path::{Path, PathBuf};

use rembed_config::{
    load_config, load_config_file, parse_resource_list, CodegenConfig, EmbedConfig,
};

use crate::{EmbedArgs, GlobalArgs};

/// Fully resolved inputs for one embedder run.
#[derive(Debug)]
pub struct Settings {
    /// Absolute build root.
    pub build_root: PathBuf,
    /// Absolute output directory.
    pub output_dir: PathBuf,
    /// Resource specs, relative to the build root unless absolute.
    pub specs: Vec<String>,
    /// Codegen options.
    pub codegen: CodegenConfig,
}

/// Resolves settings, or returns `Ok(None)` when there is nothing to do:
/// the working directory is missing or not a directory, or the resource
/// list is empty.
pub fn resolve(
    args: &EmbedArgs,
    global: &GlobalArgs,
) -> Result<Option<Settings>, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load(args, global, &cwd)?.unwrap_or_default();

    let build_root = args
        .working_directory
        .clone()
        .or(config.embed.build_root)
        .unwrap_or_else(|| cwd.clone());
    if build_root.as_os_str().is_empty() || !build_root.is_dir() {
        log::info!(
            "working directory '{}' is not a directory; nothing to do",
            build_root.display()
        );
        return Ok(None);
    }

    let specs = match &args.resources {
        Some(list) => parse_resource_list(list),
        None => config.embed.resources,
    };
    if specs.is_empty() {
        log::info!("no resources given; nothing to do");
        return Ok(None);
    }

    let output_dir = args
        .export_directory
        .clone()
        .or(config.embed.output_dir)
        .ok_or("no export directory given (use --export-directory or [embed] output_dir)")?;

    Ok(Some(Settings {
        build_root: std::path::absolute(&build_root)?,
        output_dir: std::path::absolute(&output_dir)?,
        specs,
        codegen: config.codegen,
    }))
}

/// Loads the explicit `--config` file, or `rembed.toml` from the working
/// directory if one exists there.
fn load(
    args: &EmbedArgs,
    global: &GlobalArgs,
    cwd: &Path,
) -> Result<Option<EmbedConfig>, Box<dyn std::error::Error>> {
    if let Some(path) = &global.config {
        return Ok(Some(load_config_file(path)?));
    }
    let dir = args.working_directory.as_deref().unwrap_or(cwd);
    if !dir.is_dir() {
        return Ok(None);
    }
    Ok(load_config(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportFormat;
    use rembed_config::RegistrationMode;

    fn args(wd: Option<&Path>, out: Option<&Path>, resources: Option<&str>) -> EmbedArgs {
        EmbedArgs {
            working_directory: wd.map(Path::to_path_buf),
            export_directory: out.map(Path::to_path_buf),
            resources: resources.map(str::to_string),
            format: ReportFormat::Text,
        }
    }

    fn global(config: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config,
        }
    }

    #[test]
    fn cli_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let s = resolve(
            &args(Some(dir.path()), Some(&out), Some("a.png|icons")),
            &global(None),
        )
        .unwrap()
        .unwrap();
        assert_eq!(s.build_root, dir.path());
        assert_eq!(s.output_dir, out);
        assert_eq!(s.specs, vec!["a.png", "icons"]);
        assert_eq!(s.codegen, CodegenConfig::default());
    }

    #[test]
    fn missing_working_directory_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let wd = dir.path().join("absent");
        let s = resolve(&args(Some(&wd), Some(dir.path()), Some("a.png")), &global(None)).unwrap();
        assert!(s.is_none());
    }

    #[test]
    fn empty_resources_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let s = resolve(&args(Some(dir.path()), Some(dir.path()), Some("||")), &global(None))
            .unwrap();
        assert!(s.is_none());
    }

    #[test]
    fn missing_export_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(&args(Some(dir.path()), None, Some("a.png")), &global(None))
            .unwrap_err();
        assert!(err.to_string().contains("export directory"));
    }

    #[test]
    fn config_file_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rembed.toml"),
            "[embed]\noutput_dir = \"gen\"\nresources = [\"assets\"]\n\n\
             [codegen]\nregistration = \"static-init\"\n",
        )
        .unwrap();

        let s = resolve(&args(Some(dir.path()), None, None), &global(None))
            .unwrap()
            .unwrap();
        assert_eq!(s.output_dir, dir.path().join("gen"));
        assert_eq!(s.specs, vec!["assets"]);
        assert_eq!(s.codegen.registration, RegistrationMode::StaticInit);
    }

    #[test]
    fn cli_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rembed.toml"),
            "[embed]\noutput_dir = \"gen\"\nresources = \"assets\"\n",
        )
        .unwrap();
        let out = dir.path().join("elsewhere");

        let s = resolve(
            &args(Some(dir.path()), Some(&out), Some("logo.png")),
            &global(None),
        )
        .unwrap()
        .unwrap();
        assert_eq!(s.output_dir, out);
        assert_eq!(s.specs, vec!["logo.png"]);
    }

    #[test]
    fn explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("ci.toml");
        std::fs::write(
            &cfg,
            "[embed]\noutput_dir = \"gen\"\nresources = \"assets\"\n",
        )
        .unwrap();

        let s = resolve(&args(None, None, None), &global(Some(cfg)))
            .unwrap()
            .unwrap();
        assert_eq!(s.build_root, dir.path());
        assert_eq!(s.output_dir, dir.path().join("gen"));
    }

    #[test]
    fn bare_config_file_name_resolves_against_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("a.bin"), b"a").unwrap();
        std::fs::write(
            dir.path().join("rembed.toml"),
            "[embed]\noutput_dir = \"gen\"\nresources = \"assets\"\n",
        )
        .unwrap();

        // No other test in this crate depends on the process working directory.
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let result = resolve(&args(None, None, None), &global(Some(PathBuf::from("rembed.toml"))));
        std::env::set_current_dir(previous).unwrap();

        let s = result.unwrap().expect("config with resources must not be a no-op");
        assert_eq!(s.specs, vec!["assets"]);
        assert!(s.build_root.is_absolute());
        assert!(s.build_root.join("assets").join("a.bin").is_file());
        assert!(s.output_dir.ends_with("gen"));
    }

    #[test]
    fn invalid_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rembed.toml"), "[codegen]\nbytes_per_line = 0\n").unwrap();
        let result = resolve(&args(Some(dir.path()), Some(dir.path()), None), &global(None));
        assert!(result.is_err());
    }
}
