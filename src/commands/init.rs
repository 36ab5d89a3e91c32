use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn default_config_contents() -> &'static str {
    r#"# Classmap Configuration

[thresholds]
# Elements with fewer distinct classes are not counted
min_classes = 1
# Patterns seen fewer times are not reported
min_occurrences = 2

[scan]
elements = ["div"]
extensions = ["html"]
ignore = [
    "**/node_modules/**",
]
respect_gitignore = false
# "abort" or "skip"
on_read_error = "abort"

[output]
# The format's extension is appended when the path has none
path = "template_analysis"
# "csv", "json" or "terminal"
format = "csv"
short_paths = false
"#
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, default_config_contents())?;
    Ok(config_path)
}
