use std::path::PathBuf;

/// Returns the path to the console database based on the operating system
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/vertirix/console.db`
/// - **Linux**: `~/.local/share/vertirix/console.db`
/// - **Windows**: `%LOCALAPPDATA%\vertirix\console.db`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("vertirix").join("console.db"))
}
