//! Logger setup.

use std::path::Path;

/// Installs the global logger, writing to stdout and, if given, appending to `file`.
pub fn init(level: log::LevelFilter, file: Option<&Path>) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = file {
        let file = fern::log_file(path)
            .map_err(|e| format!("Cannot open log file {}: {e}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().map_err(|e| e.to_string())
}
