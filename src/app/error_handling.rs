//! Error handling utilities

use tracing::error;

/// Report a fatal startup error and exit
///
/// - `verbose = 0`: the top-level message only
/// - `verbose >= 1`: the full cause chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    eprintln!("Error: {error}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

/// 2 for configuration problems, 1 for everything else
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<crate::error::Error>() {
        Some(crate::error::Error::Config(_)) | Some(crate::error::Error::Toml(_)) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_config_errors() {
        let err = anyhow::Error::new(crate::error::Error::Config("bad".to_string()));
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }
}
