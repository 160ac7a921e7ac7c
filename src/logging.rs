use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// ターミナルロガーを初期化（--verboseでDebug）
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Err(e) =
        TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
    {
        log::debug!("logger already initialized: {}", e);
    }
}

/// テスト用の初期化
pub fn initialize_for_tests() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Never,
    ) {
        log::debug!("logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        initialize_for_tests();
        initialize_for_tests();
        init(true);
        assert!(log::max_level() >= LevelFilter::Warn);
    }
}
