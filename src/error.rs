use thiserror::Error;

/// Problems detected while wiring a slider. None of them abort the page:
/// an empty slide set leaves the controller inert, a count mismatch is
/// tolerated by pairing slides and indicators by index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("slider has no slides")]
    EmptySlideSet,
    #[error("slider has {slides} slides but {indicators} indicators")]
    IndicatorMismatch { slides: usize, indicators: usize },
}

/// Checks the slide/indicator counts handed to a slider.
pub fn check_counts(slides: usize, indicators: usize) -> Result<(), ConfigError> {
    if slides == 0 {
        return Err(ConfigError::EmptySlideSet);
    }
    // An absent indicator row is allowed.
    if indicators != 0 && indicators != slides {
        return Err(ConfigError::IndicatorMismatch { slides, indicators });
    }
    Ok(())
}
