use thiserror::Error;

/// Failures `SplashFlow::run` cannot recover from by routing to login.
#[derive(Error, Debug)]
pub enum SplashError {
    #[error("Navigation to {screen} failed: {source}")]
    Navigation {
        screen: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
