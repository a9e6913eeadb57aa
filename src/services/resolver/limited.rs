use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::{
    error::{AppError, AppResult},
    models::{FormatCatalog, Resolution},
    services::resolver::MediaResolver,
};

/// Caps the number of concurrent calls into the wrapped resolver
///
/// Callers past the cap wait for a permit.
pub struct LimitedResolver {
    inner: Arc<dyn MediaResolver>,
    permits: Semaphore,
}

impl LimitedResolver {
    pub fn new(inner: Arc<dyn MediaResolver>, max_in_flight: usize) -> Self {
        Self {
            inner,
            permits: Semaphore::new(max_in_flight.max(1)),
        }
    }

    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

#[async_trait::async_trait]
impl MediaResolver for LimitedResolver {
    async fn resolve(&self, video_url: &str, format: &str) -> AppResult<Resolution> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        self.inner.resolve(video_url, format).await
    }

    fn supported_formats(&self) -> FormatCatalog {
        self.inner.supported_formats()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::resolver::MockMediaResolver;
    use mockall::predicate::eq;
    use std::time::Duration;

    #[tokio::test]
    async fn test_delegates_to_inner() {
        let mut mock = MockMediaResolver::new();
        mock.expect_resolve()
            .with(eq("https://video.local/watch?v=abc"), eq("720"))
            .times(1)
            .returning(|_, _| Ok(Resolution::failed("video unavailable")));
        mock.expect_supported_formats()
            .returning(FormatCatalog::default);

        let limited = LimitedResolver::new(Arc::new(mock), 2);

        let resolution = limited
            .resolve("https://video.local/watch?v=abc", "720")
            .await
            .unwrap();
        assert_eq!(resolution, Resolution::failed("video unavailable"));
        assert_eq!(limited.supported_formats(), FormatCatalog::default());
        assert_eq!(limited.available_permits(), 2);
    }

    struct SlowResolver;

    #[async_trait::async_trait]
    impl MediaResolver for SlowResolver {
        async fn resolve(&self, _video_url: &str, _format: &str) -> AppResult<Resolution> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(Resolution::Failed { reason: None })
        }

        fn supported_formats(&self) -> FormatCatalog {
            FormatCatalog::default()
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_holds_permit_while_resolving() {
        let limited = Arc::new(LimitedResolver::new(Arc::new(SlowResolver), 1));

        let task = {
            let limited = limited.clone();
            tokio::spawn(async move { limited.resolve("u", "mp3").await })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(limited.available_permits(), 0);

        task.await.unwrap().unwrap();
        assert_eq!(limited.available_permits(), 1);
    }

    #[test]
    fn test_zero_cap_is_raised_to_one() {
        let limited = LimitedResolver::new(Arc::new(SlowResolver), 0);
        assert_eq!(limited.available_permits(), 1);
    }
}
