pub mod http_service;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

use std::time::Duration;

use tower::timeout::error::Elapsed;
use tower::util::BoxCloneService;
use tower::{BoxError, Service, ServiceBuilder};
use tracing::info;

use crate::config::ServiceSettings;
use crate::error::{AppError, ClassifyError};
use crate::media::ImageUpload;

pub use http_service::HttpClassificationService;
pub use types::{BreakdownEntry, ClassificationResult, format_percent};

/// Type-erased classifier handed to the screen controller.
pub type ClassificationService = BoxCloneService<ImageUpload, ClassificationResult, ClassifyError>;

#[derive(Debug, Clone)]
pub struct ClassificationServiceBuilder {
    endpoint: String,
    timeout: Duration,
}

impl ClassificationServiceBuilder {
    pub fn new(settings: &ServiceSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            timeout: settings.timeout(),
        }
    }

    /// Overrides the configured endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the configured request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ClassificationService, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ClassifyError::from)?;
        let http = HttpClassificationService::new(client, self.endpoint);
        info!(
            "Classifying via {} (timeout {:?})",
            http.endpoint(),
            self.timeout
        );
        Ok(with_timeout(http, self.timeout))
    }
}

/// Bounds every call to `service` by `timeout` and erases its type.
pub fn with_timeout<S>(service: S, timeout: Duration) -> ClassificationService
where
    S: Service<ImageUpload, Response = ClassificationResult, Error = ClassifyError>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
{
    let stack = ServiceBuilder::new()
        .map_err(move |err: BoxError| collapse_error(err, timeout))
        .timeout(timeout)
        .service(service);
    BoxCloneService::new(stack)
}

fn collapse_error(err: BoxError, timeout: Duration) -> ClassifyError {
    if err.is::<Elapsed>() {
        return ClassifyError::Timeout(timeout);
    }
    match err.downcast::<ClassifyError>() {
        Ok(err) => *err,
        Err(other) => ClassifyError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower::{ServiceExt, service_fn};

    fn upload() -> ImageUpload {
        ImageUpload {
            file_name: "dog.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            bytes: Arc::from(&b"\xff\xd8\xff\xe0"[..]),
        }
    }

    #[tokio::test]
    async fn passes_results_through() {
        let svc = with_timeout(
            service_fn(|upload: ImageUpload| async move {
                Ok::<_, ClassifyError>(ClassificationResult::new(upload.file_name, 0.5))
            }),
            Duration::from_secs(1),
        );
        let result = svc.oneshot(upload()).await.unwrap();
        assert_eq!(result.prediction, "dog.jpg");
    }

    #[tokio::test]
    async fn keeps_inner_errors_intact() {
        let svc = with_timeout(
            service_fn(|_: ImageUpload| async { Err::<ClassificationResult, _>(ClassifyError::Status(503)) }),
            Duration::from_secs(1),
        );
        assert_eq!(svc.oneshot(upload()).await.unwrap_err(), ClassifyError::Status(503));
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let svc = with_timeout(
            service_fn(|_: ImageUpload| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, ClassifyError>(ClassificationResult::new("late", 1.0))
            }),
            Duration::from_millis(50),
        );
        assert_eq!(
            svc.oneshot(upload()).await.unwrap_err(),
            ClassifyError::Timeout(Duration::from_millis(50))
        );
    }

    #[test]
    fn builder_takes_overrides() {
        let builder = ClassificationServiceBuilder::new(&ServiceSettings::default())
            .endpoint("http://10.1.1.1:5000/classify")
            .timeout(Duration::from_secs(3));
        assert_eq!(builder.endpoint, "http://10.1.1.1:5000/classify");
        assert_eq!(builder.timeout, Duration::from_secs(3));
    }
}
