use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use reqwest::multipart::{Form, Part};
use tower::Service;
use tracing::{debug, info};

use crate::classification::types::ClassificationResult;
use crate::error::ClassifyError;
use crate::media::ImageUpload;

/// Multipart field the classification service reads the image from.
pub const IMAGE_FIELD: &str = "image";

/// Posts one image to the classification endpoint and decodes the JSON body.
#[derive(Clone)]
pub struct HttpClassificationService {
    client: reqwest::Client,
    endpoint: Arc<str>,
}

impl HttpClassificationService {
    pub fn new(client: reqwest::Client, endpoint: impl Into<Arc<str>>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Service<ImageUpload> for HttpClassificationService {
    type Response = ClassificationResult;
    type Error = ClassifyError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, upload: ImageUpload) -> Self::Future {
        let client = self.client.clone();
        let endpoint = Arc::clone(&self.endpoint);
        Box::pin(async move { post_image(&client, &endpoint, upload).await })
    }
}

async fn post_image(
    client: &reqwest::Client,
    endpoint: &str,
    upload: ImageUpload,
) -> Result<ClassificationResult, ClassifyError> {
    info!(
        "Uploading {} ({} bytes) to {}",
        upload.file_name,
        upload.bytes.len(),
        endpoint
    );

    let part = Part::bytes(upload.bytes.to_vec())
        .file_name(upload.file_name)
        .mime_str(&upload.mime)?;
    let form = Form::new().part(IMAGE_FIELD, part);

    let response = client.post(endpoint).multipart(form).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClassifyError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let result: ClassificationResult = serde_json::from_slice(&body)?;
    debug!(
        "Service answered {} ({:.3})",
        result.prediction, result.confidence
    );
    Ok(result)
}
