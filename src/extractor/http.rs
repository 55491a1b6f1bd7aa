use super::Extractor;
use reqwest::multipart::{Form, Part};
use text_grabber_common::{
    parse_extract_response, EndpointConfig, ExtractError, ExtractedNotes, SelectedImage,
};

/// 抽出APIへ multipart で画像を POST する
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: reqwest::Client,
    endpoint: EndpointConfig,
}

impl HttpExtractor {
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    fn build_form(&self, image: &SelectedImage) -> Result<Form, ExtractError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| ExtractError::Transport(format!("invalid MIME type {}: {}", image.mime_type, e)))?;
        Ok(Form::new().part(self.endpoint.field_name.clone(), part))
    }
}

impl Extractor for HttpExtractor {
    async fn extract(&self, image: &SelectedImage) -> Result<ExtractedNotes, ExtractError> {
        let url = self.endpoint.endpoint_url();
        let form = self.build_form(image)?;

        log::debug!("POST {} ({} bytes)", url, image.size());
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ExtractError::Transport(e.to_string()))?;
        log::debug!("response {} ({} bytes)", status, body.len());

        parse_extract_response(status, &body)
    }
}
