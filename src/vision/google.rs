use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::config::VisionConfig;
use crate::domain::{DetectedFeature, DominantColorSample, FeatureSource, Rgb};
use crate::error::VisionError;
use crate::upload::ImageUpload;
use crate::vision::{VisionAnalysis, VisionAnalyzer};

const API_KEY_HEADER: &str = "X-Goog-Api-Key";

// Request URLs never leave the client inside an error.
fn transport(error: reqwest::Error) -> VisionError {
    VisionError::Transport(error.without_url())
}

/// Client for the `images:annotate` endpoint of Google Cloud Vision.
pub struct GoogleVisionClient {
    endpoint: String,
    api_key: String,
    limits: FeatureLimits,
    http: HttpClient,
}

#[derive(Debug, Clone, Copy)]
struct FeatureLimits {
    logos: u32,
    objects: u32,
    labels: u32,
    colors: u32,
}

impl GoogleVisionClient {
    pub fn new(config: &VisionConfig) -> Result<Self, VisionError> {
        // The request deadline is enforced by the pipeline's timeout layer.
        let http = HttpClient::builder()
            .build()
            .map_err(VisionError::ClientBuild)?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            limits: FeatureLimits {
                logos: config.max_logo_results,
                objects: config.max_object_results,
                labels: config.max_label_results,
                colors: config.max_color_results,
            },
            http,
        })
    }

    fn request_body<'a>(&self, image: &'a ImageUpload) -> AnnotateRequest<'a> {
        AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: image.content(),
                },
                features: vec![
                    FeatureRequest::limited("LOGO_DETECTION", self.limits.logos),
                    FeatureRequest::limited("OBJECT_LOCALIZATION", self.limits.objects),
                    FeatureRequest::limited("LABEL_DETECTION", self.limits.labels),
                    FeatureRequest::limited("IMAGE_PROPERTIES", self.limits.colors),
                    FeatureRequest::unlimited("DOCUMENT_TEXT_DETECTION"),
                ],
            }],
        }
    }
}

#[async_trait]
impl VisionAnalyzer for GoogleVisionClient {
    async fn analyze(&self, image: &ImageUpload) -> Result<VisionAnalysis, VisionError> {
        tracing::debug!(bytes = image.len(), media_type = ?image.media_type(), "Requesting vision annotation");

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(image))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(VisionError::Status(status.as_u16()));
        }

        let body: AnnotateResponse = response.json().await.map_err(transport)?;
        body.into_analysis()
    }
}

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    requests: Vec<AnnotateImageRequest<'a>>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest<'a> {
    image: ImageContent<'a>,
    features: Vec<FeatureRequest>,
}

#[derive(Debug, Serialize)]
struct ImageContent<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FeatureRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

impl FeatureRequest {
    fn limited(kind: &'static str, max_results: u32) -> Self {
        Self {
            kind,
            max_results: Some(max_results),
        }
    }

    fn unlimited(kind: &'static str) -> Self {
        Self {
            kind,
            max_results: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AnnotateImageResponse {
    logo_annotations: Vec<EntityAnnotation>,
    localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    label_annotations: Vec<EntityAnnotation>,
    image_properties: Option<ImageProperties>,
    error: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    description: Option<String>,
    score: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct LocalizedObjectAnnotation {
    name: Option<String>,
    score: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageProperties {
    dominant_colors: Option<DominantColorsAnnotation>,
}

#[derive(Debug, Deserialize)]
struct DominantColorsAnnotation {
    #[serde(default)]
    colors: Vec<ColorInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorInfo {
    color: Option<WireColor>,
    #[serde(default)]
    score: f64,
}

// Channels arrive as JSON numbers and may be omitted when zero.
#[derive(Debug, Deserialize)]
struct WireColor {
    red: Option<f64>,
    green: Option<f64>,
    blue: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

fn channel(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

impl AnnotateResponse {
    fn into_analysis(self) -> Result<VisionAnalysis, VisionError> {
        let Some(first) = self.responses.into_iter().next() else {
            return Ok(VisionAnalysis::default());
        };
        if let Some(status) = first.error {
            return Err(VisionError::Api {
                code: status.code,
                message: status.message,
            });
        }

        let entity = |source: FeatureSource| {
            move |annotation: EntityAnnotation| DetectedFeature {
                description: annotation.description,
                name: None,
                confidence: annotation.score,
                source,
            }
        };

        Ok(VisionAnalysis {
            logos: first
                .logo_annotations
                .into_iter()
                .map(entity(FeatureSource::Logo))
                .collect(),
            objects: first
                .localized_object_annotations
                .into_iter()
                .map(|object| DetectedFeature {
                    description: None,
                    name: object.name,
                    confidence: object.score,
                    source: FeatureSource::Object,
                })
                .collect(),
            labels: first
                .label_annotations
                .into_iter()
                .map(entity(FeatureSource::Label))
                .collect(),
            dominant_colors: first
                .image_properties
                .and_then(|properties| properties.dominant_colors)
                .map(|dominant| {
                    dominant
                        .colors
                        .into_iter()
                        .map(|info| DominantColorSample {
                            color: info.color.map(|c| {
                                Rgb::new(channel(c.red), channel(c.green), channel(c.blue))
                            }),
                            score: info.score,
                        })
                        .collect()
                }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<VisionAnalysis, VisionError> {
        serde_json::from_value::<AnnotateResponse>(value)
            .unwrap()
            .into_analysis()
    }

    #[test]
    fn test_request_body_shape() {
        let client = GoogleVisionClient::new(&VisionConfig::default()).unwrap();
        let upload = ImageUpload::from_data_url("data:image/png;base64,AAAA").unwrap();
        let body = serde_json::to_value(client.request_body(&upload)).unwrap();
        assert_eq!(body["requests"][0]["image"]["content"], "AAAA");
        assert_eq!(
            body["requests"][0]["features"][0],
            json!({"type": "LOGO_DETECTION", "maxResults": 5})
        );
        assert_eq!(
            body["requests"][0]["features"][4],
            json!({"type": "DOCUMENT_TEXT_DETECTION"})
        );
    }

    #[test]
    fn test_parses_annotations() {
        let analysis = parse(json!({
            "responses": [{
                "logoAnnotations": [{"description": "Acme", "score": 0.91}],
                "localizedObjectAnnotations": [{"name": "Bird", "score": 0.8}],
                "labelAnnotations": [{"description": "Eagle", "score": 0.7}],
                "imageProperties": {"dominantColors": {"colors": [
                    {"color": {"red": 10, "green": 20.4, "blue": 230}, "score": 0.5, "pixelFraction": 0.3},
                    {"color": {"red": 250}, "score": 0.1}
                ]}}
            }]
        }))
        .unwrap();

        assert_eq!(analysis.logos[0].text(), Some("Acme"));
        assert_eq!(analysis.logos[0].source, FeatureSource::Logo);
        assert_eq!(analysis.objects[0].text(), Some("Bird"));
        assert_eq!(analysis.labels[0].confidence, Some(0.7));
        let colors = analysis.dominant_colors().unwrap();
        assert_eq!(colors[0].rgb(), Rgb::new(10, 20.4, 230));
        assert_eq!(colors[1].rgb(), Rgb::new(250, 0, 0));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_api_key() {
        use actix_web::ResponseError;

        use crate::error::AppError;

        let client = GoogleVisionClient::new(&VisionConfig {
            endpoint: "http://127.0.0.1:1/v1/images:annotate".to_string(),
            api_key: Some("SECRET_KEY_123".to_string()),
            ..VisionConfig::default()
        })
        .unwrap();
        let upload = ImageUpload::from_data_url("data:image/png;base64,AAAA").unwrap();

        let error = client.analyze(&upload).await.unwrap_err();
        assert!(matches!(error, VisionError::Transport(_)));
        assert!(!format!("{error:?}").contains("SECRET_KEY_123"));

        let response = AppError::from(error).error_response();
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Vision"));
        assert!(!body.contains("SECRET_KEY_123"));
    }

    #[test]
    fn test_boundary_colors_survive_decoding() {
        use crate::classifier::DesignCodeClassifier;

        let analysis = parse(json!({
            "responses": [{"imageProperties": {"dominantColors": {"colors": [
                {"color": {"red": 220, "green": 10, "blue": 5}, "score": 0.20000001},
                {"color": {"red": 20, "green": 99.6, "blue": 230.2}, "score": 0.5}
            ]}}}]
        }))
        .unwrap();

        let colors = analysis.dominant_colors().unwrap();
        assert_eq!(colors[0].score, 0.20000001);
        let result = DesignCodeClassifier::new().classify(&[], Some(colors));
        assert!(result.contains("29.01.01"));
        assert!(result.contains("29.01.04"));
    }

    #[test]
    fn test_empty_responses_give_empty_analysis() {
        assert_eq!(parse(json!({})).unwrap(), VisionAnalysis::default());
    }

    #[test]
    fn test_per_image_error_is_surfaced() {
        let error = parse(json!({
            "responses": [{"error": {"code": 3, "message": "Bad image data."}}]
        }))
        .unwrap_err();
        assert!(matches!(error, VisionError::Api { code: 3, .. }));
    }
}
