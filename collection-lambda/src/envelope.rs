use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::header::{HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

/// The value of the `message` field. Callers tell success from failure by this field,
/// not by the status code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Error,
}

/// The status / message / data wrapper returned by the search lambda, e.g.
/// `{"status":200,"message":"error","data":"Build failed! ..."}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub message: Outcome,
    pub data: String,
}

impl ApiResponse {
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: Outcome::Success,
            data: data.into(),
        }
    }

    /// Failures are still reported with status 200.
    pub fn error(data: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: Outcome::Error,
            data: data.into(),
        }
    }

    pub fn with_status(self, status: u16) -> Self {
        Self { status, ..self }
    }

    /// Wraps the envelope into an API Gateway proxy response with the serialized envelope as the body.
    pub fn into_proxy_response(self) -> Result<ApiGatewayProxyResponse, serde_json::Error> {
        let body = serde_json::to_string(&self)?;

        Ok(json_response(self.status, body))
    }
}

/// Returns a proxy response with a JSON body and the matching content-type header.
pub(crate) fn json_response(status: u16, body: String) -> ApiGatewayProxyResponse {
    let mut response = ApiGatewayProxyResponse {
        status_code: i64::from(status),
        body: Some(Body::Text(body)),
        ..Default::default()
    };
    response
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_lowercase_message() {
        let value = serde_json::to_value(ApiResponse::success("Client Build success!")).unwrap();

        assert_eq!(
            value,
            json!({"status": 200, "message": "success", "data": "Client Build success!"})
        );
    }

    #[test]
    fn error_keeps_status_200() {
        let resp = ApiResponse::error("Build failed! boom");

        assert_eq!(resp.status, 200);
        assert_eq!(resp.message, Outcome::Error);
    }

    #[test]
    fn proxy_response_carries_the_envelope() {
        let resp = ApiResponse::error("Build failed! boom")
            .with_status(503)
            .into_proxy_response()
            .unwrap();

        assert_eq!(resp.status_code, 503);
        assert_eq!(resp.headers.get(CONTENT_TYPE).unwrap(), "application/json");

        let body = match resp.body {
            Some(Body::Text(v)) => v,
            other => panic!("Expected a text body, got {:?}", other),
        };
        let envelope: ApiResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(envelope.message, Outcome::Error);
        assert_eq!(envelope.data, "Build failed! boom");
    }
}
