use crate::envelope::json_response;
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::debug;

/// Lambda handler of the ingest function. Returns the event as-is.
pub async fn handler(event: LambdaEvent<Value>) -> Result<ApiGatewayProxyResponse, Error> {
    let (event, ctx) = event.into_parts();
    debug!("Request ID: {}", ctx.request_id);

    Ok(echo(&event)?)
}

/// Serializes the event into the body of a 200 response.
pub fn echo(event: &Value) -> Result<ApiGatewayProxyResponse, serde_json::Error> {
    let body = serde_json::to_string(event)?;
    debug!("Echo: {body}");

    Ok(json_response(200, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::encodings::Body;
    use serde_json::json;

    fn body_of(resp: ApiGatewayProxyResponse) -> Value {
        match resp.body {
            Some(Body::Text(v)) => serde_json::from_str(&v).unwrap(),
            other => panic!("Expected a text body, got {:?}", other),
        }
    }

    #[test]
    fn echoes_flat_object() {
        let event = json!({"a": 1, "b": "x"});
        let resp = echo(&event).unwrap();

        assert_eq!(resp.status_code, 200);
        assert_eq!(body_of(resp), event);
    }

    #[test]
    fn echoes_api_gateway_request() {
        let event = json!({
            "resource": "/employee/ingest",
            "path": "/employee/ingest",
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "queryStringParameters": null,
            "body": "{\"name\":\"Jane\",\"id\":7}",
            "isBase64Encoded": false
        });

        assert_eq!(body_of(echo(&event).unwrap()), event);
    }

    #[test]
    fn echoes_scalars() {
        for event in [Value::Null, json!(42), json!("text"), json!([1, "two", null])] {
            assert_eq!(body_of(echo(&event).unwrap()), event);
        }
    }
}
