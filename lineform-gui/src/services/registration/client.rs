use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::services::http::{HttpError, ResponseExt};

/// Status a record is created with.
pub const INITIAL_STATUS: u8 = 1;

/// Display name attached to the login token by the chat platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    data: Option<Profile>,
}

/// Persisted registration row, as returned by the backend. Column values may
/// be NULL, so everything is optional here; the form treats missing parts as
/// empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "users_fname", default)]
    pub first_name: Option<String>,
    #[serde(rename = "users_sname", default)]
    pub surname: Option<String>,
    #[serde(rename = "users_pin", default)]
    pub pin: Option<String>,
    #[serde(rename = "users_number", default)]
    pub house_number: Option<String>,
    #[serde(rename = "users_moo", default)]
    pub village_no: Option<String>,
    #[serde(rename = "users_road", default)]
    pub road: Option<String>,
    #[serde(rename = "users_tubon", default)]
    pub sub_district: Option<String>,
    #[serde(rename = "users_amphur", default)]
    pub district: Option<String>,
    #[serde(rename = "users_province", default)]
    pub province: Option<String>,
    #[serde(rename = "users_postcode", default)]
    pub postal_code: Option<String>,
    #[serde(rename = "users_tel1", default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[serde(default)]
    data: Option<UserRecord>,
}

/// Create/update payload. `password_hash` is an md5 hex digest and is left
/// out of the JSON entirely when no password was entered (resubmission of an
/// existing record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    #[serde(rename = "users_line_id")]
    pub line_id: String,
    #[serde(rename = "users_fname")]
    pub first_name: String,
    #[serde(rename = "users_passwd", skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(rename = "users_pin")]
    pub pin: String,
    pub status_id: u8,
    #[serde(rename = "users_sname")]
    pub surname: String,
    #[serde(rename = "users_number")]
    pub house_number: String,
    #[serde(rename = "users_moo")]
    pub village_no: String,
    #[serde(rename = "users_road")]
    pub road: String,
    #[serde(rename = "users_tubon")]
    pub sub_district: String,
    #[serde(rename = "users_amphur")]
    pub district: String,
    #[serde(rename = "users_province")]
    pub province: String,
    #[serde(rename = "users_postcode")]
    pub postal_code: String,
    #[serde(rename = "users_tel1")]
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Display name bound to the token. The backend may answer 200 with an
    /// empty `data` if the platform had nothing for this token.
    pub async fn get_profile(&self, token: &str) -> Result<Option<Profile>, HttpError> {
        let url = format!("{}/api/getProfile?id={}", self.base_url, token);
        let response = self.http.get(&url).send().await?.check_success().await?;
        let body: ProfileResponse = response.json().await?;
        Ok(body.data)
    }

    /// Registration row for the token. Absence is the regular first-visit
    /// state, not an error: both `data: null` and a 404 map to `None`.
    pub async fn get_user(&self, token: &str) -> Result<Option<UserRecord>, HttpError> {
        let url = format!("{}/api/user/getUser/{}", self.base_url, token);
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: UserResponse = response.check_success().await?.json().await?;
        Ok(body.data)
    }

    /// Creates the record, or updates it when the backend already holds one
    /// for this token. Only the HTTP status of the answer matters.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<(), HttpError> {
        let url = format!("{}/api/registration/create", self.base_url);
        self.http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?
            .check_success()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_payload_deserialization() {
        let body: ProfileResponse =
            serde_json::from_str(r#"{"data":{"displayName":"สมชาย ใจดี"}}"#).unwrap();
        assert_eq!(body.data.unwrap().display_name, "สมชาย ใจดี");

        let empty: ProfileResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(empty.data.is_none());
    }

    #[test]
    fn user_payload_absent_data_is_first_visit() {
        let body: UserResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(body.data.is_none());
        let body: UserResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.data.is_none());
    }

    #[test]
    fn user_record_tolerates_extra_and_missing_columns() {
        let body: UserResponse = serde_json::from_str(
            r#"{"data":{
                "users_id": 42,
                "users_fname": "สมชาย",
                "users_sname": "ใจดี",
                "users_pin": "1234",
                "users_tubon": "บางรัก",
                "users_amphur": "บางรัก",
                "users_province": "กรุงเทพมหานคร",
                "users_postcode": "10500",
                "users_tel1": "0812345678",
                "status_id": 1
            }}"#,
        )
        .unwrap();
        let record = body.data.unwrap();
        assert_eq!(record.first_name.as_deref(), Some("สมชาย"));
        assert_eq!(record.postal_code.as_deref(), Some("10500"));
        assert!(record.house_number.is_none());
        assert!(record.road.is_none());
    }

    #[tokio::test]
    async fn transport_failure_maps_to_http_error() {
        // Nothing listens on port 1; the connection is refused outright.
        let client = RegistrationClient::new("http://127.0.0.1:1".to_string());
        let err = client.get_user("U1234").await.unwrap_err();
        assert!(err.http_status.is_none());
    }

    #[test]
    fn request_serializes_wire_names_and_omits_missing_password() {
        let request = CreateUserRequest {
            line_id: "U1234".to_string(),
            first_name: "สมชาย".to_string(),
            password_hash: None,
            pin: "1234".to_string(),
            status_id: INITIAL_STATUS,
            surname: "ใจดี".to_string(),
            house_number: "123/12".to_string(),
            village_no: "1".to_string(),
            road: "-".to_string(),
            sub_district: "บางรัก".to_string(),
            district: "บางรัก".to_string(),
            province: "กรุงเทพมหานคร".to_string(),
            postal_code: "10500".to_string(),
            phone: "0812345678".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["users_line_id"], "U1234");
        assert_eq!(object["users_fname"], "สมชาย");
        assert_eq!(object["status_id"], 1);
        assert!(!object.contains_key("users_passwd"));

        let request = CreateUserRequest {
            password_hash: Some("0".repeat(32)),
            ..request
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["users_passwd"], "0".repeat(32));
    }
}
