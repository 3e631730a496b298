use serde::{Deserialize, Serialize};

/// Status fields shared by every Feishu response body
///
/// `code == 0` is success; any other value is a rejection described by `msg`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
}

/// Standard response body: `{"code": 0, "msg": "success", "data": {...}}`
///
/// Only decoded once the envelope reported success.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
}

// ============================================================================
// Tokens
// ============================================================================

/// Request body for the internal app/tenant token endpoints
#[derive(Debug, Clone, Serialize)]
pub struct AppCredentialsRequest {
    pub app_id: String,
    pub app_secret: String,
}

/// Response body of `auth/v3/app_access_token/internal` (flat, no `data`)
#[derive(Debug, Clone, Deserialize)]
pub struct AppAccessTokenResponse {
    #[serde(default)]
    pub app_access_token: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expire: u64,
}

/// Response body of `auth/v3/tenant_access_token/internal` (flat, no `data`)
#[derive(Debug, Clone, Deserialize)]
pub struct TenantAccessTokenResponse {
    #[serde(default)]
    pub tenant_access_token: String,
    #[serde(default)]
    pub expire: u64,
}

/// Request body for `authen/v1/access_token`
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationCodeRequest {
    pub grant_type: String,
    pub code: String,
}

impl AuthorizationCodeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            grant_type: "authorization_code".to_string(),
            code: code.into(),
        }
    }
}

/// Request body for `authen/v1/refresh_access_token`
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenRequest {
    pub grant_type: String,
    pub refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            grant_type: "refresh_token".to_string(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// `data` of both user token endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccessTokenData {
    #[serde(default)]
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_expires_in: u64,
}

// ============================================================================
// Recordings
// ============================================================================

/// `data` of `GET vc/v1/meetings/{meeting_id}/recording`
#[derive(Debug, Clone, Deserialize)]
pub struct RecordingData {
    pub recording: Option<MeetingRecording>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingRecording {
    pub url: String,
    pub duration: Option<String>,
}

/// Action type that adds permission objects
pub const ACTION_ADD_PERMISSION: i32 = 0;
/// Permission object type for a single user
pub const PERMISSION_OBJECT_USER: i32 = 1;
/// Permission level that allows viewing
pub const PERMISSION_CAN_VIEW: i32 = 1;

/// Request body for `PATCH vc/v1/meetings/{meeting_id}/recording/set_permission`
#[derive(Debug, Clone, Serialize)]
pub struct SetRecordingPermissionRequest {
    pub action_type: i32,
    pub permission_objects: Vec<PermissionObject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionObject {
    pub id: String,
    pub permission: i32,
    #[serde(rename = "type")]
    pub object_type: i32,
}

impl SetRecordingPermissionRequest {
    /// Grant one user view access
    pub fn add_viewer(user_id: impl Into<String>) -> Self {
        Self {
            action_type: ACTION_ADD_PERMISSION,
            permission_objects: vec![PermissionObject {
                id: user_id.into(),
                permission: PERMISSION_CAN_VIEW,
                object_type: PERMISSION_OBJECT_USER,
            }],
        }
    }
}

// ============================================================================
// Drive permissions
// ============================================================================

/// Request body for `PATCH drive/v2/permissions/{token}/public?type=minutes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicPermissionRequest {
    pub comment_entity: String,
    pub copy_entity: String,
    pub external_access_entity: String,
    pub link_share_entity: String,
    pub manage_collaborator_entity: String,
    pub security_entity: String,
    pub share_entity: String,
}

impl PublicPermissionRequest {
    /// The sharing policy applied to every recording
    ///
    /// Anyone may view, comment and copy; the link is readable inside the
    /// tenant; external access is open; only full-access collaborators manage
    /// collaborators.
    pub fn minutes_public_link() -> Self {
        Self {
            comment_entity: "anyone_can_view".to_string(),
            copy_entity: "anyone_can_view".to_string(),
            external_access_entity: "open".to_string(),
            link_share_entity: "tenant_readable".to_string(),
            manage_collaborator_entity: "collaborator_full_access".to_string(),
            security_entity: "anyone_can_view".to_string(),
            share_entity: "same_tenant".to_string(),
        }
    }
}

// ============================================================================
// Contacts
// ============================================================================

/// `data` of `GET contact/v3/users/{user_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ContactUserData {
    pub user: ContactUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactUser {
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub en_name: String,
    #[serde(default)]
    pub email: String,
}

// ============================================================================
// Messages
// ============================================================================

/// Request body for `POST im/v1/messages`
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    pub receive_id: String,
    pub msg_type: String,
    /// JSON-encoded message content, e.g. `{"text":"..."}`
    pub content: String,
}

/// Content of a `text` message before JSON encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

impl CreateMessageRequest {
    /// Build a plain text message
    pub fn text(receive_id: impl Into<String>, text: impl Into<String>) -> Self {
        let content = TextContent { text: text.into() };
        Self {
            receive_id: receive_id.into(),
            msg_type: "text".to_string(),
            content: serde_json::to_string(&content).unwrap_or_default(),
        }
    }
}

/// `data` of `POST im/v1/messages`
#[derive(Debug, Clone, Deserialize)]
pub struct MessageData {
    #[serde(default)]
    pub message_id: String,
}
