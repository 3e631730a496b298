use crate::types::{AccessToken, DirectoryUser, Recording, UserToken};

use super::types::{
    AppAccessTokenResponse, ContactUser, MeetingRecording, TenantAccessTokenResponse,
    UserAccessTokenData,
};

impl From<AppAccessTokenResponse> for AccessToken {
    fn from(body: AppAccessTokenResponse) -> Self {
        AccessToken::new(body.app_access_token, body.expire)
    }
}

impl From<TenantAccessTokenResponse> for AccessToken {
    fn from(body: TenantAccessTokenResponse) -> Self {
        AccessToken::new(body.tenant_access_token, body.expire)
    }
}

impl From<UserAccessTokenData> for UserToken {
    fn from(data: UserAccessTokenData) -> Self {
        UserToken::new(data.access_token, data.refresh_token)
            .with_expiry(data.expires_in, data.refresh_expires_in)
    }
}

impl From<MeetingRecording> for Recording {
    fn from(recording: MeetingRecording) -> Self {
        Recording {
            url: recording.url,
            duration: recording.duration,
        }
    }
}

/// Convert a contact entry, keeping the ID the caller looked it up by
///
/// The directory omits `user_id` unless the app holds the employee-ID scope.
pub(crate) fn contact_to_user(user: ContactUser, requested_id: &str) -> DirectoryUser {
    let user_id = if user.user_id.is_empty() {
        requested_id.to_string()
    } else {
        user.user_id
    };

    let mut directory_user = DirectoryUser::new(user_id, user.name);
    if !user.en_name.is_empty() {
        directory_user = directory_user.with_en_name(user.en_name);
    }
    if !user.email.is_empty() {
        directory_user = directory_user.with_email(user.email);
    }
    directory_user
}
