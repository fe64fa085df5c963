#![cfg(test)]

use serde_json::json;
use session::JwtPayload;

use crate::models::UserData;

pub fn fixture_user_data<F>(mut func: F) -> UserData
where
    F: FnMut(&mut UserData),
{
    let mut data = UserData {
        display_name: "name".to_string(),
        email: "user@example.com".to_string(),
    };
    func(&mut data);
    data
}

pub fn fixture_payload<F>(mut func: F) -> JwtPayload
where
    F: FnMut(&mut JwtPayload),
{
    let mut payload = JwtPayload {
        id: Some(json!("user-1")),
        exp: Some(4_102_444_800),
        iat: Some(1_577_836_800),
    };
    func(&mut payload);
    payload
}
