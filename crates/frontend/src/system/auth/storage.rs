//! Session flag persistence. The identity provider is external to this
//! application; all we remember locally is that a session exists and the
//! profile strings to display.

const SESSION_KEY: &str = "serviceflow.session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored display profile, `name|email`
pub fn get_session() -> Option<(String, String)> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
    let (name, email) = raw.split_once('|')?;
    Some((name.to_string(), email.to_string()))
}

pub fn save_session(name: &str, email: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SESSION_KEY, &format!("{name}|{email}"));
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
