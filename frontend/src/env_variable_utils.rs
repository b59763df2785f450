use lazy_static::lazy_static;
use web_sys::window;

lazy_static! {
    pub static ref API_BASE_URL: String = get_api_base_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window().expect("should have a window in this context");

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    // Get the specific environment variable
    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    // Convert to string if it's not undefined
    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_base_url() -> String {
    get_env_var("API_BASE_URL").unwrap_or_else(|| "http://localhost:8000/api".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "YouTube to Course Converter".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
