use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub name: String,
    /// Namespace for every localStorage key the app writes
    pub prefix: String,
    /// Routes reachable without a session. Unset turns the login
    /// redirect off; an empty list protects every route.
    #[serde(default)]
    pub open_pages: Option<Vec<String>>,
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    #[serde(default)]
    pub base_url: String,
    pub user_info: String,
    pub user_login: String,
    pub user_logout: String,
    pub menus: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
name = "Admin Dashboard"
prefix = "adminDashboard"
open_pages = ["/login"]

[api]
base_url = ""
user_info = "/api/v1/user"
user_login = "/api/v1/user/login"
user_logout = "/api/v1/user/logout"
menus = "/api/v1/menus"
"#;

/// Id of the optional `<script type="application/toml">` element that overrides the defaults
const CONFIG_ELEMENT_ID: &str = "app-config";

impl AppConfig {
    pub fn is_open_page(&self, pathname: &str) -> bool {
        match &self.open_pages {
            Some(pages) => pages.iter().any(|page| page == pathname),
            None => true,
        }
    }

    /// Namespaced localStorage key, e.g. `adminDashboardsiderFold`.
    pub fn storage_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // The embedded document is covered by `test_default_config_loads`.
        parse_config(DEFAULT_CONFIG).expect("embedded default config is valid")
    }
}

impl ApiConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration for the running page.
///
/// Search order:
/// 1. `<script id="app-config">` in the host document
/// 2. Falls back to the embedded default config
pub fn load_config() -> AppConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    if let Some(contents) = inline {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded config from #{}", CONFIG_ELEMENT_ID);
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e),
        }
    }

    log::info!("Using default embedded configuration");
    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.prefix, "adminDashboard");
        assert!(config.is_open_page("/login"));
        assert!(!config.is_open_page("/dashboard"));
    }

    #[test]
    fn test_storage_key_and_urls() {
        let mut config = AppConfig::default();
        assert_eq!(config.storage_key("siderFold"), "adminDashboardsiderFold");

        config.api.base_url = "https://admin.example.com/".to_string();
        assert_eq!(
            config.api.url(&config.api.menus),
            "https://admin.example.com/api/v1/menus"
        );
    }

    #[test]
    fn test_open_pages_optional() {
        let config = parse_config(
            r#"
            name = "x"
            prefix = "x"
            [api]
            user_info = "/u"
            user_login = "/l"
            user_logout = "/o"
            menus = "/m"
            "#,
        )
        .unwrap();
        assert_eq!(config.open_pages, None);
        assert!(config.is_open_page("/login"));
        assert!(config.is_open_page("/user"));
        assert_eq!(config.api.url("/m"), "/m");
    }

    #[test]
    fn test_empty_open_pages_protects_login() {
        let mut config = AppConfig::default();
        assert!(config.is_open_page("/login"));
        assert!(!config.is_open_page("/dashboard"));

        config.open_pages = Some(Vec::new());
        assert!(!config.is_open_page("/login"));
    }
}
