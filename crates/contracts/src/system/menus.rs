use serde::{Deserialize, Serialize};

/// `mpid` value of items that never appear in the sider but stay reachable.
pub const HIDDEN_MENU_PARENT: &str = "-1";

/// One entry of the navigation menu.
///
/// The tree is implicit: `bpid` points at the parent shown in the sider,
/// `mpid` at the parent used for breadcrumbs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpid: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "router", default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl MenuItem {
    /// Business parent, ignoring empty strings.
    pub fn business_parent(&self) -> Option<&str> {
        self.bpid.as_deref().filter(|id| !id.is_empty())
    }

    /// Menu parent, ignoring empty strings.
    pub fn menu_parent(&self) -> Option<&str> {
        self.mpid.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_hidden(&self) -> bool {
        self.menu_parent() == Some(HIDDEN_MENU_PARENT)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuListResponse {
    #[serde(default)]
    pub list: Vec<MenuItem>,
}
