use contracts::system::auth::Permissions;
use contracts::system::menus::{MenuItem, HIDDEN_MENU_PARENT};

/// Restrict the server menu to what `permissions` allows.
///
/// Elevated roles keep the whole list and get every id granted in `visit`.
pub fn visible_menu(list: Vec<MenuItem>, permissions: &mut Permissions) -> Vec<MenuItem> {
    if permissions.role.is_elevated() {
        permissions.visit = list.iter().map(|item| item.id.clone()).collect();
        return list;
    }

    list.into_iter()
        .filter(|item| is_visible(item, permissions))
        .collect()
}

/// All of: own id granted, menu parent granted (or hidden), business parent granted.
/// A parent clause holds trivially when the item has no such parent.
pub fn is_visible(item: &MenuItem, permissions: &Permissions) -> bool {
    let own = permissions.can_visit(&item.id);
    let menu_parent = item
        .menu_parent()
        .map_or(true, |mpid| permissions.can_visit(mpid) || mpid == HIDDEN_MENU_PARENT);
    let business_parent = item
        .business_parent()
        .map_or(true, |bpid| permissions.can_visit(bpid));

    own && menu_parent && business_parent
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn item(id: &str, bpid: Option<&str>, mpid: Option<&str>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            bpid: bpid.map(str::to_string),
            mpid: mpid.map(str::to_string),
            name: format!("item {}", id),
            ..Default::default()
        }
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            item("1", None, None),
            item("2", Some("1"), Some("1")),
            item("21", Some("2"), Some("-1")),
            item("3", None, None),
            item("31", Some("3"), Some("3")),
        ]
    }

    fn guest(visit: &[&str]) -> Permissions {
        Permissions {
            role: Role::Guest,
            visit: visit.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn ids(menu: &[MenuItem]) -> Vec<&str> {
        menu.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_elevated_roles_see_everything() {
        for role in [Role::Admin, Role::Developer] {
            let mut permissions = Permissions {
                role,
                visit: Vec::new(),
            };
            let menu = visible_menu(sample_menu(), &mut permissions);
            assert_eq!(menu, sample_menu());
            assert_eq!(permissions.visit, vec!["1", "2", "21", "3", "31"]);
        }
    }

    #[test]
    fn test_root_item_requires_own_id() {
        let permissions = guest(&["3"]);
        assert!(!is_visible(&item("1", None, None), &permissions));
        assert!(is_visible(&item("3", None, None), &permissions));
    }

    #[test]
    fn test_hidden_parent_always_passes() {
        let permissions = guest(&["21", "2"]);
        assert!(is_visible(&item("21", Some("2"), Some("-1")), &permissions));
        // own id is still required
        assert!(!is_visible(&item("22", None, Some("-1")), &permissions));
    }

    #[test]
    fn test_business_parent_required() {
        let permissions = guest(&["21"]);
        assert!(!is_visible(&item("21", Some("2"), Some("-1")), &permissions));
    }

    #[test]
    fn test_menu_parent_required() {
        let permissions = guest(&["31"]);
        assert!(!is_visible(&item("31", None, Some("3")), &permissions));
    }

    #[test]
    fn test_empty_parent_ids_are_ignored() {
        let permissions = guest(&["5"]);
        assert!(is_visible(&item("5", Some(""), Some("")), &permissions));
    }

    #[test]
    fn test_guest_filtering_keeps_visit_untouched() {
        let mut permissions = guest(&["1", "2", "21"]);
        let menu = visible_menu(sample_menu(), &mut permissions);
        assert_eq!(ids(&menu), vec!["1", "2", "21"]);
        assert_eq!(permissions.visit, vec!["1", "2", "21"]);
    }
}
