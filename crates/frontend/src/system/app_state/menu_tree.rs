//! Sider tree and breadcrumb trail over the flat menu list.

use contracts::system::menus::MenuItem;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

/// Arrange the sider entries by `bpid`, keeping server order.
///
/// Hidden items (`mpid == "-1"`) are skipped; items whose business parent
/// is not in `menu` become roots.
pub fn build_tree(menu: &[MenuItem]) -> Vec<MenuNode> {
    let shown: Vec<&MenuItem> = menu.iter().filter(|m| !m.is_hidden()).collect();
    let is_shown = |id: &str| shown.iter().any(|m| m.id == id);

    shown
        .iter()
        .filter(|m| m.business_parent().map_or(true, |bpid| !is_shown(bpid)))
        .map(|root| build_node(root, &shown))
        .collect()
}

fn build_node(item: &MenuItem, shown: &[&MenuItem]) -> MenuNode {
    let children = shown
        .iter()
        .filter(|m| m.business_parent() == Some(item.id.as_str()) && m.id != item.id)
        .map(|child| build_node(child, shown))
        .collect();
    MenuNode {
        item: item.clone(),
        children,
    }
}

/// Menu item whose route matches `pathname`.
///
/// Segments starting with `:` match any single path segment.
pub fn find_by_route<'a>(menu: &'a [MenuItem], pathname: &str) -> Option<&'a MenuItem> {
    menu.iter()
        .find(|m| m.route.as_deref().is_some_and(|route| route_matches(route, pathname)))
}

fn route_matches(route: &str, pathname: &str) -> bool {
    let route_segments: Vec<&str> = route.trim_end_matches('/').split('/').collect();
    let path_segments: Vec<&str> = pathname.trim_end_matches('/').split('/').collect();

    route_segments.len() == path_segments.len()
        && route_segments
            .iter()
            .zip(&path_segments)
            .all(|(r, p)| (r.starts_with(':') && !p.is_empty()) || r == p)
}

/// Breadcrumb for `pathname`: the `mpid` chain, root first.
///
/// `mpid == "-1"` links through `bpid` instead, so detail pages still show
/// their section.
pub fn breadcrumb<'a>(menu: &'a [MenuItem], pathname: &str) -> Vec<&'a MenuItem> {
    let mut trail = Vec::new();
    let mut current = find_by_route(menu, pathname);

    while let Some(item) = current {
        // cyclic parent ids would otherwise loop forever
        if trail.iter().any(|seen: &&MenuItem| seen.id == item.id) {
            break;
        }
        trail.push(item);

        let parent_id = if item.is_hidden() {
            item.business_parent()
        } else {
            item.menu_parent()
        };
        current = parent_id.and_then(|id| menu.iter().find(|m| m.id == id));
    }

    trail.reverse();
    trail
}
