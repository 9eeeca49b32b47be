//! Sider menu: the visible menu arranged by business parent.

use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::app_state::menu_tree::{build_tree, find_by_route, MenuNode};
use crate::system::app_state::{use_app_state, use_app_store};

/// `keys` with `id` opened if it was closed and closed if it was open.
fn toggle_key(keys: &[String], id: &str) -> Vec<String> {
    if keys.iter().any(|k| k == id) {
        keys.iter().filter(|k| k.as_str() != id).cloned().collect()
    } else {
        let mut next = keys.to_vec();
        next.push(id.to_string());
        next
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app_state();

    let tree = Memo::new(move |_| state.with(|s| build_tree(&s.menu)));

    view! {
        <nav class="app-sidebar__content">
            {move || tree.get().into_iter().map(|node| render_node(node, 0)).collect_view()}
        </nav>
    }
}

fn render_node(node: MenuNode, depth: usize) -> AnyView {
    let state = use_app_state();
    let store = use_app_store();

    let id = node.item.id.clone();
    let label = node.item.name.clone();
    let title = label.clone();
    let item_icon = node.item.icon.clone().unwrap_or_default();
    let padding = format!("{}px", 12 + depth * 16);
    let folded = move || state.with(|s| s.sider_fold && !s.is_navbar);

    if node.children.is_empty() {
        let href = node.item.route.clone().unwrap_or_default();
        let is_active = move || {
            state.with(|s| {
                find_by_route(&s.menu, &s.location_pathname).is_some_and(|m| m.id == id)
            })
        };

        return view! {
            <a
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                style:padding-left=padding
                href=href
                title=title
            >
                {icon(&item_icon)}
                <Show when=move || !folded()>
                    <span class="app-sidebar__label">{label.clone()}</span>
                </Show>
            </a>
        }
        .into_any();
    }

    let open_id = id.clone();
    let is_open = Memo::new(move |_| state.with(|s| s.nav_open_keys.iter().any(|k| k == &open_id)));
    let toggle = move |_| {
        let keys = state.with_untracked(|s| toggle_key(&s.nav_open_keys, &id));
        store.with_value(|s| s.handle_nav_open_keys(keys));
    };
    let children = node.children;

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                style:padding-left=padding
                on:click=toggle
                title=title
            >
                {icon(&item_icon)}
                <Show when=move || !folded()>
                    <span class="app-sidebar__label">{label.clone()}</span>
                </Show>
                {move || if is_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </div>
            <Show when=move || is_open.get()>
                {children
                    .clone()
                    .into_iter()
                    .map(|child| render_node(child, depth + 1))
                    .collect_view()}
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_key() {
        let keys = vec!["2".to_string()];
        assert_eq!(toggle_key(&keys, "4"), vec!["2", "4"]);
        assert!(toggle_key(&keys, "2").is_empty());
    }
}
