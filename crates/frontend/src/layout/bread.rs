use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::app_state::menu_tree::breadcrumb;
use crate::system::app_state::use_app_state;

/// Trail of menu items leading to the current route.
#[component]
pub fn Bread() -> impl IntoView {
    let state = use_app_state();

    let trail = Memo::new(move |_| {
        state.with(|s| {
            breadcrumb(&s.menu, &s.location_pathname)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="bread">
            {move || {
                let items = trail.get();
                let last = items.len().saturating_sub(1);
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let name = item.name.clone();
                        let leading = (i == 0).then(|| icon(item.icon.as_deref().unwrap_or_default()));
                        let link = match item.route.clone() {
                            Some(route) if i < last && !route.contains(':') => {
                                view! { <a href=route>{name}</a> }.into_any()
                            }
                            _ => view! { <span>{name}</span> }.into_any(),
                        };
                        view! {
                            <span class="bread__item">
                                {leading}
                                {link}
                                {(i < last).then(|| view! { <span class="bread__sep">"/"</span> })}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
