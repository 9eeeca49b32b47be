use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::app_state::use_app_state;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();

    let username = move || {
        state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_default()
        })
    };
    let role = move || state.with(|s| s.permissions.role.as_str().to_string());

    view! {
        <div class="dashboard">
            <h2>"Welcome, " {username}</h2>
            <p class="dashboard__role">"Role: " {role}</p>

            <div class="dashboard__cards">
                <For
                    each=move || state.with(|s| {
                        s.menu
                            .iter()
                            .filter(|m| !m.is_hidden() && m.route.is_some())
                            .cloned()
                            .collect::<Vec<_>>()
                    })
                    key=|item| item.id.clone()
                    children=move |item| {
                        let href = item.route.clone().unwrap_or_default();
                        view! {
                            <a class="dashboard__card" href=href>
                                {icon(item.icon.as_deref().unwrap_or("file"))}
                                <span>{item.name.clone()}</span>
                            </a>
                        }
                    }
                />
            </div>
        </div>
    }
}
