use leptos::prelude::*;

/// Outline icon by name; menu items reference these through their `icon` field.
pub fn icon(name: &str) -> AnyView {
    match name {
        "laptop" | "dashboard" => outline(view! {
            <rect x="2" y="4" width="20" height="12" rx="2"/>
            <path d="M2 20h20"/>
        }.into_any()),
        "user" => outline(view! {
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        }.into_any()),
        "team" | "users" => outline(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any()),
        "bar-chart" | "area-chart" | "line-chart" => outline(view! {
            <path d="M3 3v18h18"/>
            <path d="M18 17V9"/>
            <path d="M13 17V5"/>
            <path d="M8 17v-3"/>
        }.into_any()),
        "api" | "setting" => outline(view! {
            <circle cx="12" cy="12" r="3"/>
            <path d="M12 1v4M12 19v4M4.22 4.22l2.83 2.83M16.95 16.95l2.83 2.83M1 12h4M19 12h4M4.22 19.78l2.83-2.83M16.95 7.05l2.83-2.83"/>
        }.into_any()),
        "file" | "shopping-cart" => outline(view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
        }.into_any()),
        "chevron-right" => outline(view! { <path d="M9 18l6-6-6-6"/> }.into_any()),
        "chevron-down" => outline(view! { <path d="M6 9l6 6 6-6"/> }.into_any()),
        "menu" => outline(view! {
            <path d="M3 6h18M3 12h18M3 18h18"/>
        }.into_any()),
        "panel-left-close" => outline(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18M16 15l-3-3 3-3"/>
        }.into_any()),
        "panel-left-open" => outline(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18M14 9l3 3-3 3"/>
        }.into_any()),
        "sun" => outline(view! {
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41"/>
        }.into_any()),
        "moon" => outline(view! {
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
        }.into_any()),
        "log-out" => outline(view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <path d="M16 17l5-5-5-5M21 12H9"/>
        }.into_any()),
        _ => outline(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4l3 3"/>
        }.into_any()),
    }
}

fn outline(paths: AnyView) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}
