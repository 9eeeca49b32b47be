pub mod bread;
pub mod left;
pub mod top_header;

use bread::Bread;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sider   |  Bread                        |
/// |  (Left)  |  Content                      |
/// +------------------------------------------+
/// ```
///
/// On narrow screens the sider is hidden and TopHeader shows the popover menu.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <main class="app-main">
                    <Bread />
                    {children()}
                </main>
            </div>
        </div>
    }
}
