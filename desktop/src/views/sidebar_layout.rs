use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let session = ui::use_session();
    let settings = ui::use_settings();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // Session absence is terminal for every screen behind the layout.
    if !session().loading && session().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let user = session().user;
    let is_admin = user.as_ref().map(|u| u.role.is_admin()).unwrap_or(false);

    rsx! {
        div {
            class: "app-shell",
            aside {
                class: "sidebar",
                div {
                    class: "sidebar-brand",
                    div { class: "sidebar-brand-mark", "PV" }
                    div {
                        h1 { class: "sidebar-brand-name", "{settings().system_name}" }
                        p { class: "sidebar-brand-sub", "Records office" }
                    }
                }

                nav {
                    class: "sidebar-nav",
                    NavItem {
                        label: "Dashboard",
                        target: Route::Dashboard {},
                        active: matches!(&route, Route::Dashboard {}),
                    }
                    NavItem {
                        label: "Add request",
                        target: Route::AddRecord {},
                        active: matches!(&route, Route::AddRecord {}),
                    }
                    NavItem {
                        label: "Central archive",
                        target: Route::Archive {},
                        active: matches!(&route, Route::Archive {} | Route::RecordDetail { .. }),
                    }
                    if is_admin {
                        NavItem {
                            label: "Developer settings",
                            target: Route::Settings {},
                            active: matches!(&route, Route::Settings {}),
                        }
                    }
                }

                div {
                    class: "sidebar-footer",
                    if let Some(user) = user {
                        div {
                            class: "sidebar-user",
                            p { class: "sidebar-user-name", "{user.username}" }
                            p { class: "sidebar-user-role", "{user.role.label()}" }
                        }
                    }
                    button {
                        class: "sidebar-logout",
                        onclick: move |_| async move {
                            ui::sign_out(session).await;
                        },
                        "Sign out"
                    }
                }
            }

            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavItem(label: String, target: Route, active: bool) -> Element {
    let nav = use_navigator();
    rsx! {
        button {
            class: if active { "nav-item nav-item-active" } else { "nav-item" },
            onclick: move |_| {
                nav.push(target.clone());
            },
            "{label}"
        }
    }
}
