//! Dashboard Component
//!
//! Menu of warehouse operations grouped by category. Entries without a
//! screen yet fall through to the router's login redirect.

use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::Route;

struct MenuCategory {
    title: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const MENU: &[MenuCategory] = &[
    MenuCategory {
        title: "Cold store movements",
        items: &[
            ("Receipt voucher", "/inbound"),
            ("Issue voucher", "/outbound"),
            ("Transfer voucher", "/transfer"),
            ("Product overlap voucher", "/overlap"),
            ("Client custody handover", "/custody-handover"),
            ("Chamber report for vouchers", "/chamber-report"),
            ("Daily issue statement", "/daily-issues"),
        ],
    },
    MenuCategory {
        title: "Catalog",
        items: &[
            ("Products", "/products"),
            ("Add product", "/products/add"),
            ("Sections", "/sections"),
            ("Clients", "/clients"),
        ],
    },
    MenuCategory {
        title: "Stocktaking",
        items: &[
            ("Print stocktake sheets", "/stocktake-sheets"),
            ("Record chamber stocktake", "/stocktake-entry"),
            ("Storekeeper absence committee", "/absence-committee"),
        ],
    },
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let app = use_app();

    view! {
        <section class="dashboard">
            <h2>"Dashboard"</h2>
            <div class="menu-grid">
                {MENU
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="menu-category">
                                <h3>{category.title}</h3>
                                <ul>
                                    {category
                                        .items
                                        .iter()
                                        .map(|(label, path)| {
                                            let route = Route::resolve(path);
                                            view! {
                                                <li>
                                                    <a
                                                        href=*path
                                                        class="menu-item"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            app.navigate(route);
                                                        }
                                                    >
                                                        {*label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_links_to_every_movement_screen() {
        let routes: Vec<Route> = MENU
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|(_, path)| Route::resolve(path))
            .collect();
        assert!(routes.contains(&Route::Inbound));
        assert!(routes.contains(&Route::Outbound));
        assert!(routes.contains(&Route::Products));
    }
}
