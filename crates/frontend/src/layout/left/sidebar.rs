//! Sidebar with collapsible menu groups, filtered by the user's permissions.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{visible_screens, Screen};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::access::menu;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    menu_ids: &'static [&'static str],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "store",
        label: "Store",
        icon: "store",
        menu_ids: &[
            menu::DASHBOARD,
            menu::PROFILE,
            menu::SELLER_SETTINGS,
            menu::PAYOUTS,
        ],
    },
    MenuGroup {
        id: "sales",
        label: "Sales",
        icon: "orders",
        menu_ids: &[menu::ORDERS, menu::RETURN, menu::SELLERS],
    },
    MenuGroup {
        id: "content",
        label: "Content",
        icon: "image",
        menu_ids: &[menu::CATEGORIES, menu::CARDS, menu::PRIVACY],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let screens = Memo::new(move |_| {
        auth_state.with(|s| {
            visible_screens(s.user_info.as_ref())
                .into_iter()
                .copied()
                .collect::<Vec<Screen>>()
        })
    });

    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {move || {
                let visible = screens.get();
                MENU_GROUPS
                    .iter()
                    .filter_map(|group| {
                        let items: Vec<Screen> = visible
                            .iter()
                            .filter(|s| group.menu_ids.contains(&s.menu_id))
                            .copied()
                            .collect();
                        if items.is_empty() {
                            return None;
                        }
                        let group_id = group.id;
                        Some(view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        collapsed_groups.update(|ids| {
                                            if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                                ids.remove(pos);
                                            } else {
                                                ids.push(group_id);
                                            }
                                        });
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(group.icon)}
                                        <span>{group.label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            !collapsed_groups.get().contains(&group_id)
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>
                                <Show when=move || !collapsed_groups.get().contains(&group_id)>
                                    <div class="app-sidebar__children">
                                        {items
                                            .iter()
                                            .map(|screen| {
                                                let path = screen.path;
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            ctx.active.with(|a| a.as_deref() == Some(path))
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.navigate(path)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(screen.icon)}
                                                            <span>{screen.label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        })
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::tab_labels::SCREENS;

    #[test]
    fn every_screen_belongs_to_one_group() {
        for screen in SCREENS {
            let groups = MENU_GROUPS
                .iter()
                .filter(|g| g.menu_ids.contains(&screen.menu_id))
                .count();
            assert_eq!(groups, 1, "{}", screen.menu_id);
        }
    }
}
